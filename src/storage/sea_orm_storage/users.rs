use super::SeaOrmStorage;
use crate::entity::sessions::{
    ActiveModel as SessionActiveModel, Column as SessionColumn, Entity as Sessions,
};
use crate::entity::users::{ActiveModel, Column, Entity as Users};
use crate::errors::{AbsensiError, Result};
use crate::models::users::{entities::User, requests::CreateUserRequest};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// Create a staff user. The caller hashes the password.
    pub async fn create_user_impl(
        &self,
        req: CreateUserRequest,
        password_hash: String,
    ) -> Result<User> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            email: Set(req.email),
            password_hash: Set(password_hash),
            name: Set(req.name),
            role: Set(req.role.to_string()),
            is_wali_kelas: Set(req.is_wali_kelas),
            assigned_class: Set(req.assigned_class),
            active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| AbsensiError::database_operation(format!("Create user failed: {e}")))?;

        Ok(result.into_user())
    }

    pub async fn get_user_by_id_impl(&self, id: i64) -> Result<Option<User>> {
        let result = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AbsensiError::database_operation(format!("User lookup failed: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    pub async fn get_user_by_email_impl(&self, email: &str) -> Result<Option<User>> {
        let result = Users::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| AbsensiError::database_operation(format!("User lookup failed: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    pub async fn count_users_impl(&self) -> Result<u64> {
        let count = Users::find()
            .count(&self.db)
            .await
            .map_err(|e| AbsensiError::database_operation(format!("User count failed: {e}")))?;

        Ok(count)
    }

    /// Create a session row for a fresh login.
    pub async fn create_session_impl(
        &self,
        user_id: i64,
        token: &str,
        expires_at: i64,
    ) -> Result<()> {
        let now = chrono::Utc::now().timestamp();

        let model = SessionActiveModel {
            user_id: Set(user_id),
            token: Set(token.to_string()),
            expires_at: Set(expires_at),
            created_at: Set(now),
            ..Default::default()
        };

        model
            .insert(&self.db)
            .await
            .map_err(|e| AbsensiError::database_operation(format!("Create session failed: {e}")))?;

        Ok(())
    }

    /// Resolve a bearer token to its user. Expired or unknown tokens and
    /// deactivated users all come back as None; every call hits the
    /// database so revocation takes effect immediately.
    pub async fn get_user_by_session_token_impl(
        &self,
        token: &str,
        now: i64,
    ) -> Result<Option<User>> {
        let session = Sessions::find()
            .filter(SessionColumn::Token.eq(token))
            .one(&self.db)
            .await
            .map_err(|e| AbsensiError::database_operation(format!("Session lookup failed: {e}")))?;

        let Some(session) = session else {
            return Ok(None);
        };
        if session.is_expired(now) {
            return Ok(None);
        }

        let user = self.get_user_by_id_impl(session.user_id).await?;
        Ok(user.filter(|u| u.active))
    }

    pub async fn delete_session_impl(&self, token: &str) -> Result<bool> {
        let result = Sessions::delete_many()
            .filter(SessionColumn::Token.eq(token))
            .exec(&self.db)
            .await
            .map_err(|e| AbsensiError::database_operation(format!("Delete session failed: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn delete_expired_sessions_impl(&self, now: i64) -> Result<u64> {
        let result = Sessions::delete_many()
            .filter(SessionColumn::ExpiresAt.lte(now))
            .exec(&self.db)
            .await
            .map_err(|e| {
                AbsensiError::database_operation(format!("Session cleanup failed: {e}"))
            })?;

        Ok(result.rows_affected)
    }
}
