use super::SeaOrmStorage;
use crate::entity::ekstrakurikuler_activities::{
    ActiveModel, Column, Entity as EkstrakurikulerActivities,
};
use crate::entity::ekstrakurikuler_members::{
    ActiveModel as MemberActiveModel, Column as MemberColumn, Entity as EkstrakurikulerMembers,
};
use crate::errors::{AbsensiError, Result};
use crate::models::ekstrakurikuler::{
    Activity, ActivityMember, CreateActivityRequest, MemberListParams, UpdateActivityRequest,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn create_activity_impl(&self, req: CreateActivityRequest) -> Result<Activity> {
        let existing = EkstrakurikulerActivities::find()
            .filter(Column::KodeEkskul.eq(&req.kode_ekskul))
            .one(&self.db)
            .await
            .map_err(|e| {
                AbsensiError::database_operation(format!("Activity lookup failed: {e}"))
            })?;
        if existing.is_some() {
            return Err(AbsensiError::conflict(format!(
                "Activity code {} already exists",
                req.kode_ekskul
            )));
        }

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            kode_ekskul: Set(req.kode_ekskul),
            nama_ekskul: Set(req.nama_ekskul),
            deskripsi: Set(req.deskripsi),
            pembina: Set(req.pembina),
            aktif: Set(true),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            AbsensiError::database_operation(format!("Create activity failed: {e}"))
        })?;

        Ok(result.into_activity())
    }

    pub async fn list_activities_impl(&self) -> Result<Vec<Activity>> {
        let activities = EkstrakurikulerActivities::find()
            .order_by_asc(Column::KodeEkskul)
            .all(&self.db)
            .await
            .map_err(|e| AbsensiError::database_operation(format!("Activity list failed: {e}")))?;

        Ok(activities.into_iter().map(|m| m.into_activity()).collect())
    }

    pub async fn update_activity_impl(
        &self,
        id: i64,
        update: UpdateActivityRequest,
    ) -> Result<Option<Activity>> {
        let existing = EkstrakurikulerActivities::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| {
                AbsensiError::database_operation(format!("Activity lookup failed: {e}"))
            })?;
        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            ..Default::default()
        };

        if let Some(nama_ekskul) = update.nama_ekskul {
            model.nama_ekskul = Set(nama_ekskul);
        }
        if let Some(deskripsi) = update.deskripsi {
            model.deskripsi = Set(Some(deskripsi));
        }
        if let Some(pembina) = update.pembina {
            model.pembina = Set(Some(pembina));
        }
        if let Some(aktif) = update.aktif {
            model.aktif = Set(aktif);
        }

        let result = model.update(&self.db).await.map_err(|e| {
            AbsensiError::database_operation(format!("Update activity failed: {e}"))
        })?;

        Ok(Some(result.into_activity()))
    }

    /// Cascade drops the membership rows with the activity.
    pub async fn delete_activity_impl(&self, id: i64) -> Result<bool> {
        let result = EkstrakurikulerActivities::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                AbsensiError::database_operation(format!("Delete activity failed: {e}"))
            })?;

        Ok(result.rows_affected > 0)
    }

    pub async fn add_activity_member_impl(
        &self,
        activity_id: i64,
        student_id: i64,
    ) -> Result<ActivityMember> {
        let activity = EkstrakurikulerActivities::find_by_id(activity_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                AbsensiError::database_operation(format!("Activity lookup failed: {e}"))
            })?;
        if activity.is_none() {
            return Err(AbsensiError::not_found(format!(
                "Activity {activity_id} not found"
            )));
        }

        let student = self
            .get_student_by_id_impl(student_id)
            .await?
            .ok_or_else(|| AbsensiError::not_found(format!("Student {student_id} not found")))?;

        let existing = EkstrakurikulerMembers::find()
            .filter(MemberColumn::ActivityId.eq(activity_id))
            .filter(MemberColumn::StudentId.eq(student_id))
            .one(&self.db)
            .await
            .map_err(|e| AbsensiError::database_operation(format!("Member lookup failed: {e}")))?;
        if existing.is_some() {
            return Err(AbsensiError::conflict(
                "Student is already a member of this activity",
            ));
        }

        let student_class = student
            .enrollment
            .as_ref()
            .map(|e| e.class_name.clone())
            .unwrap_or_default();

        let now = chrono::Utc::now().timestamp();

        let model = MemberActiveModel {
            activity_id: Set(activity_id),
            student_id: Set(student_id),
            student_name: Set(student.student.name),
            student_class: Set(student_class),
            joined_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| AbsensiError::database_operation(format!("Add member failed: {e}")))?;

        Ok(result.into_member())
    }

    pub async fn remove_activity_member_impl(
        &self,
        activity_id: i64,
        student_id: i64,
    ) -> Result<bool> {
        let result = EkstrakurikulerMembers::delete_many()
            .filter(MemberColumn::ActivityId.eq(activity_id))
            .filter(MemberColumn::StudentId.eq(student_id))
            .exec(&self.db)
            .await
            .map_err(|e| AbsensiError::database_operation(format!("Remove member failed: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn list_activity_members_impl(
        &self,
        params: MemberListParams,
    ) -> Result<Vec<ActivityMember>> {
        let mut select = EkstrakurikulerMembers::find();

        if let Some(activity_id) = params.activity_id {
            select = select.filter(MemberColumn::ActivityId.eq(activity_id));
        }
        if let Some(ref class) = params.class {
            select = select.filter(MemberColumn::StudentClass.eq(class));
        }

        let members = select
            .order_by_asc(MemberColumn::StudentName)
            .all(&self.db)
            .await
            .map_err(|e| AbsensiError::database_operation(format!("Member list failed: {e}")))?;

        Ok(members.into_iter().map(|m| m.into_member()).collect())
    }
}
