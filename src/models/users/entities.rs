use serde::{Deserialize, Serialize};

// Staff roles
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Teacher,
    Staff,
}

impl UserRole {
    pub const ADMIN: &'static str = "admin";
    pub const TEACHER: &'static str = "teacher";
    pub const STAFF: &'static str = "staff";

    pub fn admin_roles() -> &'static [&'static UserRole] {
        &[&Self::Admin]
    }
    pub fn dashboard_roles() -> &'static [&'static UserRole] {
        &[&Self::Admin, &Self::Teacher]
    }
    pub fn all_roles() -> &'static [&'static UserRole] {
        &[&Self::Admin, &Self::Teacher, &Self::Staff]
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            UserRole::ADMIN => Ok(UserRole::Admin),
            UserRole::TEACHER => Ok(UserRole::Teacher),
            UserRole::STAFF => Ok(UserRole::Staff),
            _ => Err(serde::de::Error::custom(format!(
                "invalid user role: '{s}'. expected one of: admin, teacher, staff"
            ))),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Admin => write!(f, "{}", UserRole::ADMIN),
            UserRole::Teacher => write!(f, "{}", UserRole::TEACHER),
            UserRole::Staff => write!(f, "{}", UserRole::STAFF),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(UserRole::Admin),
            "teacher" => Ok(UserRole::Teacher),
            "staff" => Ok(UserRole::Staff),
            _ => Err(format!("Invalid user role: {s}")),
        }
    }
}

// Staff user (admins, teachers, operational staff)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub name: String,
    pub role: UserRole,
    pub is_wali_kelas: bool,
    pub assigned_class: Option<String>,
    pub active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// What slice of the school a request may touch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessScope {
    /// Every class (admins).
    All,
    /// A single class, by class name (wali kelas).
    Class(String),
}

impl User {
    /// Resolve the capability this user holds over scoped admin resources,
    /// if any. Derived once per request by the session middleware.
    pub fn access_scope(&self) -> Option<AccessScope> {
        match self.role {
            UserRole::Admin => Some(AccessScope::All),
            UserRole::Teacher if self.is_wali_kelas => {
                self.assigned_class.clone().map(AccessScope::Class)
            }
            _ => None,
        }
    }
}

/// Authenticated request context, resolved by `RequireSession` from a
/// fresh sessions-table lookup and stored in the request extensions.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user: User,
    pub scope: Option<AccessScope>,
}

impl AuthContext {
    pub fn new(user: User) -> Self {
        let scope = user.access_scope();
        Self { user, scope }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: UserRole, is_wali_kelas: bool, assigned_class: Option<&str>) -> User {
        User {
            id: 1,
            email: "guru@sekolah.sch.id".to_string(),
            password_hash: String::new(),
            name: "Guru".to_string(),
            role,
            is_wali_kelas,
            assigned_class: assigned_class.map(str::to_string),
            active: true,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn admin_scope_is_all() {
        let scope = user(UserRole::Admin, false, None).access_scope();
        assert_eq!(scope, Some(AccessScope::All));
    }

    #[test]
    fn wali_kelas_scope_is_own_class() {
        let scope = user(UserRole::Teacher, true, Some("Kelas 3")).access_scope();
        assert_eq!(scope, Some(AccessScope::Class("Kelas 3".to_string())));
    }

    #[test]
    fn plain_teacher_and_staff_have_no_scope() {
        assert_eq!(user(UserRole::Teacher, false, None).access_scope(), None);
        assert_eq!(user(UserRole::Staff, false, None).access_scope(), None);
        // wali kelas flag without an assigned class grants nothing
        assert_eq!(user(UserRole::Teacher, true, None).access_scope(), None);
    }
}
