use super::entities::UserRole;
use serde::Deserialize;

// User creation (startup seed and operational tooling; there is no
// public user-management endpoint)
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: UserRole,
    #[serde(default)]
    pub is_wali_kelas: bool,
    pub assigned_class: Option<String>,
}
