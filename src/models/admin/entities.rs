use serde::{Deserialize, Serialize};

use crate::models::attendance::AttendanceStats;
use crate::models::users::entities::UserRole;

// Dashboard snapshot for the caller's scope (whole school for admins,
// the assigned class for a wali kelas).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    pub date: chrono::NaiveDate,
    pub role: UserRole,
    pub scope_class: Option<String>,
    pub attendance: AttendanceStats,
    pub pending_leave_requests: i64,
}
