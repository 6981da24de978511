use serde::Deserialize;

use super::entities::{LeaveStatus, LeaveType};

#[derive(Debug, Clone, Deserialize)]
pub struct SubmitLeaveRequest {
    pub student_id: i64,
    pub leave_type: LeaveType,
    pub reason: String,
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
    pub parent_name: Option<String>,
    pub parent_contact: Option<String>,
}

// Review decision body; only approved / rejected are accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewLeaveRequest {
    pub status: LeaveStatus,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeaveListParams {
    pub status: Option<LeaveStatus>,
    pub student_id: Option<i64>,
    pub nis: Option<String>,
    pub class: Option<String>,
}
