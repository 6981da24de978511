use serde::{Deserialize, Serialize};

use crate::models::attendance::AttendanceStatus;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    Izin,
    Sakit,
}

impl LeaveType {
    pub const IZIN: &'static str = "izin";
    pub const SAKIT: &'static str = "sakit";

    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveType::Izin => Self::IZIN,
            LeaveType::Sakit => Self::SAKIT,
        }
    }

    /// Attendance status written for each day of an approved leave.
    pub fn attendance_status(&self) -> AttendanceStatus {
        match self {
            LeaveType::Izin => AttendanceStatus::Izin,
            LeaveType::Sakit => AttendanceStatus::Sakit,
        }
    }
}

impl std::str::FromStr for LeaveType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::IZIN => Ok(LeaveType::Izin),
            Self::SAKIT => Ok(LeaveType::Sakit),
            _ => Err(format!("Invalid leave type: {s}")),
        }
    }
}

impl<'de> Deserialize<'de> for LeaveType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub const PENDING: &'static str = "pending";
    pub const APPROVED: &'static str = "approved";
    pub const REJECTED: &'static str = "rejected";

    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => Self::PENDING,
            LeaveStatus::Approved => Self::APPROVED,
            LeaveStatus::Rejected => Self::REJECTED,
        }
    }
}

impl std::str::FromStr for LeaveStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::PENDING => Ok(LeaveStatus::Pending),
            Self::APPROVED => Ok(LeaveStatus::Approved),
            Self::REJECTED => Ok(LeaveStatus::Rejected),
            _ => Err(format!("Invalid leave status: {s}")),
        }
    }
}

impl<'de> Deserialize<'de> for LeaveStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRequest {
    pub id: i64,
    pub student_id: i64,
    pub student_name: String,
    pub student_nis: String,
    pub student_class: String,
    pub leave_type: LeaveType,
    pub reason: String,
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
    pub status: LeaveStatus,
    pub parent_name: Option<String>,
    pub parent_contact: Option<String>,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
    pub reviewed_by: Option<i64>,
    pub reviewed_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leave_type_maps_to_matching_attendance_status() {
        assert_eq!(LeaveType::Izin.attendance_status(), AttendanceStatus::Izin);
        assert_eq!(
            LeaveType::Sakit.attendance_status(),
            AttendanceStatus::Sakit
        );
    }
}
