use serde::Deserialize;

use super::entities::AttendanceStatus;

// QR scan or manual entry; qr_code wins when both identifiers are
// present.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckInRequest {
    pub qr_code: Option<String>,
    pub student_id: Option<i64>,
    pub status: Option<AttendanceStatus>,
    pub notes: Option<String>,
}

// PUT update body. `check_out` stamps the current time.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAttendanceRequest {
    pub status: Option<AttendanceStatus>,
    pub notes: Option<String>,
    #[serde(default)]
    pub check_out: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AttendanceListParams {
    pub date: Option<chrono::NaiveDate>,
    pub class: Option<String>,
    pub student_id: Option<i64>,
    pub action: Option<String>,
}

// Storage-level payload for inserting one attendance row.
#[derive(Debug, Clone)]
pub struct NewAttendance {
    pub student_id: i64,
    pub student_name: String,
    pub student_nis: String,
    pub student_class: String,
    pub date: chrono::NaiveDate,
    pub check_in_time: chrono::DateTime<chrono::Utc>,
    pub status: AttendanceStatus,
    pub scanned_by: Option<i64>,
    pub notes: Option<String>,
}
