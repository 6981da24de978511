pub mod academics;
pub mod admin;
pub mod attendance;
pub mod auth;
pub mod common;
pub mod ekstrakurikuler;
pub mod intrakurikuler;
pub mod leave_requests;
pub mod promotion;
pub mod students;
pub mod users;

pub use common::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

use serde::{Deserialize, Serialize};

/// Business error codes carried in the `ApiResponse` envelope.
/// The leading digits mirror the HTTP status the handler responds with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ErrorCode {
    Success = 0,

    // 400
    BadRequest = 40000,
    MissingField = 40001,
    InvalidDateRange = 40002,
    InvalidStatus = 40003,
    EmailInvalid = 40004,
    PasswordInvalid = 40005,
    NothingToPromote = 40006,

    // 401
    Unauthorized = 40100,
    AuthFailed = 40101,
    SessionExpired = 40102,

    // 403
    Forbidden = 40300,

    // 404
    NotFound = 40400,
    StudentNotFound = 40401,
    AttendanceNotFound = 40402,
    LeaveRequestNotFound = 40403,
    AcademicYearNotFound = 40404,

    // 409
    Conflict = 40900,
    AlreadyCheckedIn = 40901,
    StudentAlreadyExists = 40902,
    AlreadyPromoted = 40903,
    SubjectAlreadyExists = 40904,
    ActivityAlreadyExists = 40905,
    AlreadyMember = 40906,

    // 500
    InternalServerError = 50000,
}

/// Process start time, exposed for uptime reporting.
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
