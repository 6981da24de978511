pub mod admin;
pub mod attendance;
pub mod auth;
pub mod ekstrakurikuler;
pub mod intrakurikuler;
pub mod leave_requests;
pub mod promotion;
pub mod students;
pub mod system;

pub use admin::AdminService;
pub use attendance::AttendanceService;
pub use auth::AuthService;
pub use ekstrakurikuler::EkstrakurikulerService;
pub use intrakurikuler::IntrakurikulerService;
pub use leave_requests::LeaveRequestService;
pub use promotion::PromotionService;
pub use students::StudentService;
pub use system::SystemService;

use actix_web::HttpResponse;

use crate::errors::AbsensiError;
use crate::models::{ApiResponse, ErrorCode};

// Default mapping from a storage error to an HTTP envelope. Handlers
// with more specific business codes match first and fall through here.
pub(crate) fn storage_error_response(err: &AbsensiError) -> HttpResponse {
    let message = err.message();
    match err {
        AbsensiError::Validation(_) => HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, message)),
        AbsensiError::NotFound(_) => {
            HttpResponse::NotFound().json(ApiResponse::error_empty(ErrorCode::NotFound, message))
        }
        AbsensiError::Conflict(_) => {
            HttpResponse::Conflict().json(ApiResponse::error_empty(ErrorCode::Conflict, message))
        }
        AbsensiError::Authentication(_) => HttpResponse::Unauthorized()
            .json(ApiResponse::error_empty(ErrorCode::AuthFailed, message)),
        AbsensiError::Authorization(_) => HttpResponse::Forbidden()
            .json(ApiResponse::error_empty(ErrorCode::Forbidden, message)),
        _ => {
            tracing::error!("Storage error: {err}");
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Internal server error",
            ))
        }
    }
}
