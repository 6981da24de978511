use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, ErrorCode, attendance::requests::UpdateAttendanceRequest};
use crate::services::storage_error_response;

use super::AttendanceService;

pub async fn handle_update(
    service: &AttendanceService,
    id: i64,
    update_request: UpdateAttendanceRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .update_attendance(id, update_request, chrono::Utc::now())
        .await
    {
        Ok(Some(record)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(record, "Attendance updated")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AttendanceNotFound,
            format!("Attendance record {id} not found"),
        ))),
        Err(e) => Ok(storage_error_response(&e)),
    }
}
