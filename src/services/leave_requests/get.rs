use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, ErrorCode};
use crate::services::storage_error_response;

use super::LeaveRequestService;

pub async fn handle_get(
    service: &LeaveRequestService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_leave_request_by_id(id).await {
        Ok(Some(leave_request)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(leave_request, "Leave request found")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::LeaveRequestNotFound,
            format!("Leave request {id} not found"),
        ))),
        Err(e) => Ok(storage_error_response(&e)),
    }
}
