use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::errors::AbsensiError;
use crate::models::{ApiResponse, ErrorCode, leave_requests::requests::SubmitLeaveRequest};
use crate::services::storage_error_response;

use super::LeaveRequestService;

pub async fn handle_submit(
    service: &LeaveRequestService,
    submit_request: SubmitLeaveRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if submit_request.end_date < submit_request.start_date {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidDateRange,
            "End date must not be before start date",
        )));
    }
    if submit_request.reason.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::MissingField,
            "A reason is required",
        )));
    }

    match storage.submit_leave_request(submit_request).await {
        Ok(leave_request) => {
            tracing::info!(
                "Leave request {} submitted for {}",
                leave_request.id,
                leave_request.student_name
            );
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(leave_request, "Leave request submitted")))
        }
        Err(AbsensiError::NotFound(msg)) => Ok(HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::StudentNotFound, msg))),
        Err(e) => Ok(storage_error_response(&e)),
    }
}
