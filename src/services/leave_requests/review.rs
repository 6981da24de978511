use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireSession;
use crate::models::{
    ApiResponse, ErrorCode,
    leave_requests::{LeaveStatus, requests::ReviewLeaveRequest},
    users::entities::AccessScope,
};
use crate::services::storage_error_response;

use super::LeaveRequestService;

pub async fn handle_review(
    service: &LeaveRequestService,
    id: i64,
    review_request: ReviewLeaveRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if review_request.status == LeaveStatus::Pending {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidStatus,
            "Review status must be approved or rejected",
        )));
    }

    let Some(context) = RequireSession::extract_context(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    let existing = match storage.get_leave_request_by_id(id).await {
        Ok(Some(existing)) => existing,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::LeaveRequestNotFound,
                format!("Leave request {id} not found"),
            )));
        }
        Err(e) => return Ok(storage_error_response(&e)),
    };

    // Reviewers act within their scope: admins everywhere, a wali kelas
    // only over their own class
    match context.scope {
        Some(AccessScope::All) => {}
        Some(AccessScope::Class(ref class)) if *class == existing.student_class => {}
        _ => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::Forbidden,
                "Not allowed to review leave requests for this class",
            )));
        }
    }

    if existing.status != LeaveStatus::Pending {
        return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::Conflict,
            format!("Leave request {id} has already been reviewed"),
        )));
    }

    match storage
        .review_leave_request(id, review_request.status, context.user.id, chrono::Utc::now())
        .await
    {
        Ok(reviewed) => {
            tracing::info!(
                "Leave request {} {} by user {}",
                reviewed.id,
                reviewed.status.as_str(),
                context.user.id
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(reviewed, "Leave request reviewed")))
        }
        Err(e) => Ok(storage_error_response(&e)),
    }
}
