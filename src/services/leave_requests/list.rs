use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireSession;
use crate::models::{
    ApiResponse, leave_requests::requests::LeaveListParams, users::entities::AccessScope,
};
use crate::services::storage_error_response;

use super::LeaveRequestService;

pub async fn handle_list(
    service: &LeaveRequestService,
    mut params: LeaveListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // A wali kelas only ever sees their own class
    if let Some(AccessScope::Class(class)) = RequireSession::extract_scope(request) {
        params.class = Some(class);
    }

    match storage.list_leave_requests(params).await {
        Ok(requests) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(requests, "Leave requests retrieved")))
        }
        Err(e) => Ok(storage_error_response(&e)),
    }
}
