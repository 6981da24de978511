use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, leave_requests::requests::LeaveListParams};
use crate::services::storage_error_response;

use super::{AdminService, scoped_class};

pub async fn handle_leave_requests(
    service: &AdminService,
    mut params: LeaveListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let (_, class) = match scoped_class(request, params.class.take()) {
        Ok(resolved) => resolved,
        Err(response) => return Ok(response),
    };
    params.class = class;

    match storage.list_leave_requests(params).await {
        Ok(requests) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(requests, "Leave requests retrieved")))
        }
        Err(e) => Ok(storage_error_response(&e)),
    }
}
