use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::errors::AbsensiError;
use crate::models::{ApiResponse, ErrorCode, intrakurikuler::requests::CreateAssignmentRequest};
use crate::services::storage_error_response;
use crate::utils::validate::validate_time_of_day;

use super::IntrakurikulerService;

pub async fn handle_assign(
    service: &IntrakurikulerService,
    assign_request: CreateAssignmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    for value in [&assign_request.jam_mulai, &assign_request.jam_selesai] {
        if let Err(msg) = validate_time_of_day(value) {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
        }
    }

    match storage.create_assignment(assign_request).await {
        Ok(entry) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(entry, "Assignment created")))
        }
        Err(AbsensiError::NotFound(msg)) => {
            Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(ErrorCode::NotFound, msg)))
        }
        Err(e) => Ok(storage_error_response(&e)),
    }
}
