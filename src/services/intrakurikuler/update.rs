use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, ErrorCode, intrakurikuler::requests::UpdateSubjectRequest};
use crate::services::storage_error_response;

use super::IntrakurikulerService;

pub async fn handle_update(
    service: &IntrakurikulerService,
    id: i64,
    update_request: UpdateSubjectRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_subject(id, update_request).await {
        Ok(Some(subject)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(subject, "Subject updated")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            format!("Subject {id} not found"),
        ))),
        Err(e) => Ok(storage_error_response(&e)),
    }
}
