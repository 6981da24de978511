use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, ErrorCode};
use crate::services::storage_error_response;

use super::StudentService;

pub async fn handle_delete(
    service: &StudentService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.deactivate_student(id).await {
        Ok(true) => {
            tracing::info!("Deactivated student {id}");
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Student deactivated")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            format!("Student {id} not found"),
        ))),
        Err(e) => Ok(storage_error_response(&e)),
    }
}
