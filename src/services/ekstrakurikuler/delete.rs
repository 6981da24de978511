use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, ErrorCode};
use crate::services::storage_error_response;

use super::EkstrakurikulerService;

pub async fn handle_delete(
    service: &EkstrakurikulerService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_activity(id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Activity deleted"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            format!("Activity {id} not found"),
        ))),
        Err(e) => Ok(storage_error_response(&e)),
    }
}
