use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, ErrorCode, ekstrakurikuler::requests::UpdateActivityRequest};
use crate::services::storage_error_response;

use super::EkstrakurikulerService;

pub async fn handle_update(
    service: &EkstrakurikulerService,
    id: i64,
    update_request: UpdateActivityRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_activity(id, update_request).await {
        Ok(Some(activity)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(activity, "Activity updated")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            format!("Activity {id} not found"),
        ))),
        Err(e) => Ok(storage_error_response(&e)),
    }
}
