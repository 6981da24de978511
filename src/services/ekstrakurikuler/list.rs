use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::ApiResponse;
use crate::services::storage_error_response;

use super::EkstrakurikulerService;

pub async fn handle_list(
    service: &EkstrakurikulerService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_activities().await {
        Ok(activities) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(activities, "Activities retrieved")))
        }
        Err(e) => Ok(storage_error_response(&e)),
    }
}
