use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::ApiResponse;
use crate::services::storage_error_response;

use super::AuthService;

pub async fn handle_cleanup(
    service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let now = chrono::Utc::now().timestamp();

    match storage.delete_expired_sessions(now).await {
        Ok(removed) => {
            tracing::info!("Removed {removed} expired sessions");
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                serde_json::json!({ "removed": removed }),
                "Expired sessions removed",
            )))
        }
        Err(e) => Ok(storage_error_response(&e)),
    }
}
