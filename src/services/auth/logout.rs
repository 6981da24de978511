use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, ErrorCode};
use crate::services::storage_error_response;

use super::AuthService;

pub async fn handle_logout(
    service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let token = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "));

    let Some(token) = token else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Missing Authorization header",
        )));
    };

    match storage.delete_session(token).await {
        // Deleting an already-gone session is still a successful logout
        Ok(_) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Logout successful"))),
        Err(e) => Ok(storage_error_response(&e)),
    }
}
