use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::config::AppConfig;
use crate::models::{ApiResponse, AppStartTime};

use super::SystemService;

pub async fn handle_health(
    _service: &SystemService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let config = AppConfig::get();

    let uptime_seconds = request
        .app_data::<actix_web::web::Data<AppStartTime>>()
        .map(|start| (chrono::Utc::now() - start.start_datetime).num_seconds())
        .unwrap_or_default();

    let payload = serde_json::json!({
        "status": "ok",
        "system_name": config.app.system_name,
        "version": env!("CARGO_PKG_VERSION"),
        "environment": config.app.environment,
        "uptime_seconds": uptime_seconds,
    });

    Ok(HttpResponse::Ok().json(ApiResponse::success(payload, "Service is healthy")))
}
