use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::ApiResponse;
use crate::services::storage_error_response;

use super::SystemService;

pub async fn handle_db_migrate(
    service: &SystemService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(e) = storage.migrate_up().await {
        return Ok(storage_error_response(&e));
    }

    match storage.table_counts().await {
        Ok(counts) => {
            let tables: serde_json::Map<String, serde_json::Value> = counts
                .into_iter()
                .map(|(name, count)| (name.to_string(), serde_json::json!(count)))
                .collect();
            tracing::info!("Migrations applied, {} tables reported", tables.len());
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                serde_json::json!({ "tables": tables }),
                "Migrations applied",
            )))
        }
        Err(e) => Ok(storage_error_response(&e)),
    }
}
