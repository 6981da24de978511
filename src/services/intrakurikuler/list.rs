use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, ErrorCode, intrakurikuler::requests::IntrakurikulerListParams};
use crate::services::storage_error_response;

use super::IntrakurikulerService;

pub async fn handle_list(
    service: &IntrakurikulerService,
    params: IntrakurikulerListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match params.action.as_deref() {
        None | Some("subjects") => match storage.list_subjects().await {
            Ok(subjects) => {
                Ok(HttpResponse::Ok().json(ApiResponse::success(subjects, "Subjects retrieved")))
            }
            Err(e) => Ok(storage_error_response(&e)),
        },
        Some("classes") => match storage.list_class_schedule(params.class).await {
            Ok(schedule) => {
                Ok(HttpResponse::Ok().json(ApiResponse::success(schedule, "Schedule retrieved")))
            }
            Err(e) => Ok(storage_error_response(&e)),
        },
        Some(other) => Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            format!("Unknown action '{other}', expected subjects or classes"),
        ))),
    }
}
