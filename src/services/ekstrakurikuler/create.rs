use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::errors::AbsensiError;
use crate::models::{ApiResponse, ErrorCode, ekstrakurikuler::requests::CreateActivityRequest};
use crate::services::storage_error_response;

use super::EkstrakurikulerService;

pub async fn handle_create(
    service: &EkstrakurikulerService,
    create_request: CreateActivityRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if create_request.kode_ekskul.trim().is_empty()
        || create_request.nama_ekskul.trim().is_empty()
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::MissingField,
            "kode_ekskul and nama_ekskul are required",
        )));
    }

    match storage.create_activity(create_request).await {
        Ok(activity) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(activity, "Activity created")))
        }
        Err(AbsensiError::Conflict(msg)) => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(ErrorCode::ActivityAlreadyExists, msg),
        )),
        Err(e) => Ok(storage_error_response(&e)),
    }
}
