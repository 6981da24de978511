use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::errors::AbsensiError;
use crate::models::{ApiResponse, ErrorCode, intrakurikuler::requests::CreateSubjectRequest};
use crate::services::storage_error_response;

use super::IntrakurikulerService;

pub async fn handle_create(
    service: &IntrakurikulerService,
    create_request: CreateSubjectRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if create_request.kode_mapel.trim().is_empty() || create_request.nama_mapel.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::MissingField,
            "kode_mapel and nama_mapel are required",
        )));
    }

    match storage.create_subject(create_request).await {
        Ok(subject) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(subject, "Subject created")))
        }
        Err(AbsensiError::Conflict(msg)) => Ok(HttpResponse::Conflict()
            .json(ApiResponse::error_empty(ErrorCode::SubjectAlreadyExists, msg))),
        Err(e) => Ok(storage_error_response(&e)),
    }
}
