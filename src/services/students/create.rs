use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::errors::AbsensiError;
use crate::models::{ApiResponse, ErrorCode, students::requests::CreateStudentRequest};
use crate::services::storage_error_response;
use crate::utils::token::generate_qr_code;
use crate::utils::validate::validate_nis;

use super::StudentService;

pub async fn handle_create(
    service: &StudentService,
    create_request: CreateStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(msg) = validate_nis(&create_request.nis) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }
    if create_request.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::MissingField,
            "Student name must not be empty",
        )));
    }

    let qr_code = generate_qr_code(&create_request.nis);

    match storage.create_student(create_request, qr_code).await {
        Ok(student) => {
            tracing::info!("Created student {} ({})", student.student.name, student.student.nis);
            Ok(HttpResponse::Created().json(ApiResponse::success(student, "Student created")))
        }
        Err(AbsensiError::Conflict(msg)) => Ok(HttpResponse::Conflict()
            .json(ApiResponse::error_empty(ErrorCode::StudentAlreadyExists, msg))),
        Err(e) => Ok(storage_error_response(&e)),
    }
}
