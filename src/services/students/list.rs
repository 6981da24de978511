use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    students::requests::{StudentListParams, StudentListQuery},
};
use crate::services::storage_error_response;

use super::StudentService;

pub async fn handle_list(
    service: &StudentService,
    params: StudentListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // Exact-identifier lookups win over the paginated listing
    if let Some(ref nis) = params.nis {
        return match storage.get_student_by_nis(nis).await {
            Ok(Some(student)) => {
                Ok(HttpResponse::Ok().json(ApiResponse::success(student, "Student found")))
            }
            Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                format!("No student with NIS {nis}"),
            ))),
            Err(e) => Ok(storage_error_response(&e)),
        };
    }

    if let Some(ref qr_code) = params.qr_code {
        return match storage.get_student_by_qr_code(qr_code).await {
            Ok(Some(student)) => {
                Ok(HttpResponse::Ok().json(ApiResponse::success(student, "Student found")))
            }
            Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "No student with that QR code",
            ))),
            Err(e) => Ok(storage_error_response(&e)),
        };
    }

    let query = StudentListQuery::from(&params);
    match storage.list_students(query).await {
        Ok(page) => Ok(HttpResponse::Ok().json(ApiResponse::success(page, "Students retrieved"))),
        Err(e) => Ok(storage_error_response(&e)),
    }
}
