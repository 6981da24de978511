use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireSession;
use crate::models::{
    ApiResponse, ErrorCode, academics::requests::InitSchoolYearRequest,
};
use crate::services::storage_error_response;

use super::SystemService;

pub async fn handle_db_init(
    service: &SystemService,
    init_request: InitSchoolYearRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if init_request.end_date < init_request.start_date {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidDateRange,
            "End date must not be before start date",
        )));
    }

    let wali_teacher_id = match init_request.wali_teacher_id {
        Some(id) => id,
        None => match RequireSession::extract_user(request) {
            Some(user) => user.id,
            None => {
                return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                    ErrorCode::Unauthorized,
                    "Authentication required",
                )));
            }
        },
    };

    match storage
        .init_school_year(
            &init_request.name,
            init_request.start_date,
            init_request.end_date,
            wali_teacher_id,
        )
        .await
    {
        Ok((year, rombels)) => {
            tracing::info!(
                "School year {} initialized with {} rombels",
                year.name,
                rombels.len()
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                serde_json::json!({ "academic_year": year, "rombels": rombels }),
                "School year initialized",
            )))
        }
        Err(e) => Ok(storage_error_response(&e)),
    }
}
