use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::errors::AbsensiError;
use crate::models::{ApiResponse, ErrorCode, promotion::requests::PromoteStudentsRequest};
use crate::services::storage_error_response;

use super::PromotionService;

pub async fn handle_promote(
    service: &PromotionService,
    promote_request: PromoteStudentsRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let promotion_date = promote_request
        .promotion_date
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    match storage
        .promote_students(promote_request.new_academic_year_id, promotion_date)
        .await
    {
        Ok(result) => {
            tracing::info!(
                "Promotion into {} complete: {} promoted, {} graduated, {} rombels created",
                result.academic_year,
                result.summary.promoted,
                result.summary.graduated,
                result.summary.rombels_created
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(result, "Promotion complete")))
        }
        Err(AbsensiError::NotFound(msg)) => Ok(HttpResponse::NotFound().json(
            ApiResponse::error_empty(ErrorCode::AcademicYearNotFound, msg),
        )),
        Err(AbsensiError::Conflict(msg)) => Ok(
            HttpResponse::Conflict().json(ApiResponse::error_empty(ErrorCode::AlreadyPromoted, msg))
        ),
        Err(AbsensiError::Validation(msg)) => Ok(HttpResponse::BadRequest().json(
            ApiResponse::error_empty(ErrorCode::NothingToPromote, msg),
        )),
        Err(e) => Ok(storage_error_response(&e)),
    }
}
