use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, attendance::requests::AttendanceListParams};
use crate::services::storage_error_response;

use super::{AdminService, scoped_class};

pub async fn handle_attendance(
    service: &AdminService,
    mut params: AttendanceListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let (_, class) = match scoped_class(request, params.class.take()) {
        Ok(resolved) => resolved,
        Err(response) => return Ok(response),
    };
    params.class = class;

    if params.action.as_deref() == Some("stats") {
        let date = params
            .date
            .unwrap_or_else(|| chrono::Local::now().date_naive());
        return match storage.attendance_stats(date, params.class).await {
            Ok(stats) => {
                Ok(HttpResponse::Ok()
                    .json(ApiResponse::success(stats, "Attendance stats retrieved")))
            }
            Err(e) => Ok(storage_error_response(&e)),
        };
    }

    match storage.list_attendance(params).await {
        Ok(records) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(records, "Attendance retrieved")))
        }
        Err(e) => Ok(storage_error_response(&e)),
    }
}
