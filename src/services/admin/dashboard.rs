use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, admin::DashboardStats};
use crate::services::storage_error_response;

use super::{AdminService, scoped_class};

pub async fn handle_dashboard(
    service: &AdminService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let (context, class) = match scoped_class(request, None) {
        Ok(resolved) => resolved,
        Err(response) => return Ok(response),
    };

    let date = chrono::Local::now().date_naive();

    let attendance = match storage.attendance_stats(date, class.clone()).await {
        Ok(stats) => stats,
        Err(e) => return Ok(storage_error_response(&e)),
    };

    let pending_leave_requests = match storage.count_pending_leave_requests(class.clone()).await {
        Ok(count) => count,
        Err(e) => return Ok(storage_error_response(&e)),
    };

    let stats = DashboardStats {
        date,
        role: context.user.role,
        scope_class: class,
        attendance,
        pending_leave_requests,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(stats, "Dashboard retrieved")))
}
