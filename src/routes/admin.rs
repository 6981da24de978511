use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::attendance::requests::AttendanceListParams;
use crate::models::leave_requests::requests::{LeaveListParams, ReviewLeaveRequest};
use crate::models::students::requests::StudentListParams;
use crate::models::users::entities::UserRole;
use crate::services::{AdminService, LeaveRequestService};
use crate::utils::SafeIDI64;

static ADMIN_SERVICE: Lazy<AdminService> = Lazy::new(AdminService::new_lazy);
static LEAVE_SERVICE: Lazy<LeaveRequestService> = Lazy::new(LeaveRequestService::new_lazy);

pub async fn dashboard(request: HttpRequest) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.dashboard(&request).await
}

pub async fn attendance(
    req: HttpRequest,
    query: web::Query<AttendanceListParams>,
) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.attendance(query.into_inner(), &req).await
}

pub async fn leave_requests(
    req: HttpRequest,
    query: web::Query<LeaveListParams>,
) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.leave_requests(query.into_inner(), &req).await
}

// Review goes through the leave service, which applies the scope check
pub async fn review_leave_request(
    req: HttpRequest,
    request_id: SafeIDI64,
    review_data: web::Json<ReviewLeaveRequest>,
) -> ActixResult<HttpResponse> {
    LEAVE_SERVICE
        .review(request_id.0, review_data.into_inner(), &req)
        .await
}

pub async fn students(
    req: HttpRequest,
    query: web::Query<StudentListParams>,
) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.students(query.into_inner(), &req).await
}

pub fn configure_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/admin")
            .wrap(middlewares::RequireRole::new_any(UserRole::dashboard_roles()))
            .wrap(middlewares::RequireSession)
            .route("/dashboard", web::get().to(dashboard))
            .route("/attendance", web::get().to(attendance))
            .route("/leave-requests", web::get().to(leave_requests))
            .route("/leave-requests/{id}", web::put().to(review_leave_request))
            .route("/students", web::get().to(students)),
    );
}
