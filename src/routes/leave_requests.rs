use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::leave_requests::requests::{
    LeaveListParams, ReviewLeaveRequest, SubmitLeaveRequest,
};
use crate::services::LeaveRequestService;
use crate::utils::SafeIDI64;

static LEAVE_SERVICE: Lazy<LeaveRequestService> = Lazy::new(LeaveRequestService::new_lazy);

// Parent-facing, no session required
pub async fn submit_leave_request(
    req: HttpRequest,
    submit_data: web::Json<SubmitLeaveRequest>,
) -> ActixResult<HttpResponse> {
    LEAVE_SERVICE.submit(submit_data.into_inner(), &req).await
}

pub async fn list_leave_requests(
    req: HttpRequest,
    query: web::Query<LeaveListParams>,
) -> ActixResult<HttpResponse> {
    LEAVE_SERVICE.list(query.into_inner(), &req).await
}

pub async fn get_leave_request(
    req: HttpRequest,
    request_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    LEAVE_SERVICE.get(request_id.0, &req).await
}

pub async fn review_leave_request(
    req: HttpRequest,
    request_id: SafeIDI64,
    review_data: web::Json<ReviewLeaveRequest>,
) -> ActixResult<HttpResponse> {
    LEAVE_SERVICE
        .review(request_id.0, review_data.into_inner(), &req)
        .await
}

pub fn configure_leave_request_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/leave-requests")
            .route("", web::post().to(submit_leave_request))
            .service(
                web::scope("")
                    .wrap(middlewares::RequireSession)
                    .route("", web::get().to(list_leave_requests))
                    .route("/{id}", web::get().to(get_leave_request))
                    .route("/{id}", web::put().to(review_leave_request)),
            ),
    );
}
