use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::intrakurikuler::requests::{
    CreateAssignmentRequest, CreateSubjectRequest, IntrakurikulerListParams, UpdateSubjectRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::IntrakurikulerService;
use crate::utils::SafeIDI64;

static INTRAKURIKULER_SERVICE: Lazy<IntrakurikulerService> =
    Lazy::new(IntrakurikulerService::new_lazy);

pub async fn list(
    req: HttpRequest,
    query: web::Query<IntrakurikulerListParams>,
) -> ActixResult<HttpResponse> {
    INTRAKURIKULER_SERVICE.list(query.into_inner(), &req).await
}

pub async fn create_subject(
    req: HttpRequest,
    subject_data: web::Json<CreateSubjectRequest>,
) -> ActixResult<HttpResponse> {
    INTRAKURIKULER_SERVICE
        .create_subject(subject_data.into_inner(), &req)
        .await
}

pub async fn update_subject(
    req: HttpRequest,
    subject_id: SafeIDI64,
    update_data: web::Json<UpdateSubjectRequest>,
) -> ActixResult<HttpResponse> {
    INTRAKURIKULER_SERVICE
        .update_subject(subject_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_subject(req: HttpRequest, subject_id: SafeIDI64) -> ActixResult<HttpResponse> {
    INTRAKURIKULER_SERVICE.delete_subject(subject_id.0, &req).await
}

pub async fn create_assignment(
    req: HttpRequest,
    assignment_data: web::Json<CreateAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    INTRAKURIKULER_SERVICE
        .assign(assignment_data.into_inner(), &req)
        .await
}

pub fn configure_intrakurikuler_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/intrakurikuler")
            .wrap(middlewares::RequireSession)
            .route("", web::get().to(list))
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .route("", web::post().to(create_subject))
                    .route("/assignments", web::post().to(create_assignment))
                    .route("/{id}", web::put().to(update_subject))
                    .route("/{id}", web::delete().to(delete_subject)),
            ),
    );
}
