use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::ekstrakurikuler::requests::{
    AddMemberRequest, CreateActivityRequest, MemberListParams, UpdateActivityRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::EkstrakurikulerService;
use crate::utils::SafeIDI64;

static EKSTRAKURIKULER_SERVICE: Lazy<EkstrakurikulerService> =
    Lazy::new(EkstrakurikulerService::new_lazy);

pub async fn list_activities(req: HttpRequest) -> ActixResult<HttpResponse> {
    EKSTRAKURIKULER_SERVICE.list(&req).await
}

pub async fn create_activity(
    req: HttpRequest,
    activity_data: web::Json<CreateActivityRequest>,
) -> ActixResult<HttpResponse> {
    EKSTRAKURIKULER_SERVICE
        .create(activity_data.into_inner(), &req)
        .await
}

pub async fn update_activity(
    req: HttpRequest,
    activity_id: SafeIDI64,
    update_data: web::Json<UpdateActivityRequest>,
) -> ActixResult<HttpResponse> {
    EKSTRAKURIKULER_SERVICE
        .update(activity_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_activity(
    req: HttpRequest,
    activity_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    EKSTRAKURIKULER_SERVICE.delete(activity_id.0, &req).await
}

pub async fn list_members(
    req: HttpRequest,
    query: web::Query<MemberListParams>,
) -> ActixResult<HttpResponse> {
    EKSTRAKURIKULER_SERVICE
        .list_members(query.into_inner(), &req)
        .await
}

pub async fn add_member(
    req: HttpRequest,
    activity_id: SafeIDI64,
    member_data: web::Json<AddMemberRequest>,
) -> ActixResult<HttpResponse> {
    EKSTRAKURIKULER_SERVICE
        .add_member(activity_id.0, member_data.into_inner(), &req)
        .await
}

pub async fn remove_member(
    req: HttpRequest,
    path: web::Path<(i64, i64)>,
) -> ActixResult<HttpResponse> {
    let (activity_id, student_id) = path.into_inner();
    EKSTRAKURIKULER_SERVICE
        .remove_member(activity_id, student_id, &req)
        .await
}

pub fn configure_ekstrakurikuler_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/ekstrakurikuler")
            .wrap(middlewares::RequireSession)
            .route("", web::get().to(list_activities))
            .route("/members", web::get().to(list_members))
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .route("", web::post().to(create_activity))
                    .route("/{id}", web::put().to(update_activity))
                    .route("/{id}", web::delete().to(delete_activity))
                    .route("/{id}/members", web::post().to(add_member))
                    .route(
                        "/{activity_id}/members/{student_id}",
                        web::delete().to(remove_member),
                    ),
            ),
    );
}
