use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::promotion::requests::PromoteStudentsRequest;
use crate::models::users::entities::UserRole;
use crate::services::PromotionService;

static PROMOTION_SERVICE: Lazy<PromotionService> = Lazy::new(PromotionService::new_lazy);

pub async fn promote_students(
    req: HttpRequest,
    promote_data: web::Json<PromoteStudentsRequest>,
) -> ActixResult<HttpResponse> {
    PROMOTION_SERVICE
        .promote(promote_data.into_inner(), &req)
        .await
}

pub fn configure_promotion_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/promote-students")
            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
            .wrap(middlewares::RequireSession)
            .route("", web::post().to(promote_students)),
    );
}
