use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::academics::requests::InitSchoolYearRequest;
use crate::models::users::entities::UserRole;
use crate::services::SystemService;

static SYSTEM_SERVICE: Lazy<SystemService> = Lazy::new(SystemService::new_lazy);

pub async fn health(request: HttpRequest) -> ActixResult<HttpResponse> {
    SYSTEM_SERVICE.health(&request).await
}

pub async fn db_migrate(request: HttpRequest) -> ActixResult<HttpResponse> {
    SYSTEM_SERVICE.db_migrate(&request).await
}

pub async fn db_init(
    req: HttpRequest,
    init_data: web::Json<InitSchoolYearRequest>,
) -> ActixResult<HttpResponse> {
    SYSTEM_SERVICE.db_init(init_data.into_inner(), &req).await
}

pub fn configure_system_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/system")
            .route("/health", web::get().to(health))
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .wrap(middlewares::RequireSession)
                    .route("/db-migrate", web::post().to(db_migrate))
                    .route("/db-init", web::post().to(db_init)),
            ),
    );
}
