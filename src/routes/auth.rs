use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::users::entities::UserRole;
use crate::models::{
    ApiResponse, ErrorCode,
    auth::requests::{AuthActionParams, LoginRequest},
};
use crate::services::AuthService;

static AUTH_SERVICE: Lazy<AuthService> = Lazy::new(AuthService::new_lazy);

// POST dispatcher: ?action=login needs a body, ?action=logout does not
pub async fn auth_action(
    req: HttpRequest,
    query: web::Query<AuthActionParams>,
    body: Option<web::Json<LoginRequest>>,
) -> ActixResult<HttpResponse> {
    match query.action.as_str() {
        "login" => match body {
            Some(login_data) => AUTH_SERVICE.login(login_data.into_inner(), &req).await,
            None => Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::MissingField,
                "Login requires an email and password body",
            ))),
        },
        "logout" => AUTH_SERVICE.logout(&req).await,
        other => Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            format!("Unknown action '{other}', expected login or logout"),
        ))),
    }
}

pub async fn verify(request: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.verify(&request).await
}

pub async fn cleanup_sessions(request: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.cleanup_sessions(&request).await
}

pub fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            .route("", web::post().to(auth_action))
            .service(
                web::scope("")
                    .wrap(middlewares::RequireSession)
                    .route("", web::get().to(verify))
                    .service(
                        web::scope("")
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                            .route("", web::delete().to(cleanup_sessions)),
                    ),
            ),
    );
}
