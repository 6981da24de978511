/*!
 * Session authentication middleware.
 *
 * Routes wrapped with `RequireSession` demand an
 * `Authorization: Bearer <token>` header. The token is an opaque value
 * from the sessions table; every request resolves it against the
 * database, so revoking a session or deactivating a user takes effect
 * immediately. On success an `AuthContext { user, scope }` lands in the
 * request extensions, with the scope capability (whole school or a
 * single class) resolved exactly once per request.
 *
 * ```rust,ignore
 * web::scope("/api/v1/admin")
 *     .wrap(RequireRole::new_any(UserRole::dashboard_roles()))
 *     .wrap(RequireSession) // applied first (wrap order is inside-out)
 * ```
 */

use crate::models::users::entities::{AccessScope, AuthContext, UserRole};
use crate::models::{ErrorCode, users::entities::User};
use crate::storage::Storage;
use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::{rc::Rc, sync::Arc};
use tracing::{debug, info};

use super::create_error_response;

const BEARER_PREFIX: &str = "Bearer ";
const AUTHORIZATION_HEADER: &str = "Authorization";

#[derive(Clone)]
pub struct RequireSession;

// Fresh database lookup per request, no token-embedded claims
async fn resolve_session(req: &ServiceRequest) -> Result<User, String> {
    let token = req
        .headers()
        .get(AUTHORIZATION_HEADER)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix(BEARER_PREFIX))
        .ok_or_else(|| "Missing or invalid Authorization header".to_string())?;

    let storage = req
        .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
        .expect("Storage not found in app data")
        .get_ref()
        .clone();

    let now = chrono::Utc::now().timestamp();
    storage
        .get_user_by_session_token(token, now)
        .await
        .map_err(|_| "Failed to resolve session".to_string())?
        .ok_or_else(|| "Session is invalid or expired".to_string())
}

impl<S, B> Transform<S, ServiceRequest> for RequireSession
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireSessionMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireSessionMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireSessionMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireSessionMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        Box::pin(async move {
            if req.method() == actix_web::http::Method::OPTIONS {
                return Ok(req.into_response(
                    create_error_response(StatusCode::NO_CONTENT, ErrorCode::Success, "")
                        .map_into_right_body(),
                ));
            }

            match resolve_session(&req).await {
                Ok(user) => {
                    debug!("Session authenticated for user {}", user.id);
                    req.extensions_mut().insert(AuthContext::new(user));
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Err(err) => {
                    info!(
                        "Session authentication failed for request to {}: {}",
                        req.path(),
                        err
                    );
                    Ok(req.into_response(
                        create_error_response(
                            StatusCode::UNAUTHORIZED,
                            ErrorCode::Unauthorized,
                            &format!("Unauthorized: {err}"),
                        )
                        .map_into_right_body(),
                    ))
                }
            }
        })
    }
}

// Helpers for handlers running behind the middleware
impl RequireSession {
    pub fn extract_context(req: &actix_web::HttpRequest) -> Option<AuthContext> {
        req.extensions().get::<AuthContext>().cloned()
    }

    pub fn extract_user(req: &actix_web::HttpRequest) -> Option<User> {
        req.extensions().get::<AuthContext>().map(|c| c.user.clone())
    }

    pub fn extract_user_role(req: &actix_web::HttpRequest) -> Option<UserRole> {
        req.extensions()
            .get::<AuthContext>()
            .map(|c| c.user.role.clone())
    }

    pub fn extract_scope(req: &actix_web::HttpRequest) -> Option<AccessScope> {
        req.extensions()
            .get::<AuthContext>()
            .and_then(|c| c.scope.clone())
    }
}
