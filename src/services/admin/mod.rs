pub mod attendance;
pub mod dashboard;
pub mod leave_requests;
pub mod students;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::middlewares::RequireSession;
use crate::models::{
    ApiResponse, ErrorCode,
    users::entities::{AccessScope, AuthContext},
};
use crate::storage::Storage;

pub struct AdminService {
    storage: Option<Arc<dyn Storage>>,
}

impl AdminService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub async fn dashboard(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        dashboard::handle_dashboard(self, request).await
    }

    pub async fn attendance(
        &self,
        params: crate::models::attendance::requests::AttendanceListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        attendance::handle_attendance(self, params, request).await
    }

    pub async fn leave_requests(
        &self,
        params: crate::models::leave_requests::requests::LeaveListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        leave_requests::handle_leave_requests(self, params, request).await
    }

    pub async fn students(
        &self,
        params: crate::models::students::requests::StudentListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        students::handle_students(self, params, request).await
    }
}

// Narrow a requested class filter to what the caller's capability
// allows. Admins pass their filter through, a wali kelas is pinned to
// their own class, everyone else is rejected.
pub(crate) fn scoped_class(
    request: &HttpRequest,
    requested: Option<String>,
) -> Result<(AuthContext, Option<String>), HttpResponse> {
    let Some(context) = RequireSession::extract_context(request) else {
        return Err(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    match context.scope.clone() {
        Some(AccessScope::All) => Ok((context, requested)),
        Some(AccessScope::Class(class)) => Ok((context, Some(class))),
        None => Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "No dashboard scope for this account",
        ))),
    }
}
