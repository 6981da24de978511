pub mod get;
pub mod list;
pub mod review;
pub mod submit;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

pub struct LeaveRequestService {
    storage: Option<Arc<dyn Storage>>,
}

impl LeaveRequestService {
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

    // Parent-facing submission, lands as pending
    pub async fn submit(
        &self,
        submit_request: crate::models::leave_requests::requests::SubmitLeaveRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        submit::handle_submit(self, submit_request, request).await
    }

    pub async fn list(
        &self,
        params: crate::models::leave_requests::requests::LeaveListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::handle_list(self, params, request).await
    }

    pub async fn get(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::handle_get(self, id, request).await
    }

    // Approve or reject; approval materializes attendance rows
    pub async fn review(
        &self,
        id: i64,
        review_request: crate::models::leave_requests::requests::ReviewLeaveRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        review::handle_review(self, id, review_request, request).await
    }
}
