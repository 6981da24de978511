pub mod create;
pub mod delete;
pub mod list;
pub mod members;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

pub struct EkstrakurikulerService {
    storage: Option<Arc<dyn Storage>>,
}

impl EkstrakurikulerService {
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

    pub async fn list(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::handle_list(self, request).await
    }

    pub async fn create(
        &self,
        create_request: crate::models::ekstrakurikuler::requests::CreateActivityRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::handle_create(self, create_request, request).await
    }

    pub async fn update(
        &self,
        id: i64,
        update_request: crate::models::ekstrakurikuler::requests::UpdateActivityRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::handle_update(self, id, update_request, request).await
    }

    pub async fn delete(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        delete::handle_delete(self, id, request).await
    }

    pub async fn list_members(
        &self,
        params: crate::models::ekstrakurikuler::requests::MemberListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        members::handle_list_members(self, params, request).await
    }

    pub async fn add_member(
        &self,
        activity_id: i64,
        add_request: crate::models::ekstrakurikuler::requests::AddMemberRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        members::handle_add_member(self, activity_id, add_request, request).await
    }

    pub async fn remove_member(
        &self,
        activity_id: i64,
        student_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        members::handle_remove_member(self, activity_id, student_id, request).await
    }
}
