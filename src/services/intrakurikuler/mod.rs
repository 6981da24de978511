pub mod assign;
pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

pub struct IntrakurikulerService {
    storage: Option<Arc<dyn Storage>>,
}

impl IntrakurikulerService {
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

    // action=subjects (default) or action=classes for the schedule
    pub async fn list(
        &self,
        params: crate::models::intrakurikuler::requests::IntrakurikulerListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::handle_list(self, params, request).await
    }

    pub async fn create_subject(
        &self,
        create_request: crate::models::intrakurikuler::requests::CreateSubjectRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::handle_create(self, create_request, request).await
    }

    pub async fn update_subject(
        &self,
        id: i64,
        update_request: crate::models::intrakurikuler::requests::UpdateSubjectRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::handle_update(self, id, update_request, request).await
    }

    pub async fn delete_subject(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        delete::handle_delete(self, id, request).await
    }

    // Put a subject on a class timetable
    pub async fn assign(
        &self,
        assign_request: crate::models::intrakurikuler::requests::CreateAssignmentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        assign::handle_assign(self, assign_request, request).await
    }
}
