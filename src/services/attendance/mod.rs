pub mod check_in;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::storage::Storage;

pub struct AttendanceService {
    storage: Option<Arc<dyn Storage>>,
}

impl AttendanceService {
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

    pub(crate) fn get_config(&self) -> &AppConfig {
        AppConfig::get()
    }

    // QR scan or manual check-in
    pub async fn check_in(
        &self,
        check_in_request: crate::models::attendance::requests::CheckInRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        check_in::handle_check_in(self, check_in_request, request).await
    }

    // Listing plus ?action=stats recap
    pub async fn list(
        &self,
        params: crate::models::attendance::requests::AttendanceListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::handle_list(self, params, request).await
    }

    pub async fn update(
        &self,
        id: i64,
        update_request: crate::models::attendance::requests::UpdateAttendanceRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::handle_update(self, id, update_request, request).await
    }
}
