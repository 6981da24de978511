pub mod db_init;
pub mod db_migrate;
pub mod health;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

pub struct SystemService {
    storage: Option<Arc<dyn Storage>>,
}

impl SystemService {
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

    pub async fn health(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        health::handle_health(self, request).await
    }

    // Re-run pending migrations, report table counts
    pub async fn db_migrate(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        db_migrate::handle_db_migrate(self, request).await
    }

    // First-install seed: academic year + grade 1-6 rombels
    pub async fn db_init(
        &self,
        init_request: crate::models::academics::requests::InitSchoolYearRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        db_init::handle_db_init(self, init_request, request).await
    }
}
