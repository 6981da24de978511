pub mod promote;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

pub struct PromotionService {
    storage: Option<Arc<dyn Storage>>,
}

impl PromotionService {
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

    // Year-end promotion, runs once per target year
    pub async fn promote(
        &self,
        promote_request: crate::models::promotion::requests::PromoteStudentsRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        promote::handle_promote(self, promote_request, request).await
    }
}
