use actix_web::dev::Payload;
use actix_web::error::InternalError;
use actix_web::{FromRequest, HttpRequest, HttpResponse};
use std::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

/// Path extractor for `{id}` segments that rejects non-positive or
/// non-numeric values with a proper envelope instead of a bare 404.
pub struct SafeIDI64(pub i64);

impl FromRequest for SafeIDI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let raw = req.match_info().get("id").unwrap_or_default();
        match raw.parse::<i64>() {
            Ok(id) if id > 0 => ready(Ok(SafeIDI64(id))),
            _ => {
                let body = ApiResponse::error_empty(
                    ErrorCode::BadRequest,
                    format!("Invalid id in path: '{raw}'"),
                );
                ready(Err(InternalError::from_response(
                    "invalid id",
                    HttpResponse::BadRequest().json(body),
                )
                .into()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn accepts_positive_ids() {
        let req = TestRequest::default()
            .param("id", "42")
            .to_http_request();
        let result = SafeIDI64::from_request(&req, &mut Payload::None).await;
        assert_eq!(result.unwrap().0, 42);
    }

    #[actix_web::test]
    async fn rejects_garbage_and_non_positive() {
        for raw in ["abc", "0", "-5", ""] {
            let req = TestRequest::default()
                .param("id", raw)
                .to_http_request();
            let result = SafeIDI64::from_request(&req, &mut Payload::None).await;
            assert!(result.is_err(), "expected rejection for '{raw}'");
        }
    }
}
