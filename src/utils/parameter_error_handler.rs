use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse};

use crate::models::{ApiResponse, ErrorCode};

/// Turn malformed JSON bodies into the standard envelope.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let detail = err.to_string();
    let body = ApiResponse::error_empty(
        ErrorCode::BadRequest,
        format!("Invalid request body: {detail}"),
    );
    InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
}

/// Turn malformed query strings into the standard envelope.
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let detail = err.to_string();
    let body = ApiResponse::error_empty(
        ErrorCode::BadRequest,
        format!("Invalid query parameters: {detail}"),
    );
    InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
}
