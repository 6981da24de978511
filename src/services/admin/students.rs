use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse,
    students::requests::{StudentListParams, StudentListQuery},
};
use crate::services::storage_error_response;

use super::{AdminService, scoped_class};

pub async fn handle_students(
    service: &AdminService,
    params: StudentListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let mut query = StudentListQuery::from(&params);
    let (_, class) = match scoped_class(request, query.class.take()) {
        Ok(resolved) => resolved,
        Err(response) => return Ok(response),
    };
    query.class = class;

    match storage.list_students(query).await {
        Ok(page) => Ok(HttpResponse::Ok().json(ApiResponse::success(page, "Students retrieved"))),
        Err(e) => Ok(storage_error_response(&e)),
    }
}
