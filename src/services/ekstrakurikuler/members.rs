use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::errors::AbsensiError;
use crate::models::{
    ApiResponse, ErrorCode,
    ekstrakurikuler::requests::{AddMemberRequest, MemberListParams},
};
use crate::services::storage_error_response;

use super::EkstrakurikulerService;

pub async fn handle_list_members(
    service: &EkstrakurikulerService,
    params: MemberListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_activity_members(params).await {
        Ok(members) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(members, "Members retrieved")))
        }
        Err(e) => Ok(storage_error_response(&e)),
    }
}

pub async fn handle_add_member(
    service: &EkstrakurikulerService,
    activity_id: i64,
    add_request: AddMemberRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .add_activity_member(activity_id, add_request.student_id)
        .await
    {
        Ok(member) => Ok(HttpResponse::Created().json(ApiResponse::success(member, "Member added"))),
        Err(AbsensiError::NotFound(msg)) => {
            Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(ErrorCode::NotFound, msg)))
        }
        Err(AbsensiError::Conflict(msg)) => Ok(HttpResponse::Conflict()
            .json(ApiResponse::error_empty(ErrorCode::AlreadyMember, msg))),
        Err(e) => Ok(storage_error_response(&e)),
    }
}

pub async fn handle_remove_member(
    service: &EkstrakurikulerService,
    activity_id: i64,
    student_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.remove_activity_member(activity_id, student_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Member removed"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "Membership not found",
        ))),
        Err(e) => Ok(storage_error_response(&e)),
    }
}
