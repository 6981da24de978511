use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::errors::AbsensiError;
use crate::middlewares::RequireSession;
use crate::models::{
    ApiResponse, ErrorCode,
    attendance::{
        entities::AttendanceStatus,
        requests::{CheckInRequest, NewAttendance, UpdateAttendanceRequest},
    },
    students::StudentDetail,
};
use crate::services::storage_error_response;
use crate::utils::time::{is_late, parse_cutoff};

use super::AttendanceService;

pub async fn handle_check_in(
    service: &AttendanceService,
    check_in_request: CheckInRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config();

    // QR code wins when both identifiers are present
    let lookup = if let Some(ref qr_code) = check_in_request.qr_code {
        storage.get_student_by_qr_code(qr_code).await
    } else if let Some(student_id) = check_in_request.student_id {
        storage.get_student_by_id(student_id).await
    } else {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::MissingField,
            "Either qr_code or student_id is required",
        )));
    };

    let student: Option<StudentDetail> = match lookup {
        Ok(student) => student,
        Err(e) => return Ok(storage_error_response(&e)),
    };

    let Some(student) = student else {
        return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            "Student not found",
        )));
    };

    if !student.student.active {
        return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            "Student is not active",
        )));
    }

    let Some(ref enrollment) = student.enrollment else {
        return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            "Student is not enrolled in any class",
        )));
    };

    let now = chrono::Utc::now();
    let local = chrono::Local::now();
    let today = local.date_naive();

    match storage
        .get_attendance_by_student_and_date(student.student.id, today)
        .await
    {
        // An explicit status corrects the existing record in place
        Ok(Some(existing)) => {
            if let Some(status) = check_in_request.status {
                let update = UpdateAttendanceRequest {
                    status: Some(status),
                    notes: check_in_request.notes,
                    check_out: false,
                };
                return match storage.update_attendance(existing.id, update, now).await {
                    Ok(Some(record)) => Ok(HttpResponse::Ok()
                        .json(ApiResponse::success(record, "Attendance updated"))),
                    Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                        ErrorCode::AttendanceNotFound,
                        "Attendance record disappeared during update",
                    ))),
                    Err(e) => Ok(storage_error_response(&e)),
                };
            }
            return Ok(HttpResponse::Conflict().json(ApiResponse::error(
                ErrorCode::AlreadyCheckedIn,
                existing,
                "Attendance already recorded for this student today",
            )));
        }
        Ok(None) => {}
        Err(e) => return Ok(storage_error_response(&e)),
    }

    // Explicit status wins; otherwise the cutoff decides hadir/terlambat
    let status = check_in_request.status.unwrap_or_else(|| {
        let cutoff = parse_cutoff(&config.attendance.late_after);
        if is_late(local.time(), cutoff) {
            AttendanceStatus::Terlambat
        } else {
            AttendanceStatus::Hadir
        }
    });

    let scanned_by = RequireSession::extract_user(request).map(|u| u.id);

    let record = NewAttendance {
        student_id: student.student.id,
        student_name: student.student.name.clone(),
        student_nis: student.student.nis.clone(),
        student_class: enrollment.class_name.clone(),
        date: today,
        check_in_time: now,
        status,
        scanned_by,
        notes: check_in_request.notes,
    };

    match storage.insert_attendance(record).await {
        Ok(record) => {
            tracing::info!(
                "Check-in recorded for {} ({}): {}",
                record.student_name,
                record.student_nis,
                record.status
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(record, "Check-in recorded")))
        }
        // Unique index race: another scan landed between lookup and insert
        Err(AbsensiError::Conflict(msg)) => Ok(HttpResponse::Conflict()
            .json(ApiResponse::error_empty(ErrorCode::AlreadyCheckedIn, msg))),
        Err(e) => Ok(storage_error_response(&e)),
    }
}
