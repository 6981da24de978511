mod common;

use absensi_sekolah::models::attendance::{AttendanceListParams, AttendanceStatus, NewAttendance};
use absensi_sekolah::models::leave_requests::{
    LeaveListParams, LeaveStatus, LeaveType, SubmitLeaveRequest,
};
use absensi_sekolah::storage::Storage;
use common::*;

async fn submit_leave(
    storage: &absensi_sekolah::storage::sea_orm_storage::SeaOrmStorage,
    student_id: i64,
    leave_type: LeaveType,
    start: chrono::NaiveDate,
    end: chrono::NaiveDate,
) -> absensi_sekolah::models::leave_requests::LeaveRequest {
    storage
        .submit_leave_request(SubmitLeaveRequest {
            student_id,
            leave_type,
            reason: "Demam tinggi".to_string(),
            start_date: start,
            end_date: end,
            parent_name: Some("Ibu Sari".to_string()),
            parent_contact: Some("081234567890".to_string()),
        })
        .await
        .expect("leave request should be submitted")
}

#[tokio::test]
async fn approving_three_day_leave_creates_three_attendance_rows() {
    let storage = setup_storage().await;
    let wali = create_teacher(&storage, "wali@sekolah.sch.id", "Bu Rina").await;
    let year = create_year(&storage, "2025/2026", date(2025, 7, 14), date(2026, 6, 19)).await;
    let rombel = create_rombel(&storage, year.id, 2, wali.id).await;
    let student = create_enrolled_student(&storage, "25001", "Andi Saputra", rombel.id).await;

    let submitted = submit_leave(
        &storage,
        student.student.id,
        LeaveType::Sakit,
        date(2025, 9, 1),
        date(2025, 9, 3),
    )
    .await;
    assert_eq!(submitted.status, LeaveStatus::Pending);

    let reviewed = storage
        .review_leave_request(submitted.id, LeaveStatus::Approved, wali.id, chrono::Utc::now())
        .await
        .expect("review should succeed");
    assert_eq!(reviewed.status, LeaveStatus::Approved);
    assert_eq!(reviewed.reviewed_by, Some(wali.id));
    assert!(reviewed.reviewed_at.is_some());

    let records = storage
        .list_attendance(AttendanceListParams {
            student_id: Some(student.student.id),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(records.len(), 3);
    assert!(records.iter().all(|r| r.status == AttendanceStatus::Sakit));
    assert!(records.iter().all(|r| r.notes.as_deref() == Some("Demam tinggi")));
}

#[tokio::test]
async fn approval_skips_days_already_covered() {
    let storage = setup_storage().await;
    let wali = create_teacher(&storage, "wali@sekolah.sch.id", "Bu Rina").await;
    let year = create_year(&storage, "2025/2026", date(2025, 7, 14), date(2026, 6, 19)).await;
    let rombel = create_rombel(&storage, year.id, 4, wali.id).await;
    let student = create_enrolled_student(&storage, "25002", "Budi Hartono", rombel.id).await;

    // Day two already has a check-in
    storage
        .insert_attendance(NewAttendance {
            student_id: student.student.id,
            student_name: student.student.name.clone(),
            student_nis: student.student.nis.clone(),
            student_class: "Kelas 4".to_string(),
            date: date(2025, 9, 2),
            check_in_time: chrono::Utc::now(),
            status: AttendanceStatus::Hadir,
            scanned_by: Some(wali.id),
            notes: None,
        })
        .await
        .unwrap();

    let submitted = submit_leave(
        &storage,
        student.student.id,
        LeaveType::Izin,
        date(2025, 9, 1),
        date(2025, 9, 3),
    )
    .await;

    storage
        .review_leave_request(submitted.id, LeaveStatus::Approved, wali.id, chrono::Utc::now())
        .await
        .unwrap();

    let records = storage
        .list_attendance(AttendanceListParams {
            student_id: Some(student.student.id),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(records.len(), 3);

    let izin_days: Vec<_> = records
        .iter()
        .filter(|r| r.status == AttendanceStatus::Izin)
        .map(|r| r.date)
        .collect();
    assert_eq!(izin_days.len(), 2);
    assert!(!izin_days.contains(&date(2025, 9, 2)));

    // The pre-existing record is untouched
    let day_two = records.iter().find(|r| r.date == date(2025, 9, 2)).unwrap();
    assert_eq!(day_two.status, AttendanceStatus::Hadir);
}

#[tokio::test]
async fn rejection_creates_no_attendance_and_pending_counts_track_review() {
    let storage = setup_storage().await;
    let wali = create_teacher(&storage, "wali@sekolah.sch.id", "Bu Rina").await;
    let year = create_year(&storage, "2025/2026", date(2025, 7, 14), date(2026, 6, 19)).await;
    let rombel = create_rombel(&storage, year.id, 5, wali.id).await;
    let student = create_enrolled_student(&storage, "25003", "Citra Lestari", rombel.id).await;

    let submitted = submit_leave(
        &storage,
        student.student.id,
        LeaveType::Izin,
        date(2025, 10, 6),
        date(2025, 10, 7),
    )
    .await;
    assert_eq!(storage.count_pending_leave_requests(None).await.unwrap(), 1);

    storage
        .review_leave_request(submitted.id, LeaveStatus::Rejected, wali.id, chrono::Utc::now())
        .await
        .unwrap();
    assert_eq!(storage.count_pending_leave_requests(None).await.unwrap(), 0);

    let records = storage
        .list_attendance(AttendanceListParams {
            student_id: Some(student.student.id),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(records.is_empty());

    let rejected = storage
        .list_leave_requests(LeaveListParams {
            status: Some(LeaveStatus::Rejected),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(rejected.len(), 1);
    assert_eq!(rejected[0].id, submitted.id);
}
