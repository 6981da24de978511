mod common;

use absensi_sekolah::errors::AbsensiError;
use absensi_sekolah::models::attendance::{AttendanceListParams, AttendanceStatus, NewAttendance};
use absensi_sekolah::models::attendance::UpdateAttendanceRequest;
use absensi_sekolah::storage::Storage;
use common::*;

fn new_record(
    student: &absensi_sekolah::models::students::StudentDetail,
    day: chrono::NaiveDate,
    status: AttendanceStatus,
) -> NewAttendance {
    NewAttendance {
        student_id: student.student.id,
        student_name: student.student.name.clone(),
        student_nis: student.student.nis.clone(),
        student_class: student
            .enrollment
            .as_ref()
            .map(|e| e.class_name.clone())
            .unwrap_or_default(),
        date: day,
        check_in_time: chrono::Utc::now(),
        status,
        scanned_by: None,
        notes: None,
    }
}

#[tokio::test]
async fn one_attendance_row_per_student_per_day() {
    let storage = setup_storage().await;
    let wali = create_teacher(&storage, "wali@sekolah.sch.id", "Bu Rina").await;
    let year = create_year(&storage, "2025/2026", date(2025, 7, 14), date(2026, 6, 19)).await;
    let rombel = create_rombel(&storage, year.id, 1, wali.id).await;
    let student = create_enrolled_student(&storage, "25100", "Andi Saputra", rombel.id).await;

    let day = date(2025, 9, 1);
    storage
        .insert_attendance(new_record(&student, day, AttendanceStatus::Hadir))
        .await
        .expect("first check-in should land");

    let duplicate = storage
        .insert_attendance(new_record(&student, day, AttendanceStatus::Terlambat))
        .await;
    assert!(
        matches!(duplicate, Err(AbsensiError::Conflict(_))),
        "duplicate same-day check-in must be rejected, got {duplicate:?}"
    );

    // A different day is fine
    storage
        .insert_attendance(new_record(&student, date(2025, 9, 2), AttendanceStatus::Hadir))
        .await
        .expect("next-day check-in should land");
}

#[tokio::test]
async fn update_sets_status_notes_and_check_out() {
    let storage = setup_storage().await;
    let wali = create_teacher(&storage, "wali@sekolah.sch.id", "Bu Rina").await;
    let year = create_year(&storage, "2025/2026", date(2025, 7, 14), date(2026, 6, 19)).await;
    let rombel = create_rombel(&storage, year.id, 2, wali.id).await;
    let student = create_enrolled_student(&storage, "25101", "Budi Hartono", rombel.id).await;

    let record = storage
        .insert_attendance(new_record(&student, date(2025, 9, 1), AttendanceStatus::Hadir))
        .await
        .unwrap();
    assert!(record.check_out_time.is_none());

    let updated = storage
        .update_attendance(
            record.id,
            UpdateAttendanceRequest {
                status: Some(AttendanceStatus::Terlambat),
                notes: Some("Datang setelah upacara".to_string()),
                check_out: true,
            },
            chrono::Utc::now(),
        )
        .await
        .unwrap()
        .expect("record exists");

    assert_eq!(updated.status, AttendanceStatus::Terlambat);
    assert_eq!(updated.notes.as_deref(), Some("Datang setelah upacara"));
    assert!(updated.check_out_time.is_some());

    let missing = storage
        .update_attendance(9999, UpdateAttendanceRequest::default(), chrono::Utc::now())
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn stats_count_per_status_and_track_missing_students() {
    let storage = setup_storage().await;
    let wali = create_teacher(&storage, "wali@sekolah.sch.id", "Bu Rina").await;
    let year = create_year(&storage, "2025/2026", date(2025, 7, 14), date(2026, 6, 19)).await;
    let rombel = create_rombel(&storage, year.id, 3, wali.id).await;

    let a = create_enrolled_student(&storage, "25102", "Citra Lestari", rombel.id).await;
    let b = create_enrolled_student(&storage, "25103", "Dewi Anggraini", rombel.id).await;
    create_enrolled_student(&storage, "25104", "Eko Prasetyo", rombel.id).await;

    let day = date(2025, 9, 1);
    storage
        .insert_attendance(new_record(&a, day, AttendanceStatus::Hadir))
        .await
        .unwrap();
    storage
        .insert_attendance(new_record(&b, day, AttendanceStatus::Terlambat))
        .await
        .unwrap();

    let stats = storage
        .attendance_stats(day, Some("Kelas 3".to_string()))
        .await
        .unwrap();
    assert_eq!(stats.total_students, 3);
    assert_eq!(stats.hadir, 1);
    assert_eq!(stats.terlambat, 1);
    assert_eq!(stats.alpha, 0);
    assert_eq!(stats.belum_absen, 1);

    // Listing by class only returns that class on that date
    let records = storage
        .list_attendance(AttendanceListParams {
            date: Some(day),
            class: Some("Kelas 3".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(records.len(), 2);
}
