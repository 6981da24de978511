mod common;

use absensi_sekolah::errors::AbsensiError;
use absensi_sekolah::models::common::PaginatedResponse;
use absensi_sekolah::models::students::{
    CreateStudentRequest, StudentDetail, StudentListQuery, UpdateStudentRequest,
};
use absensi_sekolah::storage::Storage;
use common::*;

#[tokio::test]
async fn nis_is_unique_and_delete_is_soft() {
    let storage = setup_storage().await;
    let wali = create_teacher(&storage, "wali@sekolah.sch.id", "Bu Rina").await;
    let year = create_year(&storage, "2025/2026", date(2025, 7, 14), date(2026, 6, 19)).await;
    let rombel = create_rombel(&storage, year.id, 1, wali.id).await;

    let student = create_enrolled_student(&storage, "25200", "Andi Saputra", rombel.id).await;

    let duplicate = storage
        .create_student(
            CreateStudentRequest {
                nis: "25200".to_string(),
                name: "Orang Lain".to_string(),
                nisn: None,
                gender: None,
                birth_date: None,
                religion: None,
                photo_url: None,
                rombel_id: None,
            },
            "SISWA-25200-other".to_string(),
        )
        .await;
    assert!(matches!(duplicate, Err(AbsensiError::Conflict(_))));

    assert!(storage.deactivate_student(student.student.id).await.unwrap());
    let after = storage
        .get_student_by_id(student.student.id)
        .await
        .unwrap()
        .expect("soft delete keeps the row");
    assert!(!after.student.active);

    // Active-only listing no longer shows the student
    let page = storage
        .list_students(StudentListQuery {
            page: 1,
            size: 10,
            class: None,
            active: Some(true),
            search: None,
        })
        .await
        .unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.pagination.total, 0);
}

#[tokio::test]
async fn a_student_holds_at_most_one_active_membership() {
    let storage = setup_storage().await;
    let wali = create_teacher(&storage, "wali@sekolah.sch.id", "Bu Rina").await;
    let year = create_year(&storage, "2025/2026", date(2025, 7, 14), date(2026, 6, 19)).await;
    let rombel1 = create_rombel(&storage, year.id, 1, wali.id).await;
    let rombel2 = create_rombel(&storage, year.id, 2, wali.id).await;

    let student = create_enrolled_student(&storage, "25201", "Budi Hartono", rombel1.id).await;

    let second = storage
        .enroll_student(student.student.id, rombel2.id, date(2025, 7, 14))
        .await;
    assert!(
        matches!(second, Err(AbsensiError::Conflict(_))),
        "second active enrollment must be rejected, got {second:?}"
    );
}

#[tokio::test]
async fn search_and_update_work_on_the_roster() {
    let storage = setup_storage().await;
    let wali = create_teacher(&storage, "wali@sekolah.sch.id", "Bu Rina").await;
    let year = create_year(&storage, "2025/2026", date(2025, 7, 14), date(2026, 6, 19)).await;
    let rombel = create_rombel(&storage, year.id, 4, wali.id).await;

    create_enrolled_student(&storage, "25202", "Citra Lestari", rombel.id).await;
    create_enrolled_student(&storage, "25203", "Dewi Anggraini", rombel.id).await;

    let page = storage
        .list_students(StudentListQuery {
            page: 1,
            size: 10,
            class: None,
            active: None,
            search: Some("Citra".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].student.nis, "25202");

    let updated = storage
        .update_student(
            page.items[0].student.id,
            UpdateStudentRequest {
                religion: Some("Islam".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .expect("student exists");
    assert_eq!(updated.student.religion.as_deref(), Some("Islam"));
    // Enrollment untouched by a profile update
    assert_eq!(
        updated.enrollment.as_ref().map(|e| e.class_name.as_str()),
        Some("Kelas 4")
    );
}

#[tokio::test]
async fn roster_pages_carry_totals() {
    let storage = setup_storage().await;
    let wali = create_teacher(&storage, "wali@sekolah.sch.id", "Bu Rina").await;
    let year = create_year(&storage, "2025/2026", date(2025, 7, 14), date(2026, 6, 19)).await;
    let rombel = create_rombel(&storage, year.id, 2, wali.id).await;

    create_enrolled_student(&storage, "25210", "Citra Lestari", rombel.id).await;
    create_enrolled_student(&storage, "25211", "Dewi Anggraini", rombel.id).await;
    create_enrolled_student(&storage, "25212", "Eko Prasetyo", rombel.id).await;

    let page: PaginatedResponse<StudentDetail> = storage
        .list_students(StudentListQuery {
            page: 2,
            size: 2,
            class: None,
            active: None,
            search: None,
        })
        .await
        .unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.pagination.page, 2);
    assert_eq!(page.pagination.page_size, 2);
    assert_eq!(page.pagination.total, 3);
    assert_eq!(page.pagination.total_pages, 2);
}

#[tokio::test]
async fn sessions_resolve_and_expire() {
    let storage = setup_storage().await;
    let teacher = create_teacher(&storage, "guru@sekolah.sch.id", "Pak Joko").await;

    let now = chrono::Utc::now().timestamp();
    storage
        .create_session(teacher.id, "token-valid", now + 3600)
        .await
        .unwrap();
    storage
        .create_session(teacher.id, "token-stale", now - 10)
        .await
        .unwrap();

    let resolved = storage
        .get_user_by_session_token("token-valid", now)
        .await
        .unwrap()
        .expect("valid token resolves");
    assert_eq!(resolved.id, teacher.id);

    assert!(
        storage
            .get_user_by_session_token("token-stale", now)
            .await
            .unwrap()
            .is_none()
    );

    assert_eq!(storage.delete_expired_sessions(now).await.unwrap(), 1);
    assert!(storage.delete_session("token-valid").await.unwrap());
}
