mod common;

use absensi_sekolah::errors::AbsensiError;
use absensi_sekolah::storage::Storage;
use common::*;

#[tokio::test]
async fn promotion_moves_cohorts_and_graduates_grade_six() {
    let storage = setup_storage().await;

    let wali = create_teacher(&storage, "wali5@sekolah.sch.id", "Bu Rina").await;
    let old_year = create_year(&storage, "2024/2025", date(2024, 7, 15), date(2025, 6, 20)).await;
    let rombel5 = create_rombel(&storage, old_year.id, 5, wali.id).await;
    let rombel6 = create_rombel(&storage, old_year.id, 6, wali.id).await;

    create_enrolled_student(&storage, "24001", "Andi Saputra", rombel5.id).await;
    create_enrolled_student(&storage, "24002", "Budi Hartono", rombel5.id).await;
    let grad = create_enrolled_student(&storage, "24003", "Citra Lestari", rombel6.id).await;

    let new_year = create_year(&storage, "2025/2026", date(2025, 7, 14), date(2026, 6, 19)).await;

    let result = storage
        .promote_students(new_year.id, date(2025, 6, 20))
        .await
        .expect("promotion should succeed");

    assert_eq!(result.summary.promoted, 2);
    assert_eq!(result.summary.graduated, 1);
    assert_eq!(result.graduated_students.len(), 1);
    assert_eq!(result.graduated_students[0].student_id, grad.student.id);

    // Promoted students now hold an active membership in the new year
    let andi = storage
        .get_student_by_nis("24001")
        .await
        .unwrap()
        .expect("student still on the roster");
    let enrollment = andi.enrollment.expect("promoted student is enrolled");
    assert_eq!(enrollment.grade_level, 6);
    assert_eq!(enrollment.class_name, "Kelas 6");
    assert_eq!(enrollment.academic_year, "2025/2026");

    // The graduate holds no active membership anymore
    let citra = storage
        .get_student_by_id(grad.student.id)
        .await
        .unwrap()
        .unwrap();
    assert!(citra.enrollment.is_none());

    // A grade-1 rombel is always ensured for the incoming cohort
    let new_rombels = storage.list_rombels(Some(new_year.id)).await.unwrap();
    assert!(new_rombels.iter().any(|r| r.grade_level == 1));
    assert!(new_rombels.iter().any(|r| r.grade_level == 6));
}

#[tokio::test]
async fn promotion_runs_only_once_per_target_year() {
    let storage = setup_storage().await;

    let wali = create_teacher(&storage, "wali3@sekolah.sch.id", "Pak Joko").await;
    let old_year = create_year(&storage, "2024/2025", date(2024, 7, 15), date(2025, 6, 20)).await;
    let rombel3 = create_rombel(&storage, old_year.id, 3, wali.id).await;
    create_enrolled_student(&storage, "24010", "Dewi Anggraini", rombel3.id).await;

    let new_year = create_year(&storage, "2025/2026", date(2025, 7, 14), date(2026, 6, 19)).await;

    storage
        .promote_students(new_year.id, date(2025, 6, 20))
        .await
        .expect("first run should succeed");

    let second = storage.promote_students(new_year.id, date(2025, 6, 21)).await;
    assert!(
        matches!(second, Err(AbsensiError::Conflict(_))),
        "second run must be rejected, got {second:?}"
    );
}

#[tokio::test]
async fn promotion_rejects_missing_year_and_empty_school() {
    let storage = setup_storage().await;
    create_teacher(&storage, "guru@sekolah.sch.id", "Pak Guru").await;

    let missing = storage.promote_students(9999, date(2025, 6, 20)).await;
    assert!(matches!(missing, Err(AbsensiError::NotFound(_))));

    // Year exists but nobody is enrolled anywhere
    let year = create_year(&storage, "2025/2026", date(2025, 7, 14), date(2026, 6, 19)).await;
    let empty = storage.promote_students(year.id, date(2025, 6, 20)).await;
    assert!(matches!(empty, Err(AbsensiError::Validation(_))));
}
