#![allow(dead_code)]

use absensi_sekolah::models::academics::{
    AcademicYear, CreateAcademicYearRequest, CreateRombelRequest, Rombel,
};
use absensi_sekolah::models::students::{CreateStudentRequest, StudentDetail};
use absensi_sekolah::models::users::entities::{User, UserRole};
use absensi_sekolah::models::users::requests::CreateUserRequest;
use absensi_sekolah::storage::Storage;
use absensi_sekolah::storage::sea_orm_storage::SeaOrmStorage;
use chrono::NaiveDate;

// Single connection so every query sees the same in-memory database
pub async fn setup_storage() -> SeaOrmStorage {
    SeaOrmStorage::new_with_options(":memory:", 1, 5)
        .await
        .expect("in-memory storage should initialize")
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub async fn create_teacher(storage: &SeaOrmStorage, email: &str, name: &str) -> User {
    storage
        .create_user(
            CreateUserRequest {
                email: email.to_string(),
                password: "rahasia-guru".to_string(),
                name: name.to_string(),
                role: UserRole::Teacher,
                is_wali_kelas: false,
                assigned_class: None,
            },
            "$argon2id$test-hash".to_string(),
        )
        .await
        .expect("teacher should be created")
}

pub async fn create_year(
    storage: &SeaOrmStorage,
    name: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> AcademicYear {
    storage
        .create_academic_year(CreateAcademicYearRequest {
            name: name.to_string(),
            start_date: start,
            end_date: end,
            is_active: true,
        })
        .await
        .expect("academic year should be created")
}

pub async fn create_rombel(
    storage: &SeaOrmStorage,
    year_id: i64,
    grade: i32,
    wali_teacher_id: i64,
) -> Rombel {
    storage
        .create_rombel(CreateRombelRequest {
            academic_year_id: year_id,
            grade_level: grade,
            class_name: format!("Kelas {grade}"),
            wali_teacher_id,
        })
        .await
        .expect("rombel should be created")
}

pub async fn create_enrolled_student(
    storage: &SeaOrmStorage,
    nis: &str,
    name: &str,
    rombel_id: i64,
) -> StudentDetail {
    storage
        .create_student(
            CreateStudentRequest {
                nis: nis.to_string(),
                name: name.to_string(),
                nisn: None,
                gender: None,
                birth_date: None,
                religion: None,
                photo_url: None,
                rombel_id: Some(rombel_id),
            },
            format!("SISWA-{nis}-test"),
        )
        .await
        .expect("student should be created")
}
