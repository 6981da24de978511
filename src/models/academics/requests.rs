use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateAcademicYearRequest {
    pub name: String,
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
    #[serde(default)]
    pub is_active: bool,
}

// Body for the idempotent first-install seed.
#[derive(Debug, Clone, Deserialize)]
pub struct InitSchoolYearRequest {
    pub name: String,
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
    /// Homeroom teacher for the seeded rombels; defaults to the caller.
    pub wali_teacher_id: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateRombelRequest {
    pub academic_year_id: i64,
    pub grade_level: i32,
    pub class_name: String,
    pub wali_teacher_id: i64,
}
