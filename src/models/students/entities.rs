use serde::{Deserialize, Serialize};

// Student roster entry. Class placement is not stored here; it lives in
// rombel memberships and is resolved per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub nis: String,
    pub nisn: Option<String>,
    pub name: String,
    pub gender: Option<String>,
    pub birth_date: Option<chrono::NaiveDate>,
    pub religion: Option<String>,
    pub photo_url: Option<String>,
    pub qr_code: String,
    pub active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Current enrollment of a student, from the single active membership.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollmentInfo {
    pub rombel_id: i64,
    pub class_name: String,
    pub grade_level: i32,
    pub academic_year: String,
}

// Roster entry plus resolved placement, the shape list and detail
// endpoints return.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentDetail {
    #[serde(flatten)]
    pub student: Student,
    pub enrollment: Option<EnrollmentInfo>,
}
