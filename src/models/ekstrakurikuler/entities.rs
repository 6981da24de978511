use serde::{Deserialize, Serialize};

// Ekstrakurikuler activity (pramuka, futsal, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub id: i64,
    pub kode_ekskul: String,
    pub nama_ekskul: String,
    pub deskripsi: Option<String>,
    pub pembina: Option<String>,
    pub aktif: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityMember {
    pub id: i64,
    pub activity_id: i64,
    pub student_id: i64,
    pub student_name: String,
    pub student_class: String,
    pub joined_at: chrono::DateTime<chrono::Utc>,
}
