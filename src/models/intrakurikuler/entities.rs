use serde::{Deserialize, Serialize};

// Mata pelajaran (curricular subject)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    pub id: i64,
    pub kode_mapel: String,
    pub nama_mapel: String,
    pub kelompok: Option<String>,
    pub deskripsi: Option<String>,
    pub aktif: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// One subject taught in one class, with its weekly slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectAssignment {
    pub id: i64,
    pub subject_id: i64,
    pub class_name: String,
    pub teacher_id: Option<i64>,
    pub teacher_name: Option<String>,
    pub hari: String,
    pub jam_mulai: String,
    pub jam_selesai: String,
}

// Class schedule: assignments joined with subject names
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassScheduleEntry {
    #[serde(flatten)]
    pub assignment: SubjectAssignment,
    pub kode_mapel: String,
    pub nama_mapel: String,
}
