use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateSubjectRequest {
    pub kode_mapel: String,
    pub nama_mapel: String,
    pub kelompok: Option<String>,
    pub deskripsi: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSubjectRequest {
    pub nama_mapel: Option<String>,
    pub kelompok: Option<String>,
    pub deskripsi: Option<String>,
    pub aktif: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateAssignmentRequest {
    pub subject_id: i64,
    pub class_name: String,
    pub teacher_id: Option<i64>,
    pub teacher_name: Option<String>,
    pub hari: String,
    pub jam_mulai: String,
    pub jam_selesai: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IntrakurikulerListParams {
    pub action: Option<String>,
    pub class: Option<String>,
}
