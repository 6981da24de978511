use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateActivityRequest {
    pub kode_ekskul: String,
    pub nama_ekskul: String,
    pub deskripsi: Option<String>,
    pub pembina: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateActivityRequest {
    pub nama_ekskul: Option<String>,
    pub deskripsi: Option<String>,
    pub pembina: Option<String>,
    pub aktif: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddMemberRequest {
    pub student_id: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MemberListParams {
    pub activity_id: Option<i64>,
    pub class: Option<String>,
}
