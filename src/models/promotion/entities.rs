use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromotedStudent {
    pub student_id: i64,
    pub student_name: String,
    pub from_class: String,
    pub to_class: String,
    pub to_grade: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraduatedStudent {
    pub student_id: i64,
    pub student_name: String,
    pub from_class: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRombelInfo {
    pub rombel_id: i64,
    pub name: String,
    pub grade_level: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromotionSummary {
    pub promoted: i64,
    pub graduated: i64,
    pub rombels_created: i64,
}

// Full report of one year-end promotion run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromotionResponse {
    pub academic_year: String,
    pub summary: PromotionSummary,
    pub promoted_students: Vec<PromotedStudent>,
    pub graduated_students: Vec<GraduatedStudent>,
    pub new_rombels: Vec<NewRombelInfo>,
}
