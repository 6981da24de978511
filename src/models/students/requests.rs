use serde::Deserialize;

use crate::models::common::PaginationQuery;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateStudentRequest {
    pub nis: String,
    pub name: String,
    pub nisn: Option<String>,
    pub gender: Option<String>,
    pub birth_date: Option<chrono::NaiveDate>,
    pub religion: Option<String>,
    pub photo_url: Option<String>,
    /// Enroll into this rombel right away when present.
    pub rombel_id: Option<i64>,
}

// All fields optional; only present fields are written.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateStudentRequest {
    pub nis: Option<String>,
    pub nisn: Option<String>,
    pub name: Option<String>,
    pub gender: Option<String>,
    pub birth_date: Option<chrono::NaiveDate>,
    pub religion: Option<String>,
    pub photo_url: Option<String>,
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StudentListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub nis: Option<String>,
    pub qr_code: Option<String>,
    pub class: Option<String>,
    pub active: Option<bool>,
    pub search: Option<String>,
}

// Normalized filter passed down to storage.
#[derive(Debug, Clone, Default)]
pub struct StudentListQuery {
    pub page: i64,
    pub size: i64,
    pub class: Option<String>,
    pub active: Option<bool>,
    pub search: Option<String>,
}

impl From<&StudentListParams> for StudentListQuery {
    fn from(params: &StudentListParams) -> Self {
        Self {
            page: params.pagination.page.max(1),
            size: params.pagination.size.clamp(1, 100),
            class: params.class.clone(),
            active: params.active,
            search: params.search.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_query_clamps_page_and_size() {
        let params = StudentListParams {
            pagination: PaginationQuery { page: 0, size: 500 },
            nis: None,
            qr_code: None,
            class: None,
            active: None,
            search: None,
        };
        let query = StudentListQuery::from(&params);
        assert_eq!(query.page, 1);
        assert_eq!(query.size, 100);
    }
}
