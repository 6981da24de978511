use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct PromoteStudentsRequest {
    pub new_academic_year_id: i64,
    /// Exit date stamped on closed memberships. Defaults to today.
    pub promotion_date: Option<chrono::NaiveDate>,
}
