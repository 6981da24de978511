use serde::{Deserialize, Serialize};

// Academic year, e.g. name "2026/2027"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcademicYear {
    pub id: i64,
    pub name: String,
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
    pub is_active: bool,
}

// Rombongan belajar: one class group per grade per academic year
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rombel {
    pub id: i64,
    pub academic_year_id: i64,
    pub grade_level: i32,
    pub class_name: String,
    pub wali_teacher_id: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MembershipStatus {
    Active,
    Completed,
}

impl MembershipStatus {
    pub const ACTIVE: &'static str = "active";
    pub const COMPLETED: &'static str = "completed";

    pub fn as_str(&self) -> &'static str {
        match self {
            MembershipStatus::Active => Self::ACTIVE,
            MembershipStatus::Completed => Self::COMPLETED,
        }
    }
}

impl std::str::FromStr for MembershipStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::ACTIVE => Ok(MembershipStatus::Active),
            Self::COMPLETED => Ok(MembershipStatus::Completed),
            _ => Err(format!("Invalid membership status: {s}")),
        }
    }
}

impl<'de> Deserialize<'de> for MembershipStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// Links a student to a rombel for one academic year. At most one
// active row per student.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RombelMembership {
    pub id: i64,
    pub student_id: i64,
    pub rombel_id: i64,
    pub status: MembershipStatus,
    pub entry_date: chrono::NaiveDate,
    pub exit_date: Option<chrono::NaiveDate>,
}
