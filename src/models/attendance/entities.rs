use serde::{Deserialize, Serialize};

/// Daily attendance status. Serialized with the Indonesian short forms
/// the rest of the school system already speaks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    Hadir,
    Terlambat,
    Izin,
    Sakit,
    Alpha,
}

impl AttendanceStatus {
    pub const HADIR: &'static str = "hadir";
    pub const TERLAMBAT: &'static str = "terlambat";
    pub const IZIN: &'static str = "izin";
    pub const SAKIT: &'static str = "sakit";
    pub const ALPHA: &'static str = "alpha";

    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Hadir => Self::HADIR,
            AttendanceStatus::Terlambat => Self::TERLAMBAT,
            AttendanceStatus::Izin => Self::IZIN,
            AttendanceStatus::Sakit => Self::SAKIT,
            AttendanceStatus::Alpha => Self::ALPHA,
        }
    }
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AttendanceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::HADIR => Ok(AttendanceStatus::Hadir),
            Self::TERLAMBAT => Ok(AttendanceStatus::Terlambat),
            Self::IZIN => Ok(AttendanceStatus::Izin),
            Self::SAKIT => Ok(AttendanceStatus::Sakit),
            Self::ALPHA => Ok(AttendanceStatus::Alpha),
            _ => Err(format!("Invalid attendance status: {s}")),
        }
    }
}

impl<'de> Deserialize<'de> for AttendanceStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// One student, one date. Student identity fields are denormalized so
// class-scoped recaps never have to join the roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: i64,
    pub student_id: i64,
    pub student_name: String,
    pub student_nis: String,
    pub student_class: String,
    pub date: chrono::NaiveDate,
    pub check_in_time: chrono::DateTime<chrono::Utc>,
    pub check_out_time: Option<chrono::DateTime<chrono::Utc>>,
    pub status: AttendanceStatus,
    pub scanned_by: Option<i64>,
    pub notes: Option<String>,
}

// Per-class or school-wide counts for one date
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttendanceStats {
    pub total_students: i64,
    pub hadir: i64,
    pub terlambat: i64,
    pub izin: i64,
    pub sakit: i64,
    pub alpha: i64,
    pub belum_absen: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn status_round_trips_through_str() {
        for s in ["hadir", "terlambat", "izin", "sakit", "alpha"] {
            let status = AttendanceStatus::from_str(s).unwrap();
            assert_eq!(status.as_str(), s);
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!(AttendanceStatus::from_str("present").is_err());
        assert!(AttendanceStatus::from_str("HADIR").is_err());
    }
}
