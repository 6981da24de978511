//! Daily attendance entity.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "attendance")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub student_name: String,
    pub student_nis: String,
    pub student_class: String,
    pub date: Date,
    pub check_in_time: i64,
    pub check_out_time: Option<i64>,
    pub status: String,
    pub scanned_by: Option<i64>,
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id"
    )]
    Student,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// Database model to business model
impl Model {
    pub fn into_record(self) -> crate::models::attendance::AttendanceRecord {
        use crate::models::attendance::{AttendanceRecord, AttendanceStatus};
        use chrono::{DateTime, Utc};

        AttendanceRecord {
            id: self.id,
            student_id: self.student_id,
            student_name: self.student_name,
            student_nis: self.student_nis,
            student_class: self.student_class,
            date: self.date,
            check_in_time: DateTime::<Utc>::from_timestamp(self.check_in_time, 0)
                .unwrap_or_default(),
            check_out_time: self
                .check_out_time
                .map(|ts| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()),
            status: self
                .status
                .parse::<AttendanceStatus>()
                .unwrap_or(AttendanceStatus::Alpha),
            scanned_by: self.scanned_by,
            notes: self.notes,
        }
    }
}
