//! Leave request entity.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "leave_requests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub student_name: String,
    pub student_nis: String,
    pub student_class: String,
    pub leave_type: String,
    pub reason: String,
    pub start_date: Date,
    pub end_date: Date,
    pub status: String,
    pub parent_name: Option<String>,
    pub parent_contact: Option<String>,
    pub submitted_at: i64,
    pub reviewed_by: Option<i64>,
    pub reviewed_at: Option<i64>,
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
    pub fn into_leave_request(self) -> crate::models::leave_requests::LeaveRequest {
        use crate::models::leave_requests::{LeaveRequest, LeaveStatus, LeaveType};
        use chrono::{DateTime, Utc};

        LeaveRequest {
            id: self.id,
            student_id: self.student_id,
            student_name: self.student_name,
            student_nis: self.student_nis,
            student_class: self.student_class,
            leave_type: self
                .leave_type
                .parse::<LeaveType>()
                .unwrap_or(LeaveType::Izin),
            reason: self.reason,
            start_date: self.start_date,
            end_date: self.end_date,
            status: self
                .status
                .parse::<LeaveStatus>()
                .unwrap_or(LeaveStatus::Pending),
            parent_name: self.parent_name,
            parent_contact: self.parent_contact,
            submitted_at: DateTime::<Utc>::from_timestamp(self.submitted_at, 0)
                .unwrap_or_default(),
            reviewed_by: self.reviewed_by,
            reviewed_at: self
                .reviewed_at
                .map(|ts| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()),
        }
    }
}
