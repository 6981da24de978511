//! Student roster entity.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub nis: String,
    pub nisn: Option<String>,
    pub full_name: String,
    pub gender: Option<String>,
    pub birth_date: Option<Date>,
    pub religion: Option<String>,
    pub photo_url: Option<String>,
    #[sea_orm(unique)]
    pub qr_code: String,
    pub active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::rombel_memberships::Entity")]
    RombelMemberships,
    #[sea_orm(has_many = "super::attendance::Entity")]
    Attendance,
    #[sea_orm(has_many = "super::leave_requests::Entity")]
    LeaveRequests,
    #[sea_orm(has_many = "super::ekstrakurikuler_members::Entity")]
    EkstrakurikulerMembers,
}

impl Related<super::rombel_memberships::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RombelMemberships.def()
    }
}

impl Related<super::attendance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attendance.def()
    }
}

impl Related<super::leave_requests::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LeaveRequests.def()
    }
}

impl Related<super::ekstrakurikuler_members::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EkstrakurikulerMembers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// Database model to business model
impl Model {
    pub fn into_student(self) -> crate::models::students::entities::Student {
        use crate::models::students::entities::Student;
        use chrono::{DateTime, Utc};

        Student {
            id: self.id,
            nis: self.nis,
            nisn: self.nisn,
            name: self.full_name,
            gender: self.gender,
            birth_date: self.birth_date,
            religion: self.religion,
            photo_url: self.photo_url,
            qr_code: self.qr_code,
            active: self.active,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
