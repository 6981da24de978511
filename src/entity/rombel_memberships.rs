//! Enrollment period entity.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "rombel_memberships")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub rombel_id: i64,
    pub status: String,
    pub entry_date: Date,
    pub exit_date: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::rombels::Entity",
        from = "Column::RombelId",
        to = "super::rombels::Column::Id"
    )]
    Rombel,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::rombels::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rombel.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_membership(self) -> crate::models::academics::RombelMembership {
        use crate::models::academics::{MembershipStatus, RombelMembership};

        RombelMembership {
            id: self.id,
            student_id: self.student_id,
            rombel_id: self.rombel_id,
            status: self
                .status
                .parse::<MembershipStatus>()
                .unwrap_or(MembershipStatus::Completed),
            entry_date: self.entry_date,
            exit_date: self.exit_date,
        }
    }
}
