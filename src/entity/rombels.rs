//! Class group (rombongan belajar) entity.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "rombels")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub academic_year_id: i64,
    pub grade_level: i32,
    pub class_name: String,
    pub wali_teacher_id: i64,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::academic_years::Entity",
        from = "Column::AcademicYearId",
        to = "super::academic_years::Column::Id"
    )]
    AcademicYear,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::WaliTeacherId",
        to = "super::users::Column::Id"
    )]
    WaliTeacher,
    #[sea_orm(has_many = "super::rombel_memberships::Entity")]
    RombelMemberships,
}

impl Related<super::academic_years::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AcademicYear.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WaliTeacher.def()
    }
}

impl Related<super::rombel_memberships::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RombelMemberships.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_rombel(self) -> crate::models::academics::Rombel {
        use chrono::{DateTime, Utc};

        crate::models::academics::Rombel {
            id: self.id,
            academic_year_id: self.academic_year_id,
            grade_level: self.grade_level,
            class_name: self.class_name,
            wali_teacher_id: self.wali_teacher_id,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
