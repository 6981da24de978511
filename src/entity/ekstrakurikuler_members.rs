//! Activity membership entity.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "ekstrakurikuler_members")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub activity_id: i64,
    pub student_id: i64,
    pub student_name: String,
    pub student_class: String,
    pub joined_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::ekstrakurikuler_activities::Entity",
        from = "Column::ActivityId",
        to = "super::ekstrakurikuler_activities::Column::Id"
    )]
    Activity,
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id"
    )]
    Student,
}

impl Related<super::ekstrakurikuler_activities::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Activity.def()
    }
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_member(self) -> crate::models::ekstrakurikuler::ActivityMember {
        use chrono::{DateTime, Utc};

        crate::models::ekstrakurikuler::ActivityMember {
            id: self.id,
            activity_id: self.activity_id,
            student_id: self.student_id,
            student_name: self.student_name,
            student_class: self.student_class,
            joined_at: DateTime::<Utc>::from_timestamp(self.joined_at, 0).unwrap_or_default(),
        }
    }
}
