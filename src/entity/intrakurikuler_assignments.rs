//! Per-class subject schedule entity.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "intrakurikuler_assignments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub subject_id: i64,
    pub class_name: String,
    pub teacher_id: Option<i64>,
    pub teacher_name: Option<String>,
    pub hari: String,
    pub jam_mulai: String,
    pub jam_selesai: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::intrakurikuler_subjects::Entity",
        from = "Column::SubjectId",
        to = "super::intrakurikuler_subjects::Column::Id"
    )]
    Subject,
}

impl Related<super::intrakurikuler_subjects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subject.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_assignment(self) -> crate::models::intrakurikuler::SubjectAssignment {
        crate::models::intrakurikuler::SubjectAssignment {
            id: self.id,
            subject_id: self.subject_id,
            class_name: self.class_name,
            teacher_id: self.teacher_id,
            teacher_name: self.teacher_name,
            hari: self.hari,
            jam_mulai: self.jam_mulai,
            jam_selesai: self.jam_selesai,
        }
    }
}
