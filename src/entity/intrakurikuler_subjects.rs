//! Curricular subject entity.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "intrakurikuler_subjects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub kode_mapel: String,
    pub nama_mapel: String,
    pub kelompok: Option<String>,
    pub deskripsi: Option<String>,
    pub aktif: bool,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::intrakurikuler_assignments::Entity")]
    Assignments,
}

impl Related<super::intrakurikuler_assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_subject(self) -> crate::models::intrakurikuler::Subject {
        use chrono::{DateTime, Utc};

        crate::models::intrakurikuler::Subject {
            id: self.id,
            kode_mapel: self.kode_mapel,
            nama_mapel: self.nama_mapel,
            kelompok: self.kelompok,
            deskripsi: self.deskripsi,
            aktif: self.aktif,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
