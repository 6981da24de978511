//! Extracurricular activity entity.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "ekstrakurikuler_activities")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub kode_ekskul: String,
    pub nama_ekskul: String,
    pub deskripsi: Option<String>,
    pub pembina: Option<String>,
    pub aktif: bool,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::ekstrakurikuler_members::Entity")]
    Members,
}

impl Related<super::ekstrakurikuler_members::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Members.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_activity(self) -> crate::models::ekstrakurikuler::Activity {
        use chrono::{DateTime, Utc};

        crate::models::ekstrakurikuler::Activity {
            id: self.id,
            kode_ekskul: self.kode_ekskul,
            nama_ekskul: self.nama_ekskul,
            deskripsi: self.deskripsi,
            pembina: self.pembina,
            aktif: self.aktif,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
