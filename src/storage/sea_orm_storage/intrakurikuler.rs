use super::SeaOrmStorage;
use crate::entity::intrakurikuler_assignments::{
    ActiveModel as AssignmentActiveModel, Column as AssignmentColumn,
    Entity as IntrakurikulerAssignments,
};
use crate::entity::intrakurikuler_subjects::{
    ActiveModel, Column, Entity as IntrakurikulerSubjects,
};
use crate::errors::{AbsensiError, Result};
use crate::models::intrakurikuler::{
    ClassScheduleEntry, CreateAssignmentRequest, CreateSubjectRequest, Subject,
    UpdateSubjectRequest,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use std::collections::HashMap;

impl SeaOrmStorage {
    pub async fn create_subject_impl(&self, req: CreateSubjectRequest) -> Result<Subject> {
        let existing = IntrakurikulerSubjects::find()
            .filter(Column::KodeMapel.eq(&req.kode_mapel))
            .one(&self.db)
            .await
            .map_err(|e| AbsensiError::database_operation(format!("Subject lookup failed: {e}")))?;
        if existing.is_some() {
            return Err(AbsensiError::conflict(format!(
                "Subject code {} already exists",
                req.kode_mapel
            )));
        }

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            kode_mapel: Set(req.kode_mapel),
            nama_mapel: Set(req.nama_mapel),
            kelompok: Set(req.kelompok),
            deskripsi: Set(req.deskripsi),
            aktif: Set(true),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| AbsensiError::database_operation(format!("Create subject failed: {e}")))?;

        Ok(result.into_subject())
    }

    pub async fn list_subjects_impl(&self) -> Result<Vec<Subject>> {
        let subjects = IntrakurikulerSubjects::find()
            .order_by_asc(Column::KodeMapel)
            .all(&self.db)
            .await
            .map_err(|e| AbsensiError::database_operation(format!("Subject list failed: {e}")))?;

        Ok(subjects.into_iter().map(|m| m.into_subject()).collect())
    }

    pub async fn update_subject_impl(
        &self,
        id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>> {
        let existing = IntrakurikulerSubjects::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AbsensiError::database_operation(format!("Subject lookup failed: {e}")))?;
        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            ..Default::default()
        };

        if let Some(nama_mapel) = update.nama_mapel {
            model.nama_mapel = Set(nama_mapel);
        }
        if let Some(kelompok) = update.kelompok {
            model.kelompok = Set(Some(kelompok));
        }
        if let Some(deskripsi) = update.deskripsi {
            model.deskripsi = Set(Some(deskripsi));
        }
        if let Some(aktif) = update.aktif {
            model.aktif = Set(aktif);
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| AbsensiError::database_operation(format!("Update subject failed: {e}")))?;

        Ok(Some(result.into_subject()))
    }

    /// Cascade drops the schedule assignments with the subject.
    pub async fn delete_subject_impl(&self, id: i64) -> Result<bool> {
        let result = IntrakurikulerSubjects::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| AbsensiError::database_operation(format!("Delete subject failed: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn create_assignment_impl(
        &self,
        req: CreateAssignmentRequest,
    ) -> Result<ClassScheduleEntry> {
        let subject = IntrakurikulerSubjects::find_by_id(req.subject_id)
            .one(&self.db)
            .await
            .map_err(|e| AbsensiError::database_operation(format!("Subject lookup failed: {e}")))?
            .ok_or_else(|| {
                AbsensiError::not_found(format!("Subject {} not found", req.subject_id))
            })?;

        let model = AssignmentActiveModel {
            subject_id: Set(req.subject_id),
            class_name: Set(req.class_name),
            teacher_id: Set(req.teacher_id),
            teacher_name: Set(req.teacher_name),
            hari: Set(req.hari),
            jam_mulai: Set(req.jam_mulai),
            jam_selesai: Set(req.jam_selesai),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            AbsensiError::database_operation(format!("Create assignment failed: {e}"))
        })?;

        Ok(ClassScheduleEntry {
            assignment: result.into_assignment(),
            kode_mapel: subject.kode_mapel,
            nama_mapel: subject.nama_mapel,
        })
    }

    pub async fn list_class_schedule_impl(
        &self,
        class: Option<String>,
    ) -> Result<Vec<ClassScheduleEntry>> {
        let mut select = IntrakurikulerAssignments::find();
        if let Some(ref class) = class {
            select = select.filter(AssignmentColumn::ClassName.eq(class));
        }

        let assignments = select
            .order_by_asc(AssignmentColumn::ClassName)
            .order_by_asc(AssignmentColumn::Hari)
            .all(&self.db)
            .await
            .map_err(|e| AbsensiError::database_operation(format!("Schedule list failed: {e}")))?;

        let subject_ids: Vec<i64> = assignments.iter().map(|a| a.subject_id).collect();
        let subjects: HashMap<i64, (String, String)> = IntrakurikulerSubjects::find()
            .filter(Column::Id.is_in(subject_ids))
            .all(&self.db)
            .await
            .map_err(|e| AbsensiError::database_operation(format!("Subject lookup failed: {e}")))?
            .into_iter()
            .map(|s| (s.id, (s.kode_mapel, s.nama_mapel)))
            .collect();

        let entries = assignments
            .into_iter()
            .map(|a| {
                let (kode_mapel, nama_mapel) = subjects
                    .get(&a.subject_id)
                    .cloned()
                    .unwrap_or_default();
                ClassScheduleEntry {
                    assignment: a.into_assignment(),
                    kode_mapel,
                    nama_mapel,
                }
            })
            .collect();

        Ok(entries)
    }
}
