use super::SeaOrmStorage;
use crate::entity::attendance::{ActiveModel, Column, Entity as Attendance};
use crate::entity::prelude::Students;
use crate::entity::students::Column as StudentColumn;
use crate::errors::{AbsensiError, Result};
use crate::models::attendance::{
    AttendanceListParams, AttendanceRecord, AttendanceStats, AttendanceStatus, NewAttendance,
    UpdateAttendanceRequest,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    pub async fn get_attendance_by_student_and_date_impl(
        &self,
        student_id: i64,
        date: chrono::NaiveDate,
    ) -> Result<Option<AttendanceRecord>> {
        let result = Attendance::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::Date.eq(date))
            .one(&self.db)
            .await
            .map_err(|e| {
                AbsensiError::database_operation(format!("Attendance lookup failed: {e}"))
            })?;

        Ok(result.map(|m| m.into_record()))
    }

    /// Insert one row. The unique (student, date) index backs the
    /// application-level duplicate check.
    pub async fn insert_attendance_impl(&self, record: NewAttendance) -> Result<AttendanceRecord> {
        let model = ActiveModel {
            student_id: Set(record.student_id),
            student_name: Set(record.student_name),
            student_nis: Set(record.student_nis),
            student_class: Set(record.student_class),
            date: Set(record.date),
            check_in_time: Set(record.check_in_time.timestamp()),
            check_out_time: Set(None),
            status: Set(record.status.as_str().to_string()),
            scanned_by: Set(record.scanned_by),
            notes: Set(record.notes),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            let msg = e.to_string();
            if msg.contains("UNIQUE") || msg.contains("unique") || msg.contains("Duplicate") {
                AbsensiError::conflict("Attendance already recorded for this student today")
            } else {
                AbsensiError::database_operation(format!("Insert attendance failed: {e}"))
            }
        })?;

        Ok(result.into_record())
    }

    pub async fn update_attendance_impl(
        &self,
        id: i64,
        update: UpdateAttendanceRequest,
        now: chrono::DateTime<chrono::Utc>,
    ) -> Result<Option<AttendanceRecord>> {
        let existing = Attendance::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| {
                AbsensiError::database_operation(format!("Attendance lookup failed: {e}"))
            })?;
        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            ..Default::default()
        };

        if let Some(status) = update.status {
            model.status = Set(status.as_str().to_string());
        }
        if let Some(notes) = update.notes {
            model.notes = Set(Some(notes));
        }
        if update.check_out {
            model.check_out_time = Set(Some(now.timestamp()));
        }

        let result = model.update(&self.db).await.map_err(|e| {
            AbsensiError::database_operation(format!("Update attendance failed: {e}"))
        })?;

        Ok(Some(result.into_record()))
    }

    pub async fn list_attendance_impl(
        &self,
        params: AttendanceListParams,
    ) -> Result<Vec<AttendanceRecord>> {
        let mut select = Attendance::find();

        if let Some(date) = params.date {
            select = select.filter(Column::Date.eq(date));
        }
        if let Some(ref class) = params.class {
            select = select.filter(Column::StudentClass.eq(class));
        }
        if let Some(student_id) = params.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        let records = select
            .order_by_desc(Column::Date)
            .order_by_asc(Column::StudentName)
            .all(&self.db)
            .await
            .map_err(|e| {
                AbsensiError::database_operation(format!("Attendance list failed: {e}"))
            })?;

        Ok(records.into_iter().map(|m| m.into_record()).collect())
    }

    /// Per-status counts for one date. `belum_absen` is the number of
    /// active students without any record that day.
    pub async fn attendance_stats_impl(
        &self,
        date: chrono::NaiveDate,
        class: Option<String>,
    ) -> Result<AttendanceStats> {
        let total_students = match class {
            Some(ref class) => self.student_ids_in_class(class).await?.len() as i64,
            None => Students::find()
                .filter(StudentColumn::Active.eq(true))
                .count(&self.db)
                .await
                .map_err(|e| {
                    AbsensiError::database_operation(format!("Student count failed: {e}"))
                })? as i64,
        };

        let mut select = Attendance::find().filter(Column::Date.eq(date));
        if let Some(ref class) = class {
            select = select.filter(Column::StudentClass.eq(class));
        }

        let records = select.all(&self.db).await.map_err(|e| {
            AbsensiError::database_operation(format!("Attendance stats failed: {e}"))
        })?;

        let mut stats = AttendanceStats {
            total_students,
            ..Default::default()
        };
        for record in &records {
            match record.status.parse::<AttendanceStatus>() {
                Ok(AttendanceStatus::Hadir) => stats.hadir += 1,
                Ok(AttendanceStatus::Terlambat) => stats.terlambat += 1,
                Ok(AttendanceStatus::Izin) => stats.izin += 1,
                Ok(AttendanceStatus::Sakit) => stats.sakit += 1,
                Ok(AttendanceStatus::Alpha) | Err(_) => stats.alpha += 1,
            }
        }
        stats.belum_absen = (total_students - records.len() as i64).max(0);

        Ok(stats)
    }
}
