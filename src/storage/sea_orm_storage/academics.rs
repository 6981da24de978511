use super::SeaOrmStorage;
use crate::entity::academic_years::{
    ActiveModel as YearActiveModel, Column as YearColumn, Entity as AcademicYears,
};
use crate::entity::rombel_memberships::{
    ActiveModel as MembershipActiveModel, Column as MembershipColumn, Entity as RombelMemberships,
};
use crate::entity::rombels::{
    ActiveModel as RombelActiveModel, Column as RombelColumn, Entity as Rombels,
};
use crate::errors::{AbsensiError, Result};
use crate::models::academics::{
    AcademicYear, CreateAcademicYearRequest, CreateRombelRequest, MembershipStatus, Rombel,
    RombelMembership,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use std::collections::HashMap;

impl SeaOrmStorage {
    pub async fn create_academic_year_impl(
        &self,
        req: CreateAcademicYearRequest,
    ) -> Result<AcademicYear> {
        let existing = AcademicYears::find()
            .filter(YearColumn::Name.eq(&req.name))
            .one(&self.db)
            .await
            .map_err(|e| AbsensiError::database_operation(format!("Year lookup failed: {e}")))?;
        if existing.is_some() {
            return Err(AbsensiError::conflict(format!(
                "Academic year {} already exists",
                req.name
            )));
        }

        let model = YearActiveModel {
            name: Set(req.name),
            start_date: Set(req.start_date),
            end_date: Set(req.end_date),
            is_active: Set(req.is_active),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| AbsensiError::database_operation(format!("Create year failed: {e}")))?;

        Ok(result.into_academic_year())
    }

    pub async fn get_academic_year_by_id_impl(&self, id: i64) -> Result<Option<AcademicYear>> {
        let result = AcademicYears::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AbsensiError::database_operation(format!("Year lookup failed: {e}")))?;

        Ok(result.map(|m| m.into_academic_year()))
    }

    pub async fn list_academic_years_impl(&self) -> Result<Vec<AcademicYear>> {
        let years = AcademicYears::find()
            .order_by_desc(YearColumn::StartDate)
            .all(&self.db)
            .await
            .map_err(|e| AbsensiError::database_operation(format!("Year list failed: {e}")))?;

        Ok(years.into_iter().map(|m| m.into_academic_year()).collect())
    }

    pub async fn create_rombel_impl(&self, req: CreateRombelRequest) -> Result<Rombel> {
        // One rombel per grade per year in the cohort model
        let existing = Rombels::find()
            .filter(RombelColumn::AcademicYearId.eq(req.academic_year_id))
            .filter(RombelColumn::GradeLevel.eq(req.grade_level))
            .one(&self.db)
            .await
            .map_err(|e| AbsensiError::database_operation(format!("Rombel lookup failed: {e}")))?;
        if existing.is_some() {
            return Err(AbsensiError::conflict(format!(
                "A grade {} rombel already exists for this academic year",
                req.grade_level
            )));
        }

        let now = chrono::Utc::now().timestamp();

        let model = RombelActiveModel {
            academic_year_id: Set(req.academic_year_id),
            grade_level: Set(req.grade_level),
            class_name: Set(req.class_name),
            wali_teacher_id: Set(req.wali_teacher_id),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| AbsensiError::database_operation(format!("Create rombel failed: {e}")))?;

        Ok(result.into_rombel())
    }

    pub async fn list_rombels_impl(&self, academic_year_id: Option<i64>) -> Result<Vec<Rombel>> {
        let mut select = Rombels::find();
        if let Some(year_id) = academic_year_id {
            select = select.filter(RombelColumn::AcademicYearId.eq(year_id));
        }

        let rombels = select
            .order_by_asc(RombelColumn::GradeLevel)
            .all(&self.db)
            .await
            .map_err(|e| AbsensiError::database_operation(format!("Rombel list failed: {e}")))?;

        Ok(rombels.into_iter().map(|m| m.into_rombel()).collect())
    }

    /// Enroll a student as active. A student can only sit in one class
    /// at a time.
    pub async fn enroll_student_impl(
        &self,
        student_id: i64,
        rombel_id: i64,
        entry_date: chrono::NaiveDate,
    ) -> Result<RombelMembership> {
        let active = RombelMemberships::find()
            .filter(MembershipColumn::StudentId.eq(student_id))
            .filter(MembershipColumn::Status.eq(MembershipStatus::ACTIVE))
            .one(&self.db)
            .await
            .map_err(|e| {
                AbsensiError::database_operation(format!("Membership lookup failed: {e}"))
            })?;
        if active.is_some() {
            return Err(AbsensiError::conflict(
                "Student already has an active enrollment",
            ));
        }

        let model = MembershipActiveModel {
            student_id: Set(student_id),
            rombel_id: Set(rombel_id),
            status: Set(MembershipStatus::Active.as_str().to_string()),
            entry_date: Set(entry_date),
            exit_date: Set(None),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| AbsensiError::database_operation(format!("Enroll failed: {e}")))?;

        Ok(result.into_membership())
    }

    // id -> name for a batch of academic years
    pub(crate) async fn academic_year_names(
        &self,
        year_ids: Vec<i64>,
    ) -> Result<HashMap<i64, String>> {
        if year_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let years = AcademicYears::find()
            .filter(YearColumn::Id.is_in(year_ids))
            .all(&self.db)
            .await
            .map_err(|e| AbsensiError::database_operation(format!("Year lookup failed: {e}")))?;

        Ok(years.into_iter().map(|y| (y.id, y.name)).collect())
    }
}
