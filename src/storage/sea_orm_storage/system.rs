use super::SeaOrmStorage;
use crate::entity::prelude::{
    AcademicYears, Attendance, EkstrakurikulerActivities, EkstrakurikulerMembers,
    IntrakurikulerAssignments, IntrakurikulerSubjects, LeaveRequests, RombelMemberships, Rombels,
    Sessions, Students, Users,
};
use crate::errors::{AbsensiError, Result};
use crate::models::academics::{
    AcademicYear, CreateAcademicYearRequest, CreateRombelRequest, Rombel,
};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

impl SeaOrmStorage {
    pub async fn migrate_up_impl(&self) -> Result<()> {
        Migrator::up(&self.db, None)
            .await
            .map_err(|e| AbsensiError::database_operation(format!("Migration failed: {e}")))?;
        Ok(())
    }

    pub async fn table_counts_impl(&self) -> Result<Vec<(&'static str, u64)>> {
        macro_rules! count {
            ($entity:ty) => {
                <$entity>::find().count(&self.db).await.map_err(|e| {
                    AbsensiError::database_operation(format!("Table count failed: {e}"))
                })?
            };
        }

        Ok(vec![
            ("users", count!(Users)),
            ("sessions", count!(Sessions)),
            ("students", count!(Students)),
            ("academic_years", count!(AcademicYears)),
            ("rombels", count!(Rombels)),
            ("rombel_memberships", count!(RombelMemberships)),
            ("attendance", count!(Attendance)),
            ("leave_requests", count!(LeaveRequests)),
            ("intrakurikuler_subjects", count!(IntrakurikulerSubjects)),
            ("intrakurikuler_assignments", count!(IntrakurikulerAssignments)),
            ("ekstrakurikuler_activities", count!(EkstrakurikulerActivities)),
            ("ekstrakurikuler_members", count!(EkstrakurikulerMembers)),
        ])
    }

    /// Idempotent seed for a fresh install: the named academic year plus
    /// one rombel per grade. Existing rows are left alone.
    pub async fn init_school_year_impl(
        &self,
        name: &str,
        start_date: chrono::NaiveDate,
        end_date: chrono::NaiveDate,
        wali_teacher_id: i64,
    ) -> Result<(AcademicYear, Vec<Rombel>)> {
        use crate::entity::academic_years::Column as YearColumn;

        let year = match AcademicYears::find()
            .filter(YearColumn::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| AbsensiError::database_operation(format!("Year lookup failed: {e}")))?
        {
            Some(year) => year.into_academic_year(),
            None => {
                self.create_academic_year_impl(CreateAcademicYearRequest {
                    name: name.to_string(),
                    start_date,
                    end_date,
                    is_active: true,
                })
                .await?
            }
        };

        let existing = self.list_rombels_impl(Some(year.id)).await?;
        let mut rombels = existing.clone();

        for grade in 1..=6 {
            if existing.iter().any(|r| r.grade_level == grade) {
                continue;
            }
            let rombel = self
                .create_rombel_impl(CreateRombelRequest {
                    academic_year_id: year.id,
                    grade_level: grade,
                    class_name: format!("Kelas {grade}"),
                    wali_teacher_id,
                })
                .await?;
            rombels.push(rombel);
        }

        rombels.sort_by_key(|r| r.grade_level);
        Ok((year, rombels))
    }
}
