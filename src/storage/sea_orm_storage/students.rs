use super::SeaOrmStorage;
use crate::entity::prelude::{RombelMemberships, Rombels, StudentModel};
use crate::entity::rombel_memberships::Column as MembershipColumn;
use crate::entity::rombels::Column as RombelColumn;
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::errors::{AbsensiError, Result};
use crate::models::{
    PaginationInfo,
    academics::MembershipStatus,
    common::PaginatedResponse,
    students::{
        CreateStudentRequest, EnrollmentInfo, StudentDetail, StudentListQuery,
        UpdateStudentRequest,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};
use std::collections::HashMap;

impl SeaOrmStorage {
    /// Create a student. NIS and QR code are unique; a clash comes back
    /// as Conflict. With `rombel_id` set the student is enrolled right
    /// away.
    pub async fn create_student_impl(
        &self,
        req: CreateStudentRequest,
        qr_code: String,
    ) -> Result<StudentDetail> {
        if self.get_student_by_nis_impl(&req.nis).await?.is_some() {
            return Err(AbsensiError::conflict(format!(
                "A student with NIS {} already exists",
                req.nis
            )));
        }

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            nis: Set(req.nis),
            nisn: Set(req.nisn),
            full_name: Set(req.name),
            gender: Set(req.gender),
            birth_date: Set(req.birth_date),
            religion: Set(req.religion),
            photo_url: Set(req.photo_url),
            qr_code: Set(qr_code),
            active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| AbsensiError::database_operation(format!("Create student failed: {e}")))?;

        if let Some(rombel_id) = req.rombel_id {
            let today = chrono::Utc::now().date_naive();
            self.enroll_student_impl(result.id, rombel_id, today)
                .await?;
        }

        let enrollment = self.resolve_enrollment(result.id).await?;
        Ok(StudentDetail {
            student: result.into_student(),
            enrollment,
        })
    }

    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<StudentDetail>> {
        let result = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AbsensiError::database_operation(format!("Student lookup failed: {e}")))?;

        self.with_enrollment(result).await
    }

    pub async fn get_student_by_nis_impl(&self, nis: &str) -> Result<Option<StudentDetail>> {
        let result = Students::find()
            .filter(Column::Nis.eq(nis))
            .one(&self.db)
            .await
            .map_err(|e| AbsensiError::database_operation(format!("Student lookup failed: {e}")))?;

        self.with_enrollment(result).await
    }

    pub async fn get_student_by_qr_code_impl(&self, qr_code: &str) -> Result<Option<StudentDetail>> {
        let result = Students::find()
            .filter(Column::QrCode.eq(qr_code))
            .one(&self.db)
            .await
            .map_err(|e| AbsensiError::database_operation(format!("Student lookup failed: {e}")))?;

        self.with_enrollment(result).await
    }

    pub async fn list_students_impl(
        &self,
        query: StudentListQuery,
    ) -> Result<PaginatedResponse<StudentDetail>> {
        let page = query.page.max(1) as u64;
        let size = query.size.clamp(1, 100) as u64;

        let mut select = Students::find();

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::FullName.contains(&escaped))
                    .add(Column::Nis.contains(&escaped)),
            );
        }

        if let Some(active) = query.active {
            select = select.filter(Column::Active.eq(active));
        }

        // Class filter goes through the active memberships of that class
        if let Some(ref class) = query.class {
            let ids = self.student_ids_in_class(class).await?;
            select = select.filter(Column::Id.is_in(ids));
        }

        select = select.order_by_asc(Column::FullName);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| AbsensiError::database_operation(format!("Student count failed: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| AbsensiError::database_operation(format!("Student pages failed: {e}")))?;

        let students = paginator.fetch_page(page - 1).await.map_err(|e| {
            AbsensiError::database_operation(format!("Student list query failed: {e}"))
        })?;

        let mut enrollments = self
            .resolve_enrollments(students.iter().map(|m| m.id).collect())
            .await?;

        let items = students
            .into_iter()
            .map(|m| {
                let enrollment = enrollments.remove(&m.id);
                StudentDetail {
                    student: m.into_student(),
                    enrollment,
                }
            })
            .collect();

        Ok(PaginatedResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    pub async fn update_student_impl(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<StudentDetail>> {
        let existing = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AbsensiError::database_operation(format!("Student lookup failed: {e}")))?;
        if existing.is_none() {
            return Ok(None);
        }

        // NIS change must not collide with another student
        if let Some(ref nis) = update.nis
            && let Some(other) = self.get_student_by_nis_impl(nis).await?
            && other.student.id != id
        {
            return Err(AbsensiError::conflict(format!(
                "A student with NIS {nis} already exists"
            )));
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(nis) = update.nis {
            model.nis = Set(nis);
        }
        if let Some(nisn) = update.nisn {
            model.nisn = Set(Some(nisn));
        }
        if let Some(name) = update.name {
            model.full_name = Set(name);
        }
        if let Some(gender) = update.gender {
            model.gender = Set(Some(gender));
        }
        if let Some(birth_date) = update.birth_date {
            model.birth_date = Set(Some(birth_date));
        }
        if let Some(religion) = update.religion {
            model.religion = Set(Some(religion));
        }
        if let Some(photo_url) = update.photo_url {
            model.photo_url = Set(Some(photo_url));
        }
        if let Some(active) = update.active {
            model.active = Set(active);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| AbsensiError::database_operation(format!("Update student failed: {e}")))?;

        self.get_student_by_id_impl(id).await
    }

    /// Soft delete. Attendance and leave history keep the student row.
    pub async fn deactivate_student_impl(&self, id: i64) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let result = Students::update_many()
            .col_expr(Column::Active, sea_orm::sea_query::Expr::value(false))
            .col_expr(Column::UpdatedAt, sea_orm::sea_query::Expr::value(now))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                AbsensiError::database_operation(format!("Deactivate student failed: {e}"))
            })?;

        Ok(result.rows_affected > 0)
    }

    // Active students currently placed in the named class
    pub(crate) async fn student_ids_in_class(&self, class: &str) -> Result<Vec<i64>> {
        let rombel_ids: Vec<i64> = Rombels::find()
            .filter(RombelColumn::ClassName.eq(class))
            .all(&self.db)
            .await
            .map_err(|e| AbsensiError::database_operation(format!("Rombel lookup failed: {e}")))?
            .into_iter()
            .map(|r| r.id)
            .collect();

        if rombel_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids = RombelMemberships::find()
            .filter(MembershipColumn::RombelId.is_in(rombel_ids))
            .filter(MembershipColumn::Status.eq(MembershipStatus::ACTIVE))
            .all(&self.db)
            .await
            .map_err(|e| {
                AbsensiError::database_operation(format!("Membership lookup failed: {e}"))
            })?
            .into_iter()
            .map(|m| m.student_id)
            .collect();

        Ok(ids)
    }

    async fn with_enrollment(&self, model: Option<StudentModel>) -> Result<Option<StudentDetail>> {
        let Some(model) = model else {
            return Ok(None);
        };
        let enrollment = self.resolve_enrollment(model.id).await?;
        Ok(Some(StudentDetail {
            student: model.into_student(),
            enrollment,
        }))
    }

    pub(crate) async fn resolve_enrollment(&self, student_id: i64) -> Result<Option<EnrollmentInfo>> {
        let mut map = self.resolve_enrollments(vec![student_id]).await?;
        Ok(map.remove(&student_id))
    }

    // Active membership joined to rombel and year, one query per batch
    pub(crate) async fn resolve_enrollments(
        &self,
        student_ids: Vec<i64>,
    ) -> Result<HashMap<i64, EnrollmentInfo>> {
        if student_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let memberships = RombelMemberships::find()
            .filter(MembershipColumn::StudentId.is_in(student_ids))
            .filter(MembershipColumn::Status.eq(MembershipStatus::ACTIVE))
            .find_also_related(Rombels)
            .all(&self.db)
            .await
            .map_err(|e| {
                AbsensiError::database_operation(format!("Enrollment lookup failed: {e}"))
            })?;

        let year_ids: Vec<i64> = memberships
            .iter()
            .filter_map(|(_, rombel)| rombel.as_ref().map(|r| r.academic_year_id))
            .collect();
        let years: HashMap<i64, String> = self
            .academic_year_names(year_ids)
            .await?;

        let mut map = HashMap::new();
        for (membership, rombel) in memberships {
            if let Some(rombel) = rombel {
                let academic_year = years
                    .get(&rombel.academic_year_id)
                    .cloned()
                    .unwrap_or_default();
                map.insert(
                    membership.student_id,
                    EnrollmentInfo {
                        rombel_id: rombel.id,
                        class_name: rombel.class_name,
                        grade_level: rombel.grade_level,
                        academic_year,
                    },
                );
            }
        }

        Ok(map)
    }
}
