use super::SeaOrmStorage;
use crate::entity::academic_years::Entity as AcademicYears;
use crate::entity::prelude::{RombelModel, Students};
use crate::entity::rombel_memberships::{
    ActiveModel as MembershipActiveModel, Column as MembershipColumn, Entity as RombelMemberships,
};
use crate::entity::rombels::{
    ActiveModel as RombelActiveModel, Column as RombelColumn, Entity as Rombels,
};
use crate::entity::students::Column as StudentColumn;
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::{AbsensiError, Result};
use crate::models::academics::MembershipStatus;
use crate::models::promotion::{
    GraduatedStudent, NewRombelInfo, PromotedStudent, PromotionResponse, PromotionSummary,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseTransaction, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use std::collections::{BTreeMap, HashMap};

const HIGHEST_GRADE: i32 = 6;

impl SeaOrmStorage {
    /// Year-end promotion. Closes every active membership, moves each
    /// cohort up one grade into the target year (grade 6 graduates) and
    /// makes sure the target year has a grade 1 rombel for the incoming
    /// cohort. One transaction end to end.
    pub async fn promote_students_impl(
        &self,
        new_academic_year_id: i64,
        promotion_date: chrono::NaiveDate,
    ) -> Result<PromotionResponse> {
        let response = self
            .db
            .transaction::<_, PromotionResponse, AbsensiError>(move |txn| {
                Box::pin(async move {
                    run_promotion(txn, new_academic_year_id, promotion_date).await
                })
            })
            .await
            .map_err(|e| match e {
                sea_orm::TransactionError::Connection(e) => AbsensiError::from(e),
                sea_orm::TransactionError::Transaction(e) => e,
            })?;

        Ok(response)
    }
}

async fn run_promotion(
    txn: &DatabaseTransaction,
    new_academic_year_id: i64,
    promotion_date: chrono::NaiveDate,
) -> std::result::Result<PromotionResponse, AbsensiError> {
    // Guard 1: the target year must exist
    let target_year = AcademicYears::find_by_id(new_academic_year_id)
        .one(txn)
        .await
        .map_err(|e| AbsensiError::database_operation(format!("Year lookup failed: {e}")))?
        .ok_or_else(|| {
            AbsensiError::not_found(format!(
                "Academic year {new_academic_year_id} not found"
            ))
        })?;

    // Guard 2: promotion may only run once per target year
    let target_rombel_ids: Vec<i64> = Rombels::find()
        .filter(RombelColumn::AcademicYearId.eq(new_academic_year_id))
        .all(txn)
        .await
        .map_err(|e| AbsensiError::database_operation(format!("Rombel lookup failed: {e}")))?
        .into_iter()
        .map(|r| r.id)
        .collect();

    if !target_rombel_ids.is_empty() {
        let already = RombelMemberships::find()
            .filter(MembershipColumn::RombelId.is_in(target_rombel_ids))
            .filter(MembershipColumn::Status.eq(MembershipStatus::ACTIVE))
            .one(txn)
            .await
            .map_err(|e| {
                AbsensiError::database_operation(format!("Membership lookup failed: {e}"))
            })?;
        if already.is_some() {
            return Err(AbsensiError::conflict(format!(
                "Promotion into {} has already been run",
                target_year.name
            )));
        }
    }

    // Guard 3: something must exist to promote
    let active_memberships = RombelMemberships::find()
        .filter(MembershipColumn::Status.eq(MembershipStatus::ACTIVE))
        .all(txn)
        .await
        .map_err(|e| AbsensiError::database_operation(format!("Membership lookup failed: {e}")))?;
    if active_memberships.is_empty() {
        return Err(AbsensiError::validation(
            "No active enrollments to promote",
        ));
    }

    // Resolve the rombel and student behind each membership
    let rombel_ids: Vec<i64> = active_memberships.iter().map(|m| m.rombel_id).collect();
    let rombels: HashMap<i64, RombelModel> = Rombels::find()
        .filter(RombelColumn::Id.is_in(rombel_ids))
        .all(txn)
        .await
        .map_err(|e| AbsensiError::database_operation(format!("Rombel lookup failed: {e}")))?
        .into_iter()
        .map(|r| (r.id, r))
        .collect();

    let student_ids: Vec<i64> = active_memberships.iter().map(|m| m.student_id).collect();
    let student_names: HashMap<i64, String> = Students::find()
        .filter(StudentColumn::Id.is_in(student_ids))
        .all(txn)
        .await
        .map_err(|e| AbsensiError::database_operation(format!("Student lookup failed: {e}")))?
        .into_iter()
        .map(|s| (s.id, s.full_name))
        .collect();

    // Close every active membership in one statement
    RombelMemberships::update_many()
        .col_expr(
            MembershipColumn::Status,
            sea_orm::sea_query::Expr::value(MembershipStatus::COMPLETED),
        )
        .col_expr(
            MembershipColumn::ExitDate,
            sea_orm::sea_query::Expr::value(promotion_date),
        )
        .filter(MembershipColumn::Status.eq(MembershipStatus::ACTIVE))
        .exec(txn)
        .await
        .map_err(|e| {
            AbsensiError::database_operation(format!("Closing memberships failed: {e}"))
        })?;

    // Group cohorts by current grade, ascending
    let mut cohorts: BTreeMap<i32, Vec<(i64, String, String)>> = BTreeMap::new();
    for membership in &active_memberships {
        let Some(rombel) = rombels.get(&membership.rombel_id) else {
            continue;
        };
        let name = student_names
            .get(&membership.student_id)
            .cloned()
            .unwrap_or_default();
        cohorts
            .entry(rombel.grade_level)
            .or_default()
            .push((membership.student_id, name, rombel.class_name.clone()));
    }

    let mut promoted_students = Vec::new();
    let mut graduated_students = Vec::new();
    let mut new_rombels = Vec::new();

    for (grade, students) in &cohorts {
        if *grade >= HIGHEST_GRADE {
            for (student_id, name, from_class) in students {
                graduated_students.push(GraduatedStudent {
                    student_id: *student_id,
                    student_name: name.clone(),
                    from_class: from_class.clone(),
                });
            }
            continue;
        }

        let next_grade = grade + 1;
        let (rombel, created) =
            resolve_or_create_rombel(txn, new_academic_year_id, next_grade, *grade).await?;
        if created {
            new_rombels.push(NewRombelInfo {
                rombel_id: rombel.id,
                name: rombel.class_name.clone(),
                grade_level: rombel.grade_level,
            });
        }

        for (student_id, name, from_class) in students {
            let membership = MembershipActiveModel {
                student_id: Set(*student_id),
                rombel_id: Set(rombel.id),
                status: Set(MembershipStatus::Active.as_str().to_string()),
                entry_date: Set(target_year.start_date),
                exit_date: Set(None),
                ..Default::default()
            };
            membership.insert(txn).await.map_err(|e| {
                AbsensiError::database_operation(format!("New enrollment failed: {e}"))
            })?;

            promoted_students.push(PromotedStudent {
                student_id: *student_id,
                student_name: name.clone(),
                from_class: from_class.clone(),
                to_class: rombel.class_name.clone(),
                to_grade: next_grade,
            });
        }
    }

    // The incoming cohort needs somewhere to land
    let grade_one = Rombels::find()
        .filter(RombelColumn::AcademicYearId.eq(new_academic_year_id))
        .filter(RombelColumn::GradeLevel.eq(1))
        .one(txn)
        .await
        .map_err(|e| AbsensiError::database_operation(format!("Rombel lookup failed: {e}")))?;
    if grade_one.is_none() {
        let (rombel, _) = resolve_or_create_rombel(txn, new_academic_year_id, 1, 1).await?;
        new_rombels.push(NewRombelInfo {
            rombel_id: rombel.id,
            name: rombel.class_name,
            grade_level: 1,
        });
    }

    let summary = PromotionSummary {
        promoted: promoted_students.len() as i64,
        graduated: graduated_students.len() as i64,
        rombels_created: new_rombels.len() as i64,
    };

    Ok(PromotionResponse {
        academic_year: target_year.name,
        summary,
        promoted_students,
        graduated_students,
        new_rombels,
    })
}

fn class_name_for_grade(grade: i32) -> String {
    format!("Kelas {grade}")
}

/// Find the (year, grade) rombel or create it, inheriting the homeroom
/// teacher from the most recently created rombel of the source grade.
async fn resolve_or_create_rombel(
    txn: &DatabaseTransaction,
    academic_year_id: i64,
    grade_level: i32,
    inherit_from_grade: i32,
) -> std::result::Result<(RombelModel, bool), AbsensiError> {
    let existing = Rombels::find()
        .filter(RombelColumn::AcademicYearId.eq(academic_year_id))
        .filter(RombelColumn::GradeLevel.eq(grade_level))
        .one(txn)
        .await
        .map_err(|e| AbsensiError::database_operation(format!("Rombel lookup failed: {e}")))?;
    if let Some(rombel) = existing {
        return Ok((rombel, false));
    }

    let predecessor = Rombels::find()
        .filter(RombelColumn::GradeLevel.eq(inherit_from_grade))
        .order_by_desc(RombelColumn::CreatedAt)
        .one(txn)
        .await
        .map_err(|e| AbsensiError::database_operation(format!("Rombel lookup failed: {e}")))?;

    let wali_teacher_id = match predecessor {
        Some(rombel) => rombel.wali_teacher_id,
        None => fallback_teacher_id(txn).await?,
    };

    let now = chrono::Utc::now().timestamp();
    let model = RombelActiveModel {
        academic_year_id: Set(academic_year_id),
        grade_level: Set(grade_level),
        class_name: Set(class_name_for_grade(grade_level)),
        wali_teacher_id: Set(wali_teacher_id),
        created_at: Set(now),
        ..Default::default()
    };

    let rombel = model
        .insert(txn)
        .await
        .map_err(|e| AbsensiError::database_operation(format!("Create rombel failed: {e}")))?;

    Ok((rombel, true))
}

// Oldest staff account, used when no rombel exists to inherit from
async fn fallback_teacher_id(
    txn: &DatabaseTransaction,
) -> std::result::Result<i64, AbsensiError> {
    let user = Users::find()
        .order_by_asc(UserColumn::Id)
        .one(txn)
        .await
        .map_err(|e| AbsensiError::database_operation(format!("User lookup failed: {e}")))?
        .ok_or_else(|| {
            AbsensiError::validation("No staff account exists to own the new rombel")
        })?;

    Ok(user.id)
}
