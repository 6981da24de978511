use super::SeaOrmStorage;
use crate::entity::attendance::{
    ActiveModel as AttendanceActiveModel, Column as AttendanceColumn, Entity as Attendance,
};
use crate::entity::leave_requests::{ActiveModel, Column, Entity as LeaveRequests};
use crate::errors::{AbsensiError, Result};
use crate::models::leave_requests::{
    LeaveListParams, LeaveRequest, LeaveStatus, LeaveType, SubmitLeaveRequest,
};
use crate::utils::time::date_range_inclusive;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// Submit a new request. Denormalized student fields come from the
    /// roster so class-scoped listings never need a join.
    pub async fn submit_leave_request_impl(&self, req: SubmitLeaveRequest) -> Result<LeaveRequest> {
        let student = self
            .get_student_by_id_impl(req.student_id)
            .await?
            .ok_or_else(|| {
                AbsensiError::not_found(format!("Student {} not found", req.student_id))
            })?;

        let student_class = student
            .enrollment
            .as_ref()
            .map(|e| e.class_name.clone())
            .unwrap_or_default();

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_id: Set(student.student.id),
            student_name: Set(student.student.name),
            student_nis: Set(student.student.nis),
            student_class: Set(student_class),
            leave_type: Set(req.leave_type.as_str().to_string()),
            reason: Set(req.reason),
            start_date: Set(req.start_date),
            end_date: Set(req.end_date),
            status: Set(LeaveStatus::Pending.as_str().to_string()),
            parent_name: Set(req.parent_name),
            parent_contact: Set(req.parent_contact),
            submitted_at: Set(now),
            reviewed_by: Set(None),
            reviewed_at: Set(None),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            AbsensiError::database_operation(format!("Submit leave request failed: {e}"))
        })?;

        Ok(result.into_leave_request())
    }

    pub async fn get_leave_request_by_id_impl(&self, id: i64) -> Result<Option<LeaveRequest>> {
        let result = LeaveRequests::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| {
                AbsensiError::database_operation(format!("Leave request lookup failed: {e}"))
            })?;

        Ok(result.map(|m| m.into_leave_request()))
    }

    pub async fn list_leave_requests_impl(
        &self,
        params: LeaveListParams,
    ) -> Result<Vec<LeaveRequest>> {
        let mut select = LeaveRequests::find();

        if let Some(status) = params.status {
            select = select.filter(Column::Status.eq(status.as_str()));
        }
        if let Some(student_id) = params.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }
        if let Some(ref nis) = params.nis {
            select = select.filter(Column::StudentNis.eq(nis));
        }
        if let Some(ref class) = params.class {
            select = select.filter(Column::StudentClass.eq(class));
        }

        let requests = select
            .order_by_desc(Column::SubmittedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                AbsensiError::database_operation(format!("Leave request list failed: {e}"))
            })?;

        Ok(requests.into_iter().map(|m| m.into_leave_request()).collect())
    }

    /// Record the decision. Approval also materializes one attendance
    /// row per day of the range; the decision and the rows land in the
    /// same transaction so a crash cannot leave a half-applied leave.
    pub async fn review_leave_request_impl(
        &self,
        id: i64,
        status: LeaveStatus,
        reviewer_id: i64,
        now: chrono::DateTime<chrono::Utc>,
    ) -> Result<LeaveRequest> {
        let updated = self
            .db
            .transaction::<_, LeaveRequest, AbsensiError>(move |txn| {
                Box::pin(async move {
                    let request = LeaveRequests::find_by_id(id)
                        .one(txn)
                        .await
                        .map_err(|e| {
                            AbsensiError::database_operation(format!(
                                "Leave request lookup failed: {e}"
                            ))
                        })?
                        .ok_or_else(|| {
                            AbsensiError::not_found(format!("Leave request {id} not found"))
                        })?;

                    let leave_type = request
                        .leave_type
                        .parse::<LeaveType>()
                        .unwrap_or(LeaveType::Izin);

                    let model = ActiveModel {
                        id: Set(id),
                        status: Set(status.as_str().to_string()),
                        reviewed_by: Set(Some(reviewer_id)),
                        reviewed_at: Set(Some(now.timestamp())),
                        ..Default::default()
                    };

                    if status == LeaveStatus::Approved {
                        // Skip days that already carry a record
                        let covered: Vec<chrono::NaiveDate> = Attendance::find()
                            .filter(AttendanceColumn::StudentId.eq(request.student_id))
                            .filter(AttendanceColumn::Date.between(
                                request.start_date,
                                request.end_date,
                            ))
                            .all(txn)
                            .await
                            .map_err(|e| {
                                AbsensiError::database_operation(format!(
                                    "Attendance lookup failed: {e}"
                                ))
                            })?
                            .into_iter()
                            .map(|a| a.date)
                            .collect();

                        for day in date_range_inclusive(request.start_date, request.end_date) {
                            if covered.contains(&day) {
                                continue;
                            }
                            let row = AttendanceActiveModel {
                                student_id: Set(request.student_id),
                                student_name: Set(request.student_name.clone()),
                                student_nis: Set(request.student_nis.clone()),
                                student_class: Set(request.student_class.clone()),
                                date: Set(day),
                                check_in_time: Set(now.timestamp()),
                                check_out_time: Set(None),
                                status: Set(leave_type
                                    .attendance_status()
                                    .as_str()
                                    .to_string()),
                                scanned_by: Set(Some(reviewer_id)),
                                notes: Set(Some(request.reason.clone())),
                                ..Default::default()
                            };
                            row.insert(txn).await.map_err(|e| {
                                AbsensiError::database_operation(format!(
                                    "Attendance materialization failed: {e}"
                                ))
                            })?;
                        }
                    }

                    let updated = model.update(txn).await.map_err(|e| {
                        AbsensiError::database_operation(format!(
                            "Update leave request failed: {e}"
                        ))
                    })?;

                    Ok(updated.into_leave_request())
                })
            })
            .await
            .map_err(|e| match e {
                sea_orm::TransactionError::Connection(e) => AbsensiError::from(e),
                sea_orm::TransactionError::Transaction(e) => e,
            })?;

        Ok(updated)
    }

    pub async fn count_pending_leave_requests_impl(&self, class: Option<String>) -> Result<i64> {
        use sea_orm::PaginatorTrait;

        let mut select =
            LeaveRequests::find().filter(Column::Status.eq(LeaveStatus::PENDING));
        if let Some(ref class) = class {
            select = select.filter(Column::StudentClass.eq(class));
        }

        let count = select.count(&self.db).await.map_err(|e| {
            AbsensiError::database_operation(format!("Pending leave count failed: {e}"))
        })?;

        Ok(count as i64)
    }
}
