use std::sync::Arc;

use crate::models::{
    academics::{AcademicYear, CreateAcademicYearRequest, CreateRombelRequest, Rombel,
        RombelMembership},
    attendance::{
        AttendanceListParams, AttendanceRecord, AttendanceStats, NewAttendance,
        UpdateAttendanceRequest,
    },
    common::PaginatedResponse,
    ekstrakurikuler::{
        Activity, ActivityMember, CreateActivityRequest, MemberListParams, UpdateActivityRequest,
    },
    intrakurikuler::{
        ClassScheduleEntry, CreateAssignmentRequest, CreateSubjectRequest, Subject,
        UpdateSubjectRequest,
    },
    leave_requests::{LeaveListParams, LeaveRequest, LeaveStatus, SubmitLeaveRequest},
    promotion::PromotionResponse,
    students::{CreateStudentRequest, StudentDetail, StudentListQuery, UpdateStudentRequest},
    users::{entities::User, requests::CreateUserRequest},
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// User and session methods
    // Create a staff user (password already hashed by the caller)
    async fn create_user(&self, user: CreateUserRequest, password_hash: String) -> Result<User>;
    // Get a user by id
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // Get a user by email
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // Count users (startup seed check)
    async fn count_users(&self) -> Result<u64>;
    // Create a session row for a fresh login
    async fn create_session(&self, user_id: i64, token: &str, expires_at: i64) -> Result<()>;
    // Resolve a bearer token to its user, rejecting expired sessions
    async fn get_user_by_session_token(&self, token: &str, now: i64) -> Result<Option<User>>;
    // Delete one session (logout)
    async fn delete_session(&self, token: &str) -> Result<bool>;
    // Purge expired sessions, returns how many were removed
    async fn delete_expired_sessions(&self, now: i64) -> Result<u64>;

    /// Student roster methods
    // Create a student; unique nis / qr_code violations surface as Conflict
    async fn create_student(&self, student: CreateStudentRequest, qr_code: String)
    -> Result<StudentDetail>;
    async fn get_student_by_id(&self, id: i64) -> Result<Option<StudentDetail>>;
    async fn get_student_by_nis(&self, nis: &str) -> Result<Option<StudentDetail>>;
    async fn get_student_by_qr_code(&self, qr_code: &str) -> Result<Option<StudentDetail>>;
    async fn list_students(&self, query: StudentListQuery)
    -> Result<PaginatedResponse<StudentDetail>>;
    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<StudentDetail>>;
    // Soft delete: clears the active flag, history stays
    async fn deactivate_student(&self, id: i64) -> Result<bool>;

    /// Academic structure methods
    async fn create_academic_year(&self, req: CreateAcademicYearRequest) -> Result<AcademicYear>;
    async fn get_academic_year_by_id(&self, id: i64) -> Result<Option<AcademicYear>>;
    async fn list_academic_years(&self) -> Result<Vec<AcademicYear>>;
    async fn create_rombel(&self, req: CreateRombelRequest) -> Result<Rombel>;
    async fn list_rombels(&self, academic_year_id: Option<i64>) -> Result<Vec<Rombel>>;
    // Enroll a student as active in a rombel
    async fn enroll_student(
        &self,
        student_id: i64,
        rombel_id: i64,
        entry_date: chrono::NaiveDate,
    ) -> Result<RombelMembership>;

    /// Attendance methods
    async fn get_attendance_by_student_and_date(
        &self,
        student_id: i64,
        date: chrono::NaiveDate,
    ) -> Result<Option<AttendanceRecord>>;
    async fn insert_attendance(&self, record: NewAttendance) -> Result<AttendanceRecord>;
    async fn update_attendance(
        &self,
        id: i64,
        update: UpdateAttendanceRequest,
        now: chrono::DateTime<chrono::Utc>,
    ) -> Result<Option<AttendanceRecord>>;
    async fn list_attendance(&self, params: AttendanceListParams) -> Result<Vec<AttendanceRecord>>;
    // Per-status counts for a date, optionally narrowed to one class
    async fn attendance_stats(
        &self,
        date: chrono::NaiveDate,
        class: Option<String>,
    ) -> Result<AttendanceStats>;

    /// Leave request methods
    async fn submit_leave_request(&self, req: SubmitLeaveRequest) -> Result<LeaveRequest>;
    async fn get_leave_request_by_id(&self, id: i64) -> Result<Option<LeaveRequest>>;
    async fn list_leave_requests(&self, params: LeaveListParams) -> Result<Vec<LeaveRequest>>;
    // Review; on approval materializes attendance rows in one transaction
    async fn review_leave_request(
        &self,
        id: i64,
        status: LeaveStatus,
        reviewer_id: i64,
        now: chrono::DateTime<chrono::Utc>,
    ) -> Result<LeaveRequest>;
    async fn count_pending_leave_requests(&self, class: Option<String>) -> Result<i64>;

    /// Year-end promotion, one transaction
    async fn promote_students(
        &self,
        new_academic_year_id: i64,
        promotion_date: chrono::NaiveDate,
    ) -> Result<PromotionResponse>;

    /// Intrakurikuler methods
    async fn create_subject(&self, req: CreateSubjectRequest) -> Result<Subject>;
    async fn list_subjects(&self) -> Result<Vec<Subject>>;
    async fn update_subject(&self, id: i64, update: UpdateSubjectRequest)
    -> Result<Option<Subject>>;
    async fn delete_subject(&self, id: i64) -> Result<bool>;
    async fn create_assignment(&self, req: CreateAssignmentRequest) -> Result<ClassScheduleEntry>;
    async fn list_class_schedule(&self, class: Option<String>) -> Result<Vec<ClassScheduleEntry>>;

    /// Ekstrakurikuler methods
    async fn create_activity(&self, req: CreateActivityRequest) -> Result<Activity>;
    async fn list_activities(&self) -> Result<Vec<Activity>>;
    async fn update_activity(
        &self,
        id: i64,
        update: UpdateActivityRequest,
    ) -> Result<Option<Activity>>;
    async fn delete_activity(&self, id: i64) -> Result<bool>;
    async fn add_activity_member(&self, activity_id: i64, student_id: i64)
    -> Result<ActivityMember>;
    async fn remove_activity_member(&self, activity_id: i64, student_id: i64) -> Result<bool>;
    async fn list_activity_members(&self, params: MemberListParams)
    -> Result<Vec<ActivityMember>>;

    /// Operational methods
    // Re-run pending migrations
    async fn migrate_up(&self) -> Result<()>;
    // Row counts per table for the db-migrate report
    async fn table_counts(&self) -> Result<Vec<(&'static str, u64)>>;
    // Idempotent seed: default academic year + grade 1-6 rombels
    async fn init_school_year(
        &self,
        name: &str,
        start_date: chrono::NaiveDate,
        end_date: chrono::NaiveDate,
        wali_teacher_id: i64,
    ) -> Result<(AcademicYear, Vec<Rombel>)>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
