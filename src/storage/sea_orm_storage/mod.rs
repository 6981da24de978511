//! SeaORM storage implementation.
//!
//! One storage layer for SQLite, PostgreSQL and MySQL; the backend is
//! inferred from the database URL.

mod academics;
mod attendance;
mod ekstrakurikuler;
mod intrakurikuler;
mod leave_requests;
mod promotion;
mod students;
mod system;
mod users;

use crate::config::AppConfig;
use crate::errors::{AbsensiError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        Self::new_with_options(
            &config.database.url,
            config.database.pool_size,
            config.database.timeout,
        )
        .await
    }

    /// Connect and migrate against an explicit URL. Integration tests
    /// use this with `sqlite::memory:`.
    pub async fn new_with_options(url: &str, pool_size: u32, timeout: u64) -> Result<Self> {
        let db_url = Self::build_database_url(url)?;

        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, pool_size, timeout).await?
        } else {
            Self::connect_generic(&db_url, pool_size, timeout).await?
        };

        Migrator::up(&db, None)
            .await
            .map_err(|e| AbsensiError::database_operation(format!("Migration failed: {e}")))?;

        info!("SeaORM storage ready, database: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite connection with WAL and pragma tuning.
    async fn connect_sqlite(url: &str, pool_size: u32, timeout: u64) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| AbsensiError::database_config(format!("Bad SQLite URL: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("foreign_keys", "on");

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| AbsensiError::database_connection(format!("SQLite connect failed: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// PostgreSQL / MySQL connection.
    async fn connect_generic(
        url: &str,
        pool_size: u32,
        timeout: u64,
    ) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(timeout))
            .acquire_timeout(Duration::from_secs(timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| AbsensiError::database_connection(format!("Cannot connect: {e}")))
    }

    /// Infer the backend from the URL shape.
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(AbsensiError::database_config(format!(
                "Cannot infer database type from URL: {url}. Supported: sqlite://, postgres://, mysql://, or a .db/.sqlite file path"
            )))
        }
    }
}

// Storage trait implementation
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // Users and sessions
    async fn create_user(&self, user: CreateUserRequest, password_hash: String) -> Result<User> {
        self.create_user_impl(user, password_hash).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    async fn create_session(&self, user_id: i64, token: &str, expires_at: i64) -> Result<()> {
        self.create_session_impl(user_id, token, expires_at).await
    }

    async fn get_user_by_session_token(&self, token: &str, now: i64) -> Result<Option<User>> {
        self.get_user_by_session_token_impl(token, now).await
    }

    async fn delete_session(&self, token: &str) -> Result<bool> {
        self.delete_session_impl(token).await
    }

    async fn delete_expired_sessions(&self, now: i64) -> Result<u64> {
        self.delete_expired_sessions_impl(now).await
    }

    // Students
    async fn create_student(
        &self,
        student: CreateStudentRequest,
        qr_code: String,
    ) -> Result<StudentDetail> {
        self.create_student_impl(student, qr_code).await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<StudentDetail>> {
        self.get_student_by_id_impl(id).await
    }

    async fn get_student_by_nis(&self, nis: &str) -> Result<Option<StudentDetail>> {
        self.get_student_by_nis_impl(nis).await
    }

    async fn get_student_by_qr_code(&self, qr_code: &str) -> Result<Option<StudentDetail>> {
        self.get_student_by_qr_code_impl(qr_code).await
    }

    async fn list_students(
        &self,
        query: StudentListQuery,
    ) -> Result<PaginatedResponse<StudentDetail>> {
        self.list_students_impl(query).await
    }

    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<StudentDetail>> {
        self.update_student_impl(id, update).await
    }

    async fn deactivate_student(&self, id: i64) -> Result<bool> {
        self.deactivate_student_impl(id).await
    }

    // Academic structure
    async fn create_academic_year(&self, req: CreateAcademicYearRequest) -> Result<AcademicYear> {
        self.create_academic_year_impl(req).await
    }

    async fn get_academic_year_by_id(&self, id: i64) -> Result<Option<AcademicYear>> {
        self.get_academic_year_by_id_impl(id).await
    }

    async fn list_academic_years(&self) -> Result<Vec<AcademicYear>> {
        self.list_academic_years_impl().await
    }

    async fn create_rombel(&self, req: CreateRombelRequest) -> Result<Rombel> {
        self.create_rombel_impl(req).await
    }

    async fn list_rombels(&self, academic_year_id: Option<i64>) -> Result<Vec<Rombel>> {
        self.list_rombels_impl(academic_year_id).await
    }

    async fn enroll_student(
        &self,
        student_id: i64,
        rombel_id: i64,
        entry_date: chrono::NaiveDate,
    ) -> Result<RombelMembership> {
        self.enroll_student_impl(student_id, rombel_id, entry_date)
            .await
    }

    // Attendance
    async fn get_attendance_by_student_and_date(
        &self,
        student_id: i64,
        date: chrono::NaiveDate,
    ) -> Result<Option<AttendanceRecord>> {
        self.get_attendance_by_student_and_date_impl(student_id, date)
            .await
    }

    async fn insert_attendance(&self, record: NewAttendance) -> Result<AttendanceRecord> {
        self.insert_attendance_impl(record).await
    }

    async fn update_attendance(
        &self,
        id: i64,
        update: UpdateAttendanceRequest,
        now: chrono::DateTime<chrono::Utc>,
    ) -> Result<Option<AttendanceRecord>> {
        self.update_attendance_impl(id, update, now).await
    }

    async fn list_attendance(&self, params: AttendanceListParams) -> Result<Vec<AttendanceRecord>> {
        self.list_attendance_impl(params).await
    }

    async fn attendance_stats(
        &self,
        date: chrono::NaiveDate,
        class: Option<String>,
    ) -> Result<AttendanceStats> {
        self.attendance_stats_impl(date, class).await
    }

    // Leave requests
    async fn submit_leave_request(&self, req: SubmitLeaveRequest) -> Result<LeaveRequest> {
        self.submit_leave_request_impl(req).await
    }

    async fn get_leave_request_by_id(&self, id: i64) -> Result<Option<LeaveRequest>> {
        self.get_leave_request_by_id_impl(id).await
    }

    async fn list_leave_requests(&self, params: LeaveListParams) -> Result<Vec<LeaveRequest>> {
        self.list_leave_requests_impl(params).await
    }

    async fn review_leave_request(
        &self,
        id: i64,
        status: LeaveStatus,
        reviewer_id: i64,
        now: chrono::DateTime<chrono::Utc>,
    ) -> Result<LeaveRequest> {
        self.review_leave_request_impl(id, status, reviewer_id, now)
            .await
    }

    async fn count_pending_leave_requests(&self, class: Option<String>) -> Result<i64> {
        self.count_pending_leave_requests_impl(class).await
    }

    // Promotion
    async fn promote_students(
        &self,
        new_academic_year_id: i64,
        promotion_date: chrono::NaiveDate,
    ) -> Result<PromotionResponse> {
        self.promote_students_impl(new_academic_year_id, promotion_date)
            .await
    }

    // Intrakurikuler
    async fn create_subject(&self, req: CreateSubjectRequest) -> Result<Subject> {
        self.create_subject_impl(req).await
    }

    async fn list_subjects(&self) -> Result<Vec<Subject>> {
        self.list_subjects_impl().await
    }

    async fn update_subject(
        &self,
        id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>> {
        self.update_subject_impl(id, update).await
    }

    async fn delete_subject(&self, id: i64) -> Result<bool> {
        self.delete_subject_impl(id).await
    }

    async fn create_assignment(&self, req: CreateAssignmentRequest) -> Result<ClassScheduleEntry> {
        self.create_assignment_impl(req).await
    }

    async fn list_class_schedule(&self, class: Option<String>) -> Result<Vec<ClassScheduleEntry>> {
        self.list_class_schedule_impl(class).await
    }

    // Ekstrakurikuler
    async fn create_activity(&self, req: CreateActivityRequest) -> Result<Activity> {
        self.create_activity_impl(req).await
    }

    async fn list_activities(&self) -> Result<Vec<Activity>> {
        self.list_activities_impl().await
    }

    async fn update_activity(
        &self,
        id: i64,
        update: UpdateActivityRequest,
    ) -> Result<Option<Activity>> {
        self.update_activity_impl(id, update).await
    }

    async fn delete_activity(&self, id: i64) -> Result<bool> {
        self.delete_activity_impl(id).await
    }

    async fn add_activity_member(
        &self,
        activity_id: i64,
        student_id: i64,
    ) -> Result<ActivityMember> {
        self.add_activity_member_impl(activity_id, student_id).await
    }

    async fn remove_activity_member(&self, activity_id: i64, student_id: i64) -> Result<bool> {
        self.remove_activity_member_impl(activity_id, student_id)
            .await
    }

    async fn list_activity_members(
        &self,
        params: MemberListParams,
    ) -> Result<Vec<ActivityMember>> {
        self.list_activity_members_impl(params).await
    }

    // Operational
    async fn migrate_up(&self) -> Result<()> {
        self.migrate_up_impl().await
    }

    async fn table_counts(&self) -> Result<Vec<(&'static str, u64)>> {
        self.table_counts_impl().await
    }

    async fn init_school_year(
        &self,
        name: &str,
        start_date: chrono::NaiveDate,
        end_date: chrono::NaiveDate,
        wali_teacher_id: i64,
    ) -> Result<(AcademicYear, Vec<Rombel>)> {
        self.init_school_year_impl(name, start_date, end_date, wali_teacher_id)
            .await
    }
}
