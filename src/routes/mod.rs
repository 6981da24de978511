pub mod admin;

pub mod attendance;

pub mod auth;

pub mod ekstrakurikuler;

pub mod intrakurikuler;

pub mod leave_requests;

pub mod promotion;

pub mod students;

pub mod system;

pub use admin::configure_admin_routes;
pub use attendance::configure_attendance_routes;
pub use auth::configure_auth_routes;
pub use ekstrakurikuler::configure_ekstrakurikuler_routes;
pub use intrakurikuler::configure_intrakurikuler_routes;
pub use leave_requests::configure_leave_request_routes;
pub use promotion::configure_promotion_routes;
pub use students::configure_student_routes;
pub use system::configure_system_routes;
