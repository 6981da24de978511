//! SeaORM entity definitions.
//!
//! These mirror the database tables and stay separate from the business
//! models. The storage layer runs CRUD against them and converts into
//! the structs in `models` before anything leaves storage.

pub mod prelude;

pub mod academic_years;
pub mod attendance;
pub mod ekstrakurikuler_activities;
pub mod ekstrakurikuler_members;
pub mod intrakurikuler_assignments;
pub mod intrakurikuler_subjects;
pub mod leave_requests;
pub mod rombel_memberships;
pub mod rombels;
pub mod sessions;
pub mod students;
pub mod users;
