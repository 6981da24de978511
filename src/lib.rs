//! Absensi Sekolah - school attendance management backend
//!
//! Actix Web backend for a primary school: student roster, QR check-in,
//! leave requests, role-scoped dashboards, curricular tracking, and the
//! year-end cohort promotion workflow.
//!
//! # Architecture
//! - `config`: configuration management
//! - `entity`: SeaORM database entities
//! - `errors`: unified error handling
//! - `middlewares`: session and role middleware
//! - `models`: data model definitions
//! - `routes`: API routing layer
//! - `runtime`: server lifecycle management
//! - `services`: business logic layer
//! - `storage`: data storage layer (SeaORM)
//! - `utils`: helper functions

pub mod config;
pub mod entity;
pub mod errors;
pub mod middlewares;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
