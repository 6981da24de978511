//! Layered application configuration (files + environment).

mod r#impl;
mod structs;

pub use structs::*;
