//! PostgreSQL integration
//!
//! Reads the course database mirror: the enrollment table and the course
//! schedule table.

pub mod adapter;
pub mod client;
pub mod models;

pub use adapter::PostgreSQLAdapter;
pub use client::PostgreSQLClient;
pub use models::{PostgreSQLEnrollment, PostgreSQLScheduleEntry};
