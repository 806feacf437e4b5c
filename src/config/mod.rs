//! Configuration management.
//!
//! This module provides TOML-based configuration loading, parsing, and validation.
//!
//! # Overview
//!
//! The exporter reads a TOML configuration file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `RENEWAL_<SECTION>_<KEY>` environment overrides
//! - Default values for optional settings
//! - Validation of every section on load
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level
//! - [`DatabaseConfig`] - Course database connection and table names
//! - [`ExportConfig`] - Output path, date filter, demo mode, dry run
//! - [`LoggingConfig`] - Local file logging
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [database]
//! connection_string = "${RENEWAL_DB_URL}"
//! enrollment_table = "course"
//! schedule_table = "coursesked"
//!
//! [export]
//! output_path = "out.txt"
//! demo = false
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{
    ApplicationConfig, DatabaseConfig, ExportConfig, LoggingConfig, RenewalConfig,
    DATE_FILTER_FORMAT, TIMESTAMP_FORMAT,
};
pub use secret::{redact_connection_string, secret_string, SecretString, SecretValue};
