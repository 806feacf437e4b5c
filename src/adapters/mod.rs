//! External system integrations.
//!
//! - [`database`] - Course database abstraction layer (trait-based)
//! - [`postgresql`] - PostgreSQL implementation
//!
//! # Design Pattern
//!
//! Adapters isolate the database from the export pipeline so the pipeline
//! can be tested against in-memory sources.
//!
//! ```rust,no_run
//! use renewal_export::adapters::database::create_course_source;
//! use renewal_export::config::load_config;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("renewal.toml")?;
//! let source = create_course_source(&config.database).await?;
//! let enrollments = source.fetch_enrollments(None).await?;
//! # Ok(())
//! # }
//! ```

pub mod database;
pub mod postgresql;
