// renewal-export - Continuing education completion exporter
// Copyright (c) 2025 renewal-export Contributors
// Licensed under the MIT License

//! # renewal-export
//!
//! Exports continuing education course completions from the legacy course
//! database into the JSON upload format accepted by Renewal Central.
//!
//! ## Overview
//!
//! For every enrollment row the exporter:
//! - **Normalizes** the license number to `PE` plus seven or more digits
//! - **Resolves** the course schedule rows for the enrollment's course code
//! - **Derives** one upload record per schedule row (name order, credit
//!   hours, completion date, renewal cycle)
//!
//! and writes the whole record set once, as a JSON array.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (license, schedule, derivation, export, output)
//! - [`adapters`] - Course database integration (PostgreSQL)
//! - [`domain`] - Records and error types
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use renewal_export::adapters::database::create_course_source;
//! use renewal_export::config::load_config;
//! use renewal_export::core::export::{ExportCoordinator, ExportOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("renewal.toml")?;
//!     let source = create_course_source(&config.database).await?;
//!
//!     let options = ExportOptions {
//!         date_filter: config.export.date_filter()?,
//!         lookup_override: config.export.lookup_override(),
//!     };
//!     let report = ExportCoordinator::new(source, options)?.execute_export().await?;
//!
//!     println!("Exported {} records", report.summary.records_emitted);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All library errors are [`domain::RenewalError`]. A row whose license is
//! unrecognizable is skipped and a failed schedule lookup counts as no
//! matches; any other bad field aborts the export with
//! [`RenewalError::Data`](domain::RenewalError::Data) before anything is written.
//!
//! ```rust,no_run
//! use renewal_export::domain::RenewalError;
//!
//! fn example() -> Result<(), RenewalError> {
//!     let config = renewal_export::config::load_config("renewal.toml")?;
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
