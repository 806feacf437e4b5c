//! Core business logic.
//!
//! # Modules
//!
//! - [`license`] - License number normalization
//! - [`schedule`] - Course schedule resolution, including demo-mode overrides
//! - [`derive`] - Upload record derivation
//! - [`export`] - Export orchestration and summary
//! - [`output`] - JSON output writer
//!
//! # Export Workflow
//!
//! 1. **Fetch**: Read enrollments, optionally filtered to one course date
//! 2. **Normalize**: Canonicalize the license; skip unrecognizable ones
//! 3. **Resolve**: Look up the schedule rows for the enrollment's course
//! 4. **Derive**: Build one record per schedule row
//! 5. **Write**: Serialize the full record set once derivation succeeded
//!
//! # Example
//!
//! ```rust,no_run
//! use renewal_export::adapters::database::create_course_source;
//! use renewal_export::config::load_config;
//! use renewal_export::core::export::{export_to_file, ExportOptions};
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("renewal.toml")?;
//! let source = create_course_source(&config.database).await?;
//!
//! let output = Path::new(&config.export.output_path);
//! let report = export_to_file(source, ExportOptions::default(), Some(output)).await?;
//! println!("Records: {}", report.summary.records_emitted);
//! # Ok(())
//! # }
//! ```

pub mod derive;
pub mod export;
pub mod license;
pub mod output;
pub mod schedule;
