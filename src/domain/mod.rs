//! Domain models and types for the exporter.
//!
//! The domain layer provides:
//! - **Source records** ([`EnrollmentRecord`], [`ScheduleEntry`]) as read from
//!   the course database
//! - **The upload record** ([`DerivedRecord`]) serialized for Renewal Central
//! - **Error types** ([`RenewalError`], [`DataError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, RenewalError>`]:
//!
//! ```rust,no_run
//! use renewal_export::domain::Result;
//!
//! fn example() -> Result<()> {
//!     let config = renewal_export::config::load_config("renewal.toml")?;
//!     println!("Writing to {}", config.export.output_path);
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod records;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::{DataError, RenewalError};
pub use records::{DerivedRecord, EnrollmentRecord, RawHours, ScheduleEntry, SessionAttendance};
pub use result::Result;
