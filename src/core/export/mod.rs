//! Export orchestration
//!
//! - Export coordination over a [`CourseSource`](crate::adapters::database::CourseSource)
//! - Summary and reporting

pub mod coordinator;
pub mod summary;

pub use coordinator::{export_to_file, ExportCoordinator, ExportOptions};
pub use summary::{ExportReport, ExportSummary};
