//! Export summary and reporting
//!
//! This module defines structures for tracking and reporting export results.

use crate::domain::DerivedRecord;
use std::time::Duration;

/// Summary of an export operation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportSummary {
    /// Enrollment rows read from the source
    pub enrollments_scanned: usize,

    /// Rows skipped because the license did not match the expected format
    pub license_skips: usize,

    /// Schedule lookups that failed and were treated as no matches
    pub failed_lookups: usize,

    /// Enrollments whose schedule lookup matched no rows
    pub schedule_misses: usize,

    /// Records emitted
    pub records_emitted: usize,

    /// Duration of the export
    pub duration: Duration,
}

impl ExportSummary {
    /// Create a new empty export summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Whether every enrollment was resolved without a degraded lookup
    pub fn is_clean(&self) -> bool {
        self.failed_lookups == 0
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            enrollments_scanned = self.enrollments_scanned,
            license_skips = self.license_skips,
            failed_lookups = self.failed_lookups,
            schedule_misses = self.schedule_misses,
            records_emitted = self.records_emitted,
            duration_ms = self.duration.as_millis() as u64,
            "Export completed"
        );

        if !self.is_clean() {
            tracing::warn!(
                failed_lookups = self.failed_lookups,
                "Export completed with failed schedule lookups"
            );
        }
    }
}

/// Records produced by an export together with its summary
#[derive(Debug, Clone, Default)]
pub struct ExportReport {
    /// Derived records in emission order
    pub records: Vec<DerivedRecord>,

    /// Counters for the run
    pub summary: ExportSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_summary_is_empty() {
        let summary = ExportSummary::new();
        assert_eq!(summary.enrollments_scanned, 0);
        assert_eq!(summary.records_emitted, 0);
        assert_eq!(summary.duration, Duration::ZERO);
        assert!(summary.is_clean());
    }

    #[test]
    fn test_with_duration() {
        let summary = ExportSummary::new().with_duration(Duration::from_millis(1500));
        assert_eq!(summary.duration, Duration::from_millis(1500));
    }

    #[test]
    fn test_failed_lookups_are_not_clean() {
        let summary = ExportSummary {
            failed_lookups: 1,
            ..Default::default()
        };
        assert!(!summary.is_clean());
    }
}
