//! Export coordinator - main orchestrator for the export process
//!
//! Walks the enrollment table, joins each row with its schedule entries and
//! derives the upload records. Queries run one at a time.

use crate::adapters::database::CourseSource;
use crate::core::derive::{derive_record, DerivationInput};
use crate::core::export::summary::{ExportReport, ExportSummary};
use crate::core::license::{LicenseNormalizer, LicenseOutcome};
use crate::core::output::write_records;
use crate::core::schedule::{ScheduleLookup, ScheduleResolver};
use crate::domain::{RenewalError, Result};
use chrono::NaiveDate;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

/// Options for one export run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportOptions {
    /// Only export enrollments for the course held on this date
    pub date_filter: Option<NaiveDate>,

    /// Resolve every enrollment against this course key (demo mode)
    pub lookup_override: Option<String>,
}

/// Export coordinator
pub struct ExportCoordinator {
    source: Arc<dyn CourseSource + Send + Sync>,
    resolver: ScheduleResolver,
    normalizer: LicenseNormalizer,
    options: ExportOptions,
}

impl ExportCoordinator {
    /// Create a new export coordinator
    ///
    /// # Errors
    ///
    /// Returns an error if the license pattern cannot be compiled.
    pub fn new(
        source: Arc<dyn CourseSource + Send + Sync>,
        options: ExportOptions,
    ) -> Result<Self> {
        Ok(Self {
            resolver: ScheduleResolver::new(source.clone()),
            normalizer: LicenseNormalizer::new()?,
            source,
            options,
        })
    }

    /// Execute the export
    ///
    /// For each enrollment, in source order:
    /// 1. Normalizes the license; unrecognizable licenses skip the row
    /// 2. Resolves the course schedule; failed lookups count as no matches
    /// 3. Derives one record per schedule entry
    ///
    /// Records are neither deduplicated nor sorted.
    ///
    /// # Errors
    ///
    /// Returns an error if the enrollment query fails, or
    /// [`RenewalError::Data`] for the first enrollment whose fields cannot
    /// be derived.
    pub async fn execute_export(&self) -> Result<ExportReport> {
        let start_time = Instant::now();
        let mut summary = ExportSummary::new();
        let mut records = Vec::new();

        tracing::info!(
            source = %self.source.describe(),
            date_filter = ?self.options.date_filter,
            lookup_override = ?self.options.lookup_override,
            "Starting export process"
        );

        let enrollments = self
            .source
            .fetch_enrollments(self.options.date_filter)
            .await?;
        summary.enrollments_scanned = enrollments.len();

        for enrollment in &enrollments {
            let licensee_id = match self.normalizer.normalize(enrollment.license.as_deref()) {
                LicenseOutcome::Rejected(raw) => {
                    tracing::debug!(
                        control_number = enrollment.control_number,
                        license = %raw,
                        "Skipping enrollment with unrecognized license"
                    );
                    summary.license_skips += 1;
                    continue;
                }
                LicenseOutcome::Absent => None,
                LicenseOutcome::Normalized(code) => Some(code),
            };

            let lookup = self
                .resolver
                .resolve(&enrollment.course, self.options.lookup_override.as_deref())
                .await;

            match &lookup {
                ScheduleLookup::Failed { .. } => summary.failed_lookups += 1,
                ScheduleLookup::Matched(entries) if entries.is_empty() => {
                    tracing::debug!(
                        control_number = enrollment.control_number,
                        course = %enrollment.course,
                        "No schedule entries for enrollment"
                    );
                    summary.schedule_misses += 1;
                }
                ScheduleLookup::Matched(_) => {}
            }

            for entry in lookup.entries() {
                let input = DerivationInput::from_join(licensee_id.clone(), enrollment, entry);
                let record = derive_record(input).map_err(|e| {
                    tracing::error!(
                        control_number = enrollment.control_number,
                        course_id = entry.course_id,
                        error = %e,
                        "Failed to derive record"
                    );
                    RenewalError::data(enrollment.control_number.to_string(), e)
                })?;
                records.push(record);
            }
        }

        summary.records_emitted = records.len();
        let summary = summary.with_duration(start_time.elapsed());
        summary.log_summary();

        Ok(ExportReport { records, summary })
    }
}

/// Run an export and write its records to `output_path`
///
/// The file is written only after every record has been derived, so a failed
/// run leaves any previous export untouched. Pass `None` for a dry run.
///
/// # Errors
///
/// Returns the first export error, or an I/O error if the file cannot be
/// written.
pub async fn export_to_file(
    source: Arc<dyn CourseSource + Send + Sync>,
    options: ExportOptions,
    output_path: Option<&Path>,
) -> Result<ExportReport> {
    let report = ExportCoordinator::new(source, options)?
        .execute_export()
        .await?;

    if let Some(path) = output_path {
        write_records(path, &report.records)?;
    }

    Ok(report)
}
