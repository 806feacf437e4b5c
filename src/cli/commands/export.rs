//! Export command implementation
//!
//! This module implements the `export` command: read the course database,
//! derive the completion records and write them as JSON.

use crate::adapters::database::create_course_source;
use crate::config::{load_config, RenewalConfig};
use crate::core::export::{export_to_file, ExportOptions, ExportSummary};
use crate::domain::RenewalError;
use clap::Args;
use std::path::Path;

/// Arguments for the export command
#[derive(Args, Debug, Default)]
pub struct ExportArgs {
    /// Only export enrollments for the course held on this date (YYYY-mm-dd)
    #[arg(short, long)]
    pub date: Option<String>,

    /// Demo mode - resolve every schedule lookup against the demo timestamp
    #[arg(long)]
    pub demo: bool,

    /// Output file for the JSON records
    #[arg(short, long)]
    pub out: Option<String>,

    /// Dry run mode - derive all records but do not write the output file
    #[arg(long)]
    pub dry_run: bool,
}

impl ExportArgs {
    /// Execute the export command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting export command");

        let mut config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(2);
            }
        };

        self.apply_overrides(&mut config);

        if let Err(e) = config.validate() {
            tracing::error!(error = %e, "Configuration validation failed");
            eprintln!("Configuration validation failed: {e}");
            return Ok(2);
        }

        let options = ExportOptions {
            date_filter: config.export.date_filter().map_err(anyhow::Error::msg)?,
            lookup_override: config.export.lookup_override(),
        };

        if let Some(key) = &options.lookup_override {
            println!("DEMO MODE - every course resolves against {key}");
        }
        if let Some(date) = &options.date_filter {
            println!("Course date: {date}");
        }
        if config.export.dry_run {
            tracing::info!("Dry run mode enabled - no output will be written");
            println!("DRY RUN MODE - No output file will be written");
        }
        println!();

        let source = match create_course_source(&config.database).await {
            Ok(s) => s,
            Err(e @ RenewalError::Configuration(_)) => {
                tracing::error!(error = %e, "Invalid database configuration");
                eprintln!("Invalid database configuration: {e}");
                return Ok(2);
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to connect to course database");
                eprintln!("Failed to connect to course database: {e}");
                return Ok(4);
            }
        };

        let output_path =
            (!config.export.dry_run).then(|| Path::new(config.export.output_path.as_str()));

        println!("Starting export...");
        let report = match export_to_file(source, options, output_path).await {
            Ok(r) => r,
            Err(e) => {
                tracing::error!(error = %e, "Export failed");
                eprintln!("Export failed: {e}");
                return Ok(5);
            }
        };

        print_summary(&report.summary);
        if config.export.dry_run {
            println!("Dry run complete, {} not written", config.export.output_path);
        } else {
            println!("Records written to {}", config.export.output_path);
        }

        Ok(0)
    }

    /// Apply command-line flags on top of the loaded configuration
    pub fn apply_overrides(&self, config: &mut RenewalConfig) {
        if let Some(date) = &self.date {
            tracing::info!(date = %date, "Overriding course date from CLI");
            config.export.date = Some(date.clone());
        }

        if self.demo {
            tracing::info!("Enabling demo mode from CLI");
            config.export.demo = true;
        }

        if let Some(out) = &self.out {
            tracing::info!(output_path = %out, "Overriding output path from CLI");
            config.export.output_path = out.clone();
        }

        if self.dry_run {
            tracing::info!("Enabling dry-run mode from CLI");
            config.export.dry_run = true;
        }
    }
}

fn print_summary(summary: &ExportSummary) {
    println!();
    println!("Export Summary:");
    println!("  Enrollments scanned: {}", summary.enrollments_scanned);
    println!("  Skipped (license): {}", summary.license_skips);
    println!("  Failed lookups: {}", summary.failed_lookups);
    println!("  No schedule match: {}", summary.schedule_misses);
    println!("  Records emitted: {}", summary.records_emitted);
    println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
    println!();
}
