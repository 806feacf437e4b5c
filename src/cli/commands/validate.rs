//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the configuration file without touching the database.

use crate::config::{load_config, redact_connection_string};
use clap::Args;
use secrecy::ExposeSecret;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    ///
    /// Loading already validates every section, so a loaded configuration
    /// is a valid one.
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("Validating configuration file: {config_path}");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("Configuration is invalid");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        println!("Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!(
            "  Database: {}",
            redact_connection_string(config.database.connection_string.expose_secret().as_str())
        );
        println!("  SSL Mode: {}", config.database.ssl_mode);
        println!("  Enrollment Table: {}", config.database.enrollment_table);
        println!("  Schedule Table: {}", config.database.schedule_table);
        println!("  Output Path: {}", config.export.output_path);
        println!(
            "  Course Date: {}",
            config.export.date.as_deref().unwrap_or("all")
        );
        if config.export.demo {
            println!("  Demo Mode: on ({})", config.export.demo_timestamp);
        }
        println!("  Dry Run: {}", config.export.dry_run);
        println!();
        Ok(0)
    }
}
