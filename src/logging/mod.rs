//! Logging and observability
//!
//! Structured logging through `tracing`:
//! - Console output filtered by the configured level or `RUST_LOG`
//! - Optional JSON log file with daily, hourly or no rotation
//!
//! # Example
//!
//! ```no_run
//! use renewal_export::logging::init_logging;
//! use renewal_export::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use renewal_export::log_error_with_context;
/// use renewal_export::domain::RenewalError;
///
/// let error = RenewalError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
