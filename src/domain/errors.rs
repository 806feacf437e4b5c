//! Domain error types
//!
//! This module defines the error hierarchy for the exporter. Source rows that
//! violate the upstream data contract surface as [`DataError`] and abort the
//! run; everything else is a [`RenewalError`] variant.

use thiserror::Error;

/// Main exporter error type
///
/// This is the primary error type used throughout the application.
#[derive(Debug, Error)]
pub enum RenewalError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Course database could not be reached
    #[error("Connection error: {0}")]
    Connection(String),

    /// Query or driver level failures
    #[error("Database error: {0}")]
    Database(String),

    /// An enrollment row violated the upstream data contract
    #[error("Invalid data in enrollment {control_number}: {source}")]
    Data {
        /// Control number of the offending enrollment row
        control_number: String,

        /// What was wrong with the row
        #[source]
        source: DataError,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Upstream data contract violations
///
/// Any of these makes the produced record unusable downstream, so the export
/// stops instead of emitting a partial file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    /// Licensee name is missing
    #[error("licensee name is missing")]
    MissingName,

    /// Licensee name does not have exactly one comma
    #[error("licensee name '{0}' is not in 'Last, First' form")]
    MalformedName(String),

    /// Neither the schedule nor the enrollment carries an hour count
    #[error("course hours are missing")]
    MissingHours,

    /// Hour count is not numeric
    #[error("course hours '{0}' are not numeric")]
    InvalidHours(String),

    /// Neither the schedule nor the enrollment carries a completion date
    #[error("completion date is missing")]
    MissingCompletionDate,

    /// Date string does not follow `YYYY-mm-dd HH:MM:SS`
    #[error("date '{0}' is not in 'YYYY-mm-dd HH:MM:SS' form")]
    InvalidDate(String),
}

impl RenewalError {
    /// Wraps a data error with the control number of the enrollment it came from
    pub fn data(control_number: impl Into<String>, source: DataError) -> Self {
        RenewalError::Data {
            control_number: control_number.into(),
            source,
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for RenewalError {
    fn from(err: std::io::Error) -> Self {
        RenewalError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for RenewalError {
    fn from(err: serde_json::Error) -> Self {
        RenewalError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for RenewalError {
    fn from(err: toml::de::Error) -> Self {
        RenewalError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renewal_error_display() {
        let err = RenewalError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_data_error_carries_control_number() {
        let err = RenewalError::data("1042", DataError::MalformedName("Smith John".to_string()));
        assert_eq!(
            err.to_string(),
            "Invalid data in enrollment 1042: licensee name 'Smith John' is not in 'Last, First' form"
        );
        assert!(matches!(
            err,
            RenewalError::Data {
                source: DataError::MalformedName(_),
                ..
            }
        ));
    }

    #[test]
    fn test_data_error_is_source() {
        use std::error::Error as _;

        let err = RenewalError::data("7", DataError::MissingHours);
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("course hours are missing"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: RenewalError = io_err.into();
        assert!(matches!(err, RenewalError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: RenewalError = json_err.into();
        assert!(matches!(err, RenewalError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: RenewalError = toml_err.into();
        assert!(matches!(err, RenewalError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }
}
