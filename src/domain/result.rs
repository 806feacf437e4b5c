//! Result type alias for the exporter

use super::errors::RenewalError;

/// Result type alias for exporter operations
///
/// # Examples
///
/// ```
/// use renewal_export::domain::result::Result;
/// use renewal_export::domain::errors::RenewalError;
///
/// fn failing_function() -> Result<()> {
///     Err(RenewalError::Configuration("missing database section".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, RenewalError>;
