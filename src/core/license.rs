//! License number normalization
//!
//! Licenses are typed free-form into the legacy application ("TX-PE4211",
//! "PE42", "Lic#PE0012345"). Renewal Central expects `PE` followed by at least
//! seven digits.

use crate::domain::{RenewalError, Result};
use regex::Regex;

/// Width the digit group is zero-padded to
const LICENSE_DIGITS: usize = 7;

/// Result of normalizing one raw license field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LicenseOutcome {
    /// No license on file; the row passes through with a null licensee id
    Absent,
    /// Canonical `PE0000000` code
    Normalized(String),
    /// License present but unrecognizable; the row must be skipped
    Rejected(String),
}

impl LicenseOutcome {
    /// Licensee id to emit, or `None` when the row must be skipped
    ///
    /// The outer option is the skip signal, the inner one the nullable id.
    pub fn licensee_id(self) -> Option<Option<String>> {
        match self {
            LicenseOutcome::Absent => Some(None),
            LicenseOutcome::Normalized(code) => Some(Some(code)),
            LicenseOutcome::Rejected(_) => None,
        }
    }
}

/// Extracts the `PE<digits>` license number from raw license strings
#[derive(Debug, Clone)]
pub struct LicenseNormalizer {
    pattern: Regex,
}

impl LicenseNormalizer {
    /// Create a normalizer
    pub fn new() -> Result<Self> {
        // Greedy prefix: the last PE<digits> in the string wins.
        let pattern = Regex::new(r"^.*PE([0-9]+)").map_err(|e| {
            RenewalError::Configuration(format!("Invalid license pattern: {e}"))
        })?;
        Ok(Self { pattern })
    }

    /// Normalize one raw license field
    ///
    /// Digit groups shorter than seven are left-padded with zeros; longer
    /// groups are kept whole.
    pub fn normalize(&self, raw: Option<&str>) -> LicenseOutcome {
        let Some(raw) = raw else {
            return LicenseOutcome::Absent;
        };

        match self.pattern.captures(raw).and_then(|caps| caps.get(1)) {
            Some(digits) => LicenseOutcome::Normalized(format!(
                "PE{:0>width$}",
                digits.as_str(),
                width = LICENSE_DIGITS
            )),
            None => LicenseOutcome::Rejected(raw.to_string()),
        }
    }
}
