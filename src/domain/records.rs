//! Course database records and the derived upload record
//!
//! Dates are kept as the `YYYY-mm-dd HH:MM:SS` strings the course database
//! renders, because the upload format passes them through verbatim.

use super::errors::DataError;
use serde::Serialize;
use std::fmt;

/// Hour count as stored in the course database
///
/// The legacy tables hold hours in loosely typed columns, so a value may come
/// back as a whole number, a fractional number, or free text.
#[derive(Debug, Clone, PartialEq)]
pub enum RawHours {
    /// Integral value
    Whole(i64),
    /// Floating point value
    Fractional(f64),
    /// Text value
    Text(String),
}

impl RawHours {
    /// Returns true when a schedule value should give way to the enrollment value
    ///
    /// Zero and empty text count as unset, the same as a missing value.
    pub fn is_unset(&self) -> bool {
        match self {
            RawHours::Whole(value) => *value == 0,
            RawHours::Fractional(value) => *value == 0.0,
            RawHours::Text(text) => text.is_empty(),
        }
    }

    /// Coerces the value to a whole number of hours
    ///
    /// Fractional values are truncated toward zero. Text must parse as an
    /// integer or a decimal number, surrounding whitespace ignored.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::InvalidHours`] for non-numeric or non-finite values.
    pub fn to_whole(&self) -> Result<i64, DataError> {
        match self {
            RawHours::Whole(value) => Ok(*value),
            RawHours::Fractional(value) => truncate(*value, &self.to_string()),
            RawHours::Text(text) => {
                let trimmed = text.trim();
                if let Ok(value) = trimmed.parse::<i64>() {
                    return Ok(value);
                }
                match trimmed.parse::<f64>() {
                    Ok(value) => truncate(value, text),
                    Err(_) => Err(DataError::InvalidHours(text.clone())),
                }
            }
        }
    }
}

fn truncate(value: f64, original: &str) -> Result<i64, DataError> {
    if !value.is_finite() || value.abs() >= i64::MAX as f64 {
        return Err(DataError::InvalidHours(original.to_string()));
    }
    Ok(value.trunc() as i64)
}

impl fmt::Display for RawHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawHours::Whole(value) => write!(f, "{value}"),
            RawHours::Fractional(value) => write!(f, "{value}"),
            RawHours::Text(text) => write!(f, "{text}"),
        }
    }
}

/// One `(date, hours)` session pair of an enrollment
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionAttendance {
    /// Session date
    pub date: Option<String>,

    /// Hours attended in the session
    pub hours: Option<RawHours>,
}

/// One row of the enrollment table (`COURSE`)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnrollmentRecord {
    /// Control number of the enrollment
    pub control_number: i64,

    /// Licensee name in `Last, First` form
    pub name: Option<String>,

    /// Licensee company
    pub company: Option<String>,

    /// License string as typed into the legacy application
    pub license: Option<String>,

    /// Course code; the course start timestamp
    pub course: String,

    /// Hours recorded on the enrollment
    pub hours: Option<RawHours>,

    /// Up to four attended sessions
    pub sessions: [SessionAttendance; 4],

    /// Instructor recorded on the enrollment
    pub instructor: Option<String>,

    /// Certificate ready to print
    pub ready_to_print: bool,

    /// Certificate issued
    pub certificate: bool,

    /// Certificate printed
    pub printed: bool,

    /// Enrollment fee paid
    pub paid: bool,
}

impl EnrollmentRecord {
    /// Date of the fourth session, used as the renewal date fallback
    pub fn fourth_session_date(&self) -> Option<&str> {
        self.sessions[3].date.as_deref()
    }
}

/// One row of the course schedule table (`COURSESKED`)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleEntry {
    /// Schedule row id
    pub course_id: i64,

    /// Course code the row is scheduled under
    pub course: String,

    /// Course title
    pub title: Option<String>,

    /// Course description (`comments` column)
    pub description: Option<String>,

    /// Instructor, doubling as the course type
    pub course_type: Option<String>,

    /// Credit hours of the course
    pub hours: Option<RawHours>,

    /// Up to four session dates
    pub session_dates: [Option<String>; 4],
}

impl ScheduleEntry {
    /// First session date; the course completion date
    pub fn completion_date(&self) -> Option<&str> {
        self.session_dates[0].as_deref()
    }

    /// Fourth session date; the license renewal date
    pub fn renewal_date(&self) -> Option<&str> {
        self.session_dates[3].as_deref()
    }
}

/// Course completion record in Renewal Central upload format
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedRecord {
    /// Normalized license code, or null when the licensee has none on file
    pub licensee_id: Option<String>,

    /// Licensee name in `First Last` form
    pub licensee_name: String,

    /// Course title
    pub course_title: Option<String>,

    /// Course description
    pub course_description: Option<String>,

    /// Credit hours
    pub course_hours: i64,

    /// Completion date, `YYYY-mm-dd HH:MM:SS`
    pub completion_date: String,

    /// Renewal cycle label, `YYYY-YYYY`
    pub cycle: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_hours_unset() {
        assert!(RawHours::Whole(0).is_unset());
        assert!(RawHours::Fractional(0.0).is_unset());
        assert!(RawHours::Text(String::new()).is_unset());
        assert!(!RawHours::Text("0".to_string()).is_unset());
        assert!(!RawHours::Whole(4).is_unset());
    }

    #[test]
    fn test_raw_hours_to_whole() {
        assert_eq!(RawHours::Whole(8).to_whole(), Ok(8));
        assert_eq!(RawHours::Fractional(3.75).to_whole(), Ok(3));
        assert_eq!(RawHours::Text(" 12 ".to_string()).to_whole(), Ok(12));
        assert_eq!(RawHours::Text("2.5".to_string()).to_whole(), Ok(2));
    }

    #[test]
    fn test_raw_hours_rejects_non_numeric() {
        assert_eq!(
            RawHours::Text("four".to_string()).to_whole(),
            Err(DataError::InvalidHours("four".to_string()))
        );
        assert!(RawHours::Fractional(f64::NAN).to_whole().is_err());
        assert!(RawHours::Fractional(f64::INFINITY).to_whole().is_err());
    }

    #[test]
    fn test_schedule_entry_dates() {
        let entry = ScheduleEntry {
            session_dates: [
                Some("2021-01-10 00:00:00".to_string()),
                None,
                None,
                Some("2023-06-01 00:00:00".to_string()),
            ],
            ..Default::default()
        };
        assert_eq!(entry.completion_date(), Some("2021-01-10 00:00:00"));
        assert_eq!(entry.renewal_date(), Some("2023-06-01 00:00:00"));
    }

    #[test]
    fn test_derived_record_field_order() {
        let record = DerivedRecord {
            licensee_id: Some("PE0000042".to_string()),
            licensee_name: "Jane Doe".to_string(),
            course_title: Some("Ethics".to_string()),
            course_description: None,
            course_hours: 4,
            completion_date: "2021-01-10 00:00:00".to_string(),
            cycle: "2021-2023".to_string(),
        };

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"licensee_id":"PE0000042","licensee_name":"Jane Doe","course_title":"Ethics","course_description":null,"course_hours":4,"completion_date":"2021-01-10 00:00:00","cycle":"2021-2023"}"#
        );
    }
}
