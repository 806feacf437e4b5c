//! Record derivation
//!
//! Turns one enrollment joined with one schedule entry into the upload record:
//! name reordering, hour coercion, completion/renewal date fallbacks and the
//! renewal cycle label.

use crate::config::TIMESTAMP_FORMAT;
use crate::domain::{DataError, DerivedRecord, EnrollmentRecord, RawHours, ScheduleEntry};
use chrono::{Months, NaiveDateTime};

/// Length of a license renewal cycle
const CYCLE_YEARS: u32 = 2;

/// Fields feeding one derived record, fallbacks already applied
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DerivationInput<'a> {
    /// Normalized license code, or `None` when no license is on file
    pub licensee_id: Option<String>,
    /// Licensee name in `Last, First` form
    pub name: Option<&'a str>,
    /// Course title
    pub title: Option<&'a str>,
    /// Course description
    pub description: Option<&'a str>,
    /// Credit hours
    pub hours: Option<&'a RawHours>,
    /// Completion date
    pub completion_date: Option<&'a str>,
    /// Course type; accepted but not part of the upload format
    pub course_type: Option<&'a str>,
    /// Renewal date, derived from the completion date when absent
    pub renewal_date: Option<&'a str>,
}

impl<'a> DerivationInput<'a> {
    /// Join an enrollment with one of its schedule entries
    ///
    /// Hours, completion date and renewal date come from the schedule entry
    /// and fall back to the enrollment's hours, course code and fourth
    /// session date. Only the schedule value is checked: zero hours or an
    /// empty string there selects the enrollment value, which is taken as is.
    pub fn from_join(
        licensee_id: Option<String>,
        enrollment: &'a EnrollmentRecord,
        entry: &'a ScheduleEntry,
    ) -> Self {
        Self {
            licensee_id,
            name: enrollment.name.as_deref(),
            title: entry.title.as_deref(),
            description: entry.description.as_deref(),
            hours: set_hours(entry.hours.as_ref()).or(enrollment.hours.as_ref()),
            completion_date: non_blank(entry.completion_date())
                .or(Some(enrollment.course.as_str())),
            course_type: entry.course_type.as_deref(),
            renewal_date: non_blank(entry.renewal_date()).or(enrollment.fourth_session_date()),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn set_hours(value: Option<&RawHours>) -> Option<&RawHours> {
    value.filter(|h| !h.is_unset())
}

/// Build the upload record
///
/// # Errors
///
/// Returns a [`DataError`] when the name is missing or malformed, the hours
/// are missing or non-numeric, or a date is missing or unparseable.
pub fn derive_record(input: DerivationInput<'_>) -> Result<DerivedRecord, DataError> {
    let licensee_name = split_name(input.name.ok_or(DataError::MissingName)?)?;
    let course_hours = input.hours.ok_or(DataError::MissingHours)?.to_whole()?;
    let completion_date = input
        .completion_date
        .ok_or(DataError::MissingCompletionDate)?;

    let renewal_date = match non_blank(input.renewal_date) {
        Some(date) => date.to_string(),
        None => add_two_years(completion_date)?,
    };
    let cycle = cycle_label(&renewal_date)?;

    tracing::trace!(
        licensee_id = ?input.licensee_id,
        course_type = ?input.course_type,
        renewal_date = %renewal_date,
        cycle = %cycle,
        "Derived record"
    );

    Ok(DerivedRecord {
        licensee_id: input.licensee_id,
        licensee_name,
        course_title: input.title.map(str::to_string),
        course_description: input.description.map(str::to_string),
        course_hours,
        completion_date: completion_date.to_string(),
        cycle,
    })
}

/// Reorder a `Last, First` name as `First Last`
///
/// # Errors
///
/// Returns [`DataError::MalformedName`] unless the name has exactly one comma.
pub fn split_name(name: &str) -> Result<String, DataError> {
    let mut parts = name.split(',');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(last), Some(first), None) => Ok(format!("{} {}", first.trim(), last.trim())),
        _ => Err(DataError::MalformedName(name.to_string())),
    }
}

/// Completion date plus one renewal cycle, same month, day and time of day
///
/// February 29 lands on February 28 when the target year is not a leap year.
///
/// # Errors
///
/// Returns [`DataError::InvalidDate`] if the date is not `YYYY-mm-dd HH:MM:SS`.
pub fn add_two_years(completion_date: &str) -> Result<String, DataError> {
    let invalid = || DataError::InvalidDate(completion_date.to_string());

    NaiveDateTime::parse_from_str(completion_date, TIMESTAMP_FORMAT)
        .map_err(|_| invalid())?
        .checked_add_months(Months::new(CYCLE_YEARS * 12))
        .map(|renewal| renewal.format(TIMESTAMP_FORMAT).to_string())
        .ok_or_else(invalid)
}

/// Renewal cycle label for a renewal date, e.g. `2021-2023` for `2023-06-01 ...`
///
/// Renewal Central keys cycles on the leading `YYYY-` of the date string, so
/// the year is read from the first five characters (four digits and a
/// separator) rather than from a parsed date. The end year is echoed as
/// written; the start year is two less, zero-padded to four digits.
///
/// # Errors
///
/// Returns [`DataError::InvalidDate`] if the string does not start with four
/// digits followed by a non-digit separator, or the year is below 2.
pub fn cycle_label(renewal_date: &str) -> Result<String, DataError> {
    let invalid = || DataError::InvalidDate(renewal_date.to_string());

    let prefix = renewal_date.get(..5).ok_or_else(invalid)?;
    let (year_text, separator) = prefix.split_at(4);
    if !year_text.bytes().all(|b| b.is_ascii_digit())
        || separator.bytes().any(|b| b.is_ascii_digit())
    {
        return Err(invalid());
    }

    let year: u32 = year_text.parse().map_err(|_| invalid())?;
    let start = year.checked_sub(CYCLE_YEARS).ok_or_else(invalid)?;

    Ok(format!("{start:04}-{year_text}"))
}
