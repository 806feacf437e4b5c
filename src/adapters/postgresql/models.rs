//! PostgreSQL row models
//!
//! Mirrors of the legacy `COURSE` and `COURSESKED` tables, bound by column
//! name. Expected column types:
//!
//! | column                          | type               |
//! |---------------------------------|--------------------|
//! | `control_nbr`, `courseid`       | `integer`          |
//! | `course`, `date1..4`, `day1..4` | `timestamp`        |
//! | `hours`, `hr1..4`               | `double precision` |
//! | flags (`paid`, `printed`, ...)  | `boolean`          |
//! | everything else                 | `text`             |
//!
//! Hour columns migrated as-is from the legacy database may still be
//! `integer`, `real` or `text`; they are decoded by their actual type into
//! [`RawHours`], and text values are checked when the record is derived.

use crate::config::TIMESTAMP_FORMAT;
use crate::domain::{
    EnrollmentRecord, RawHours, RenewalError, Result, ScheduleEntry, SessionAttendance,
};
use chrono::NaiveDateTime;
use tokio_postgres::types::{FromSql, Type};
use tokio_postgres::Row;

/// Column list selected from the enrollment table
pub const ENROLLMENT_COLUMNS: &str = "control_nbr, name, company, license, course, hours, \
     date1, hr1, date2, hr2, date3, hr3, date4, hr4, \
     instructor, ready_to_print, certificate, printed, paid";

/// Column list selected from the schedule table
pub const SCHEDULE_COLUMNS: &str =
    "courseid, course, hours, day1, day2, day3, day4, title, comments, instructor";

/// Enrollment row as stored in PostgreSQL
#[derive(Debug, Clone, PartialEq)]
pub struct PostgreSQLEnrollment {
    pub control_nbr: i32,
    pub name: Option<String>,
    pub company: Option<String>,
    pub license: Option<String>,
    pub course: Option<NaiveDateTime>,
    pub hours: Option<RawHours>,
    pub sessions: [(Option<NaiveDateTime>, Option<RawHours>); 4],
    pub instructor: Option<String>,
    pub ready_to_print: Option<bool>,
    pub certificate: Option<bool>,
    pub printed: Option<bool>,
    pub paid: Option<bool>,
}

impl PostgreSQLEnrollment {
    /// Decode a row selected with [`ENROLLMENT_COLUMNS`]
    ///
    /// # Errors
    ///
    /// Returns an error if a column is missing or has an unexpected type.
    pub fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            control_nbr: column(row, "control_nbr")?,
            name: column(row, "name")?,
            company: column(row, "company")?,
            license: column(row, "license")?,
            course: column(row, "course")?,
            hours: hours_column(row, "hours")?,
            sessions: [
                (column(row, "date1")?, hours_column(row, "hr1")?),
                (column(row, "date2")?, hours_column(row, "hr2")?),
                (column(row, "date3")?, hours_column(row, "hr3")?),
                (column(row, "date4")?, hours_column(row, "hr4")?),
            ],
            instructor: column(row, "instructor")?,
            ready_to_print: column(row, "ready_to_print")?,
            certificate: column(row, "certificate")?,
            printed: column(row, "printed")?,
            paid: column(row, "paid")?,
        })
    }

    /// Convert to the domain record
    pub fn to_domain(&self) -> EnrollmentRecord {
        EnrollmentRecord {
            control_number: i64::from(self.control_nbr),
            name: self.name.clone(),
            company: self.company.clone(),
            license: self.license.clone(),
            course: self.course.map(format_timestamp).unwrap_or_default(),
            hours: self.hours.clone(),
            sessions: self.sessions.clone().map(|(date, hours)| SessionAttendance {
                date: date.map(format_timestamp),
                hours,
            }),
            instructor: self.instructor.clone(),
            ready_to_print: self.ready_to_print.unwrap_or(false),
            certificate: self.certificate.unwrap_or(false),
            printed: self.printed.unwrap_or(false),
            paid: self.paid.unwrap_or(false),
        }
    }
}

/// Schedule row as stored in PostgreSQL
#[derive(Debug, Clone, PartialEq)]
pub struct PostgreSQLScheduleEntry {
    pub courseid: i32,
    pub course: Option<NaiveDateTime>,
    pub hours: Option<RawHours>,
    pub days: [Option<NaiveDateTime>; 4],
    pub title: Option<String>,
    pub comments: Option<String>,
    pub instructor: Option<String>,
}

impl PostgreSQLScheduleEntry {
    /// Decode a row selected with [`SCHEDULE_COLUMNS`]
    ///
    /// # Errors
    ///
    /// Returns an error if a column is missing or has an unexpected type.
    pub fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            courseid: column(row, "courseid")?,
            course: column(row, "course")?,
            hours: hours_column(row, "hours")?,
            days: [
                column(row, "day1")?,
                column(row, "day2")?,
                column(row, "day3")?,
                column(row, "day4")?,
            ],
            title: column(row, "title")?,
            comments: column(row, "comments")?,
            instructor: column(row, "instructor")?,
        })
    }

    /// Convert to the domain record
    pub fn to_domain(&self) -> ScheduleEntry {
        ScheduleEntry {
            course_id: i64::from(self.courseid),
            course: self.course.map(format_timestamp).unwrap_or_default(),
            title: self.title.clone(),
            description: self.comments.clone(),
            course_type: self.instructor.clone(),
            hours: self.hours.clone(),
            session_dates: self.days.map(|day| day.map(format_timestamp)),
        }
    }
}

/// Parse a course key into the timestamp it is stored as
///
/// # Errors
///
/// Returns a database error when the key is not `YYYY-mm-dd HH:MM:SS`.
pub fn parse_course_key(course: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(course, TIMESTAMP_FORMAT)
        .map_err(|e| RenewalError::Database(format!("Malformed course key '{course}': {e}")))
}

fn format_timestamp(value: NaiveDateTime) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}

fn column<'a, T: FromSql<'a>>(row: &'a Row, name: &str) -> Result<T> {
    row.try_get(name)
        .map_err(|e| RenewalError::Database(format!("Failed to read column '{name}': {e}")))
}

/// Storage class of an hour column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HoursEncoding {
    Small,
    Integer,
    BigInteger,
    Real,
    Double,
    Text,
}

impl HoursEncoding {
    fn of(ty: &Type) -> Option<Self> {
        [
            (Type::INT2, Self::Small),
            (Type::INT4, Self::Integer),
            (Type::INT8, Self::BigInteger),
            (Type::FLOAT4, Self::Real),
            (Type::FLOAT8, Self::Double),
            (Type::TEXT, Self::Text),
            (Type::VARCHAR, Self::Text),
            (Type::BPCHAR, Self::Text),
        ]
        .into_iter()
        .find(|(candidate, _)| candidate == ty)
        .map(|(_, encoding)| encoding)
    }
}

fn hours_column(row: &Row, name: &str) -> Result<Option<RawHours>> {
    let ty = row
        .columns()
        .iter()
        .find(|c| c.name() == name)
        .map(|c| c.type_())
        .ok_or_else(|| RenewalError::Database(format!("Missing column '{name}'")))?;

    let encoding = HoursEncoding::of(ty).ok_or_else(|| {
        RenewalError::Database(format!("Unsupported type '{ty}' for hours column '{name}'"))
    })?;

    Ok(match encoding {
        HoursEncoding::Small => {
            column::<Option<i16>>(row, name)?.map(|v| RawHours::Whole(v.into()))
        }
        HoursEncoding::Integer => {
            column::<Option<i32>>(row, name)?.map(|v| RawHours::Whole(v.into()))
        }
        HoursEncoding::BigInteger => column::<Option<i64>>(row, name)?.map(RawHours::Whole),
        HoursEncoding::Real => {
            column::<Option<f32>>(row, name)?.map(|v| RawHours::Fractional(v.into()))
        }
        HoursEncoding::Double => column::<Option<f64>>(row, name)?.map(RawHours::Fractional),
        HoursEncoding::Text => column::<Option<String>>(row, name)?.map(RawHours::Text),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(year: i32, month: u32, day: u32) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(year, month, day).and_then(|d| d.and_hms_opt(0, 0, 0))
    }

    #[test]
    fn test_enrollment_to_domain() {
        let row = PostgreSQLEnrollment {
            control_nbr: 1042,
            name: Some("Doe, Jane".to_string()),
            company: None,
            license: Some("ABCPE42".to_string()),
            course: at(2021, 1, 10),
            hours: Some(RawHours::Fractional(4.0)),
            sessions: [
                (at(2021, 1, 10), Some(RawHours::Text("4".to_string()))),
                (None, None),
                (None, None),
                (at(2023, 1, 10), None),
            ],
            instructor: Some("Smith".to_string()),
            ready_to_print: Some(true),
            certificate: None,
            printed: Some(false),
            paid: Some(true),
        };

        let record = row.to_domain();
        assert_eq!(record.control_number, 1042);
        assert_eq!(record.course, "2021-01-10 00:00:00");
        assert_eq!(record.hours, Some(RawHours::Fractional(4.0)));
        assert_eq!(
            record.sessions[0].hours,
            Some(RawHours::Text("4".to_string()))
        );
        assert_eq!(record.fourth_session_date(), Some("2023-01-10 00:00:00"));
        assert!(record.ready_to_print);
        assert!(!record.certificate);
        assert!(record.paid);
    }

    #[test]
    fn test_schedule_entry_to_domain() {
        let row = PostgreSQLScheduleEntry {
            courseid: 7,
            course: at(2005, 7, 26),
            hours: None,
            days: [at(2005, 7, 26), None, None, None],
            title: Some("Ethics".to_string()),
            comments: Some("Annual ethics module".to_string()),
            instructor: Some("Online".to_string()),
        };

        let entry = row.to_domain();
        assert_eq!(entry.course, "2005-07-26 00:00:00");
        assert_eq!(entry.completion_date(), Some("2005-07-26 00:00:00"));
        assert_eq!(entry.renewal_date(), None);
        assert_eq!(entry.description.as_deref(), Some("Annual ethics module"));
        assert_eq!(entry.course_type.as_deref(), Some("Online"));
        assert_eq!(entry.hours, None);
    }

    #[test]
    fn test_hours_encoding_by_column_type() {
        assert_eq!(HoursEncoding::of(&Type::FLOAT8), Some(HoursEncoding::Double));
        assert_eq!(HoursEncoding::of(&Type::FLOAT4), Some(HoursEncoding::Real));
        assert_eq!(HoursEncoding::of(&Type::INT4), Some(HoursEncoding::Integer));
        assert_eq!(HoursEncoding::of(&Type::TEXT), Some(HoursEncoding::Text));
        assert_eq!(HoursEncoding::of(&Type::VARCHAR), Some(HoursEncoding::Text));
        assert_eq!(HoursEncoding::of(&Type::BOOL), None);
        assert_eq!(HoursEncoding::of(&Type::NUMERIC), None);
    }

    #[test]
    fn test_text_hours_reach_derivation() {
        let row = PostgreSQLScheduleEntry {
            courseid: 9,
            course: at(2021, 1, 10),
            hours: Some(RawHours::Text("four".to_string())),
            days: [at(2021, 1, 10), None, None, None],
            title: None,
            comments: None,
            instructor: None,
        };

        let entry = row.to_domain();
        assert_eq!(
            entry.hours.as_ref().map(RawHours::to_whole),
            Some(Err(crate::domain::DataError::InvalidHours("four".to_string())))
        );
    }

    #[test]
    fn test_parse_course_key() {
        assert_eq!(parse_course_key("2005-07-26 00:00:00").ok(), at(2005, 7, 26));
        assert!(matches!(
            parse_course_key("C100"),
            Err(RenewalError::Database(_))
        ));
    }
}
