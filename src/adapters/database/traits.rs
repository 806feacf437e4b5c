//! Course database abstraction traits
//!
//! This module defines the trait that course database adapters must implement
//! to feed the export pipeline.

use crate::domain::{EnrollmentRecord, Result, ScheduleEntry};
use async_trait::async_trait;
use chrono::NaiveDate;

/// Read access to the enrollment and course schedule tables
///
/// Every call is one query over one pooled connection; the connection is
/// returned to the pool when the call completes, on success or failure.
#[async_trait]
pub trait CourseSource: Send + Sync {
    /// Test the database connection
    ///
    /// # Errors
    ///
    /// Returns [`RenewalError::Connection`](crate::domain::RenewalError::Connection)
    /// if the database cannot be reached.
    async fn test_connection(&self) -> Result<()>;

    /// Fetch enrollment rows ordered by control number
    ///
    /// # Arguments
    ///
    /// * `course_date` - Only return enrollments for the course held at
    ///   midnight of this date
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be decoded.
    async fn fetch_enrollments(&self, course_date: Option<NaiveDate>)
        -> Result<Vec<EnrollmentRecord>>;

    /// Fetch the schedule rows whose course code equals `course`
    ///
    /// # Arguments
    ///
    /// * `course` - Course code, a `YYYY-mm-dd HH:MM:SS` timestamp string
    ///
    /// # Errors
    ///
    /// Returns an error if the key is malformed, the query fails, or a row
    /// cannot be decoded.
    async fn fetch_schedule(&self, course: &str) -> Result<Vec<ScheduleEntry>>;

    /// Human-readable description of the source for logs
    fn describe(&self) -> String;
}
