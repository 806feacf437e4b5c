//! PostgreSQL adapter implementing the course source trait

use crate::adapters::database::traits::CourseSource;
use crate::adapters::postgresql::client::PostgreSQLClient;
use crate::adapters::postgresql::models::{
    parse_course_key, PostgreSQLEnrollment, PostgreSQLScheduleEntry, ENROLLMENT_COLUMNS,
    SCHEDULE_COLUMNS,
};
use crate::domain::{EnrollmentRecord, Result, ScheduleEntry};
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use std::sync::Arc;

/// PostgreSQL implementation of [`CourseSource`]
///
/// Table names come from validated configuration and are interpolated into
/// the SQL; every value is bound as a parameter.
pub struct PostgreSQLAdapter {
    client: Arc<PostgreSQLClient>,
}

impl PostgreSQLAdapter {
    /// Create a new PostgreSQL adapter
    pub fn new(client: PostgreSQLClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    fn enrollment_query(&self, filtered: bool) -> String {
        let mut query = format!(
            "SELECT {} FROM {}",
            ENROLLMENT_COLUMNS,
            self.client.enrollment_table()
        );
        if filtered {
            query.push_str(" WHERE course = $1");
        }
        query.push_str(" ORDER BY control_nbr");
        query
    }

    fn schedule_query(&self) -> String {
        format!(
            "SELECT {} FROM {} WHERE course = $1 ORDER BY courseid",
            SCHEDULE_COLUMNS,
            self.client.schedule_table()
        )
    }
}

#[async_trait]
impl CourseSource for PostgreSQLAdapter {
    async fn test_connection(&self) -> Result<()> {
        self.client.test_connection().await
    }

    async fn fetch_enrollments(
        &self,
        course_date: Option<NaiveDate>,
    ) -> Result<Vec<EnrollmentRecord>> {
        let rows = match course_date {
            Some(date) => {
                let course = date.and_time(NaiveTime::MIN);
                self.client
                    .query(&self.enrollment_query(true), &[&course])
                    .await?
            }
            None => self.client.query(&self.enrollment_query(false), &[]).await?,
        };

        tracing::debug!(
            rows = rows.len(),
            course_date = ?course_date,
            "Fetched enrollment rows"
        );

        rows.iter()
            .map(|row| PostgreSQLEnrollment::from_row(row).map(|r| r.to_domain()))
            .collect()
    }

    async fn fetch_schedule(&self, course: &str) -> Result<Vec<ScheduleEntry>> {
        let key = parse_course_key(course)?;
        let rows = self.client.query(&self.schedule_query(), &[&key]).await?;

        tracing::trace!(course = %course, rows = rows.len(), "Fetched schedule rows");

        rows.iter()
            .map(|row| PostgreSQLScheduleEntry::from_row(row).map(|r| r.to_domain()))
            .collect()
    }

    fn describe(&self) -> String {
        self.client.connection_string_safe()
    }
}
