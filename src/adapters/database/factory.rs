//! Course source factory
//!
//! Builds the course database adapter from configuration.

use crate::adapters::database::traits::CourseSource;
use crate::adapters::postgresql::adapter::PostgreSQLAdapter;
use crate::adapters::postgresql::client::PostgreSQLClient;
use crate::config::schema::DatabaseConfig;
use crate::domain::Result;
use std::sync::Arc;

/// Create the course source and verify it is reachable
///
/// # Errors
///
/// Returns a configuration error for an unusable connection string and a
/// connection error if the database cannot be reached.
pub async fn create_course_source(
    config: &DatabaseConfig,
) -> Result<Arc<dyn CourseSource + Send + Sync>> {
    tracing::info!(
        enrollment_table = %config.enrollment_table,
        schedule_table = %config.schedule_table,
        "Creating PostgreSQL course source"
    );

    let client = PostgreSQLClient::new(config.clone())?;
    let adapter = PostgreSQLAdapter::new(client);

    adapter.test_connection().await?;

    Ok(Arc::new(adapter) as Arc<dyn CourseSource + Send + Sync>)
}
