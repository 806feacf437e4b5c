//! Course schedule resolution
//!
//! Looks up the schedule rows for an enrollment's course code. Demo runs
//! resolve every enrollment against one fixed key instead.

use crate::adapters::database::CourseSource;
use crate::domain::ScheduleEntry;
use std::sync::Arc;

/// Result of a schedule lookup
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleLookup {
    /// The query ran; zero or more rows matched, in query order
    Matched(Vec<ScheduleEntry>),

    /// The query could not be run or decoded
    Failed {
        /// Key that was looked up
        key: String,
        /// Error reported by the source
        reason: String,
    },
}

impl ScheduleLookup {
    /// Entries to derive records from; a failed lookup yields none
    pub fn entries(&self) -> &[ScheduleEntry] {
        match self {
            ScheduleLookup::Matched(entries) => entries,
            ScheduleLookup::Failed { .. } => &[],
        }
    }

    /// Whether the lookup failed
    pub fn is_failed(&self) -> bool {
        matches!(self, ScheduleLookup::Failed { .. })
    }
}

/// Resolves course codes to schedule entries
pub struct ScheduleResolver {
    source: Arc<dyn CourseSource + Send + Sync>,
}

impl ScheduleResolver {
    /// Create a resolver over a course source
    pub fn new(source: Arc<dyn CourseSource + Send + Sync>) -> Self {
        Self { source }
    }

    /// Resolve the schedule rows for a course code
    ///
    /// When `lookup_override` is set it is used as the key instead of
    /// `course_code`. Source errors never propagate; they are logged and
    /// returned as [`ScheduleLookup::Failed`].
    pub async fn resolve(
        &self,
        course_code: &str,
        lookup_override: Option<&str>,
    ) -> ScheduleLookup {
        let key = lookup_override.unwrap_or(course_code);

        match self.source.fetch_schedule(key).await {
            Ok(entries) => {
                tracing::trace!(key = %key, matches = entries.len(), "Resolved schedule");
                ScheduleLookup::Matched(entries)
            }
            Err(e) => {
                tracing::warn!(
                    key = %key,
                    course = %course_code,
                    error = %e,
                    "Schedule lookup failed, treating as no matches"
                );
                ScheduleLookup::Failed {
                    key: key.to_string(),
                    reason: e.to_string(),
                }
            }
        }
    }
}
