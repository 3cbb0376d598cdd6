use async_trait::async_trait;

use super::performance_model::{NewPerformance, Performance, PerformanceHistory};
use crate::errors::Result;

/// Persistence contract for performance samples and quiz history.
///
/// History rows are written together with the tutor session they grade, see
/// [`crate::tutor::TutorRepositoryTrait::complete_quiz`].
#[async_trait]
pub trait PerformanceRepositoryTrait: Send + Sync {
    async fn record(&self, new_performance: NewPerformance) -> Result<Performance>;

    /// Most recent sample for (user, subject), if any.
    fn latest_for_subject(&self, user_id: &str, subject: &str) -> Result<Option<Performance>>;

    /// Newest samples first, at most `limit`.
    fn list_recent_performances(&self, user_id: &str, limit: i64) -> Result<Vec<Performance>>;

    /// Quiz history, newest first.
    fn list_history(
        &self,
        user_id: &str,
        subject: Option<&str>,
        limit: Option<i64>,
    ) -> Result<Vec<PerformanceHistory>>;
}
