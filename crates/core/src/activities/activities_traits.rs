use async_trait::async_trait;

use super::activities_model::{Activity, NewActivity};
use crate::errors::Result;

/// Persistence contract for the activity log.
#[async_trait]
pub trait ActivityRepositoryTrait: Send + Sync {
    /// Appends one entry for `user_id`.
    async fn append(&self, user_id: &str, activity: NewActivity) -> Result<Activity>;

    /// Newest entries first, at most `limit`.
    fn list_recent(&self, user_id: &str, limit: i64) -> Result<Vec<Activity>>;
}
