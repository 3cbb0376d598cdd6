use async_trait::async_trait;

use super::boosters_model::{BoosterRequest, NewPerformanceBooster, PerformanceBooster};
use crate::errors::Result;

/// Persistence contract for boosters. Boosters are immutable once stored.
#[async_trait]
pub trait BoosterRepositoryTrait: Send + Sync {
    async fn create(&self, new_booster: NewPerformanceBooster) -> Result<PerformanceBooster>;

    fn get_by_id(&self, booster_id: &str) -> Result<PerformanceBooster>;

    /// Boosters of a user, newest first.
    fn list_for_user(&self, user_id: &str) -> Result<Vec<PerformanceBooster>>;
}

#[async_trait]
pub trait BoosterServiceTrait: Send + Sync {
    async fn create_booster(&self, request: BoosterRequest) -> Result<PerformanceBooster>;

    fn get_booster(&self, booster_id: &str) -> Result<PerformanceBooster>;

    fn list_boosters(&self, user_id: &str) -> Result<Vec<PerformanceBooster>>;
}
