use async_trait::async_trait;

use super::practice_model::{AdaptivePractice, AdaptivePracticeUpdate, NewAdaptivePractice};
use crate::errors::Result;

#[async_trait]
pub trait PracticeRepositoryTrait: Send + Sync {
    async fn create(&self, new_practice: NewAdaptivePractice) -> Result<AdaptivePractice>;

    fn get_by_id(&self, practice_id: &str) -> Result<AdaptivePractice>;

    /// Practices of a user, newest first, optionally restricted to one subject.
    fn list_for_user(&self, user_id: &str, subject: Option<&str>)
        -> Result<Vec<AdaptivePractice>>;

    async fn update(
        &self,
        practice_id: &str,
        changes: AdaptivePracticeUpdate,
    ) -> Result<AdaptivePractice>;

    /// Returns the number of deleted rows.
    async fn delete(&self, practice_id: &str) -> Result<usize>;
}

#[async_trait]
pub trait PracticeServiceTrait: Send + Sync {
    fn list_practices(&self, user_id: &str, subject: Option<&str>)
        -> Result<Vec<AdaptivePractice>>;

    fn get_practice(&self, practice_id: &str) -> Result<AdaptivePractice>;

    async fn create_practice(&self, new_practice: NewAdaptivePractice) -> Result<AdaptivePractice>;

    async fn update_practice(
        &self,
        practice_id: &str,
        changes: AdaptivePracticeUpdate,
    ) -> Result<AdaptivePractice>;

    async fn delete_practice(&self, practice_id: &str) -> Result<()>;

    /// Picks the level from the latest subject score and generates material for it.
    async fn generate_practice(&self, user_id: &str, subject: &str) -> Result<AdaptivePractice>;
}
