use log::{debug, info};
use std::sync::Arc;

use super::practice_model::{AdaptivePractice, AdaptivePracticeUpdate, NewAdaptivePractice};
use super::practice_traits::{PracticeRepositoryTrait, PracticeServiceTrait};
use crate::errors::{Error, Result};
use crate::generation::ContentGeneratorTrait;
use crate::grading::classify_practice_level;
use crate::performance::PerformanceRepositoryTrait;
use crate::subjects::Subject;
use crate::users::UserRepositoryTrait;

pub struct PracticeService {
    repository: Arc<dyn PracticeRepositoryTrait>,
    performance_repository: Arc<dyn PerformanceRepositoryTrait>,
    user_repository: Arc<dyn UserRepositoryTrait>,
    generator: Arc<dyn ContentGeneratorTrait>,
}

impl PracticeService {
    pub fn new(
        repository: Arc<dyn PracticeRepositoryTrait>,
        performance_repository: Arc<dyn PerformanceRepositoryTrait>,
        user_repository: Arc<dyn UserRepositoryTrait>,
        generator: Arc<dyn ContentGeneratorTrait>,
    ) -> Self {
        Self {
            repository,
            performance_repository,
            user_repository,
            generator,
        }
    }
}

fn canonical_subject(raw: &str) -> String {
    Subject::parse(raw)
        .map(|s| s.as_str().to_string())
        .unwrap_or_else(|| raw.trim().to_string())
}

#[async_trait::async_trait]
impl PracticeServiceTrait for PracticeService {
    fn list_practices(
        &self,
        user_id: &str,
        subject: Option<&str>,
    ) -> Result<Vec<AdaptivePractice>> {
        let subject = subject
            .filter(|s| !s.trim().is_empty())
            .map(canonical_subject);
        self.repository.list_for_user(user_id, subject.as_deref())
    }

    fn get_practice(&self, practice_id: &str) -> Result<AdaptivePractice> {
        self.repository.get_by_id(practice_id)
    }

    async fn create_practice(
        &self,
        mut new_practice: NewAdaptivePractice,
    ) -> Result<AdaptivePractice> {
        new_practice.validate()?;
        self.user_repository.get_by_id(&new_practice.user_id)?;
        new_practice.subject = canonical_subject(&new_practice.subject);
        self.repository.create(new_practice).await
    }

    async fn update_practice(
        &self,
        practice_id: &str,
        changes: AdaptivePracticeUpdate,
    ) -> Result<AdaptivePractice> {
        self.repository.update(practice_id, changes).await
    }

    async fn delete_practice(&self, practice_id: &str) -> Result<()> {
        let deleted = self.repository.delete(practice_id).await?;
        if deleted == 0 {
            return Err(Error::NotFound("Adaptive practice".to_string()));
        }
        debug!("Deleted adaptive practice {practice_id}");
        Ok(())
    }

    async fn generate_practice(&self, user_id: &str, subject: &str) -> Result<AdaptivePractice> {
        let subject = Subject::parse_required(subject)?;
        self.user_repository.get_by_id(user_id)?;

        let latest_score = self
            .performance_repository
            .latest_for_subject(user_id, subject.as_str())?
            .map(|p| p.score);
        let level = classify_practice_level(latest_score);
        info!("Generating {subject} practice at {level} level for {user_id}");

        let generated = self.generator.generate_practice(subject, level).await;
        self.repository
            .create(NewAdaptivePractice {
                user_id: user_id.to_string(),
                subject: subject.as_str().to_string(),
                performance_level: level,
                title: generated.title,
                description: generated.description,
                content: generated.content,
                resources: generated.resources,
                completed: false,
            })
            .await
    }
}
