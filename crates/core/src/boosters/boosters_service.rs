use log::debug;
use std::sync::Arc;

use super::booster_content::compose_booster;
use super::boosters_model::{BoosterRequest, NewPerformanceBooster, PerformanceBooster};
use super::boosters_traits::{BoosterRepositoryTrait, BoosterServiceTrait};
use crate::assignments::AssignmentRepositoryTrait;
use crate::errors::{Error, Result};
use crate::grading::BoosterTier;
use crate::users::UserRepositoryTrait;

pub struct BoosterService {
    repository: Arc<dyn BoosterRepositoryTrait>,
    assignment_repository: Arc<dyn AssignmentRepositoryTrait>,
    user_repository: Arc<dyn UserRepositoryTrait>,
}

impl BoosterService {
    pub fn new(
        repository: Arc<dyn BoosterRepositoryTrait>,
        assignment_repository: Arc<dyn AssignmentRepositoryTrait>,
        user_repository: Arc<dyn UserRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            assignment_repository,
            user_repository,
        }
    }
}

#[async_trait::async_trait]
impl BoosterServiceTrait for BoosterService {
    async fn create_booster(&self, request: BoosterRequest) -> Result<PerformanceBooster> {
        request.validate()?;
        self.user_repository.get_by_id(&request.user_id)?;

        let assignment = self.assignment_repository.get_by_id(&request.assignment_id)?;
        if assignment.user_id != request.user_id {
            return Err(Error::NotFound("Assignment".to_string()));
        }

        let tier = BoosterTier::from_grade(request.grade);
        debug!(
            "Composing tier {} booster for assignment {}",
            tier.number(),
            request.assignment_id
        );
        let content = compose_booster(
            tier,
            &request.subject,
            &request.assignment_title,
            request.grade,
            &request.feedback,
        );

        self.repository
            .create(NewPerformanceBooster {
                user_id: request.user_id,
                assignment_id: request.assignment_id,
                subject: request.subject,
                assignment_title: request.assignment_title,
                grade: request.grade,
                feedback: Some(request.feedback),
                tier: tier.number(),
                content,
            })
            .await
    }

    fn get_booster(&self, booster_id: &str) -> Result<PerformanceBooster> {
        self.repository.get_by_id(booster_id)
    }

    fn list_boosters(&self, user_id: &str) -> Result<Vec<PerformanceBooster>> {
        self.repository.list_for_user(user_id)
    }
}
