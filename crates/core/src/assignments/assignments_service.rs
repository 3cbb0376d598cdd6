use log::debug;
use std::sync::Arc;

use super::assignments_model::{Assignment, AssignmentUpdate, NewAssignment};
use super::assignments_traits::{AssignmentRepositoryTrait, AssignmentServiceTrait};
use crate::activities::NewActivity;
use crate::constants::ASSIGNMENT_STATUS_ALL;
use crate::errors::{Error, Result};
use crate::users::UserRepositoryTrait;

pub struct AssignmentService {
    repository: Arc<dyn AssignmentRepositoryTrait>,
    user_repository: Arc<dyn UserRepositoryTrait>,
}

impl AssignmentService {
    pub fn new(
        repository: Arc<dyn AssignmentRepositoryTrait>,
        user_repository: Arc<dyn UserRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            user_repository,
        }
    }

    /// Fetches an assignment, treating one owned by another user as missing.
    fn get_owned(&self, user_id: &str, assignment_id: &str) -> Result<Assignment> {
        match self.repository.get_by_id(assignment_id) {
            Ok(assignment) if assignment.user_id == user_id => Ok(assignment),
            Ok(_) => Err(Error::NotFound("Assignment".to_string())),
            Err(e) if e.is_not_found() => Err(Error::NotFound("Assignment".to_string())),
            Err(e) => Err(e),
        }
    }
}

#[async_trait::async_trait]
impl AssignmentServiceTrait for AssignmentService {
    fn list_assignments(&self, user_id: &str, status: Option<&str>) -> Result<Vec<Assignment>> {
        let status = status
            .map(str::trim)
            .filter(|s| !s.is_empty() && !s.eq_ignore_ascii_case(ASSIGNMENT_STATUS_ALL));
        self.repository.list_for_user(user_id, status, None)
    }

    async fn create_assignment(&self, new_assignment: NewAssignment) -> Result<Assignment> {
        new_assignment.validate()?;
        self.user_repository.get_by_id(&new_assignment.user_id)?;

        let activity = NewActivity::assignment_created(&new_assignment.title);
        let assignment = self.repository.create(new_assignment, activity).await?;
        debug!("Created assignment {} for {}", assignment.id, assignment.user_id);
        Ok(assignment)
    }

    async fn update_assignment(
        &self,
        user_id: &str,
        assignment_id: &str,
        changes: AssignmentUpdate,
    ) -> Result<Assignment> {
        let existing = self.get_owned(user_id, assignment_id)?;
        let changes = changes.normalized();

        let title = changes.title.as_deref().unwrap_or(&existing.title);
        let activity = NewActivity::assignment_updated(title);
        self.repository.update(assignment_id, changes, activity).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activities::ActivityRepositoryTrait;
    use crate::memory::InMemoryStore;
    use crate::utils::parse_datetime;

    fn new_assignment(user_id: &str, title: &str, due: &str) -> NewAssignment {
        NewAssignment {
            user_id: user_id.to_string(),
            title: title.to_string(),
            subject: "Physics".to_string(),
            description: None,
            due_date: parse_datetime(due).unwrap(),
        }
    }

    #[tokio::test]
    async fn list_filters_status_and_orders_by_due_date() {
        let store = Arc::new(InMemoryStore::new());
        let user = store.seed_user("ada@example.com");
        let svc = AssignmentService::new(store.clone(), store.clone());

        let late = svc
            .create_assignment(new_assignment(&user.id, "Late", "2024-03-10"))
            .await
            .unwrap();
        svc.create_assignment(new_assignment(&user.id, "Early", "2024-03-01"))
            .await
            .unwrap();
        svc.update_assignment(
            &user.id,
            &late.id,
            AssignmentUpdate {
                status: Some("completed".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        svc.create_assignment(new_assignment(&user.id, "Middle", "2024-03-05"))
            .await
            .unwrap();

        let pending = svc.list_assignments(&user.id, Some("pending")).unwrap();
        let titles: Vec<_> = pending.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["Early", "Middle"]);

        let all = svc.list_assignments(&user.id, Some("all")).unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[2].title, "Late");
        assert_eq!(svc.list_assignments(&user.id, None).unwrap().len(), 3);
    }

    #[tokio::test]
    async fn update_requires_ownership_and_logs_activity() {
        let store = Arc::new(InMemoryStore::new());
        let owner = store.seed_user("owner@example.com");
        let other = store.seed_user("other@example.com");
        let svc = AssignmentService::new(store.clone(), store.clone());

        let assignment = svc
            .create_assignment(new_assignment(&owner.id, "Optics", "2024-04-01"))
            .await
            .unwrap();

        let err = svc
            .update_assignment(&other.id, &assignment.id, AssignmentUpdate::default())
            .await
            .unwrap_err();
        assert!(err.is_not_found());

        let updated = svc
            .update_assignment(
                &owner.id,
                &assignment.id,
                AssignmentUpdate {
                    title: Some("".into()),
                    score: Some(0.0),
                    status: Some("graded".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.title, "Optics");
        assert_eq!(updated.score, Some(0.0));
        assert_eq!(updated.status, "graded");

        let log = ActivityRepositoryTrait::list_recent(&*store, &owner.id, 10).unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].description, "Assignment updated: Optics");
    }

    #[tokio::test]
    async fn create_for_unknown_user_is_not_found() {
        let store = Arc::new(InMemoryStore::new());
        let svc = AssignmentService::new(store.clone(), store.clone());
        let err = svc
            .create_assignment(new_assignment("missing", "Optics", "2024-04-01"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
