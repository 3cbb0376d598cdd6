use async_trait::async_trait;
use std::sync::Arc;

use super::dashboard_model::DashboardSummary;
use crate::activities::ActivityRepositoryTrait;
use crate::assignments::AssignmentRepositoryTrait;
use crate::constants::{
    ASSIGNMENT_STATUS_PENDING, DASHBOARD_PENDING_ASSIGNMENTS_LIMIT,
    DASHBOARD_PERFORMANCE_LIMIT, DASHBOARD_RECENT_ACTIVITIES_LIMIT,
};
use crate::errors::Result;
use crate::performance::{NewPerformance, Performance, PerformanceRepositoryTrait};
use crate::subjects::Subject;
use crate::users::UserRepositoryTrait;

#[async_trait]
pub trait DashboardServiceTrait: Send + Sync {
    fn get_summary(&self, user_id: &str) -> Result<DashboardSummary>;

    /// Records a subject score sample for the user.
    async fn record_performance(
        &self,
        user_id: &str,
        subject: &str,
        score: f64,
    ) -> Result<Performance>;
}

pub struct DashboardService {
    user_repository: Arc<dyn UserRepositoryTrait>,
    assignment_repository: Arc<dyn AssignmentRepositoryTrait>,
    activity_repository: Arc<dyn ActivityRepositoryTrait>,
    performance_repository: Arc<dyn PerformanceRepositoryTrait>,
}

impl DashboardService {
    pub fn new(
        user_repository: Arc<dyn UserRepositoryTrait>,
        assignment_repository: Arc<dyn AssignmentRepositoryTrait>,
        activity_repository: Arc<dyn ActivityRepositoryTrait>,
        performance_repository: Arc<dyn PerformanceRepositoryTrait>,
    ) -> Self {
        Self {
            user_repository,
            assignment_repository,
            activity_repository,
            performance_repository,
        }
    }
}

#[async_trait]
impl DashboardServiceTrait for DashboardService {
    fn get_summary(&self, user_id: &str) -> Result<DashboardSummary> {
        let user = self.user_repository.get_by_id(user_id)?;
        Ok(DashboardSummary {
            pending_assignments: self.assignment_repository.list_for_user(
                user_id,
                Some(ASSIGNMENT_STATUS_PENDING),
                Some(DASHBOARD_PENDING_ASSIGNMENTS_LIMIT),
            )?,
            recent_activities: self
                .activity_repository
                .list_recent(user_id, DASHBOARD_RECENT_ACTIVITIES_LIMIT)?,
            performance: self
                .performance_repository
                .list_recent_performances(user_id, DASHBOARD_PERFORMANCE_LIMIT)?,
            user,
        })
    }

    async fn record_performance(
        &self,
        user_id: &str,
        subject: &str,
        score: f64,
    ) -> Result<Performance> {
        self.user_repository.get_by_id(user_id)?;
        // Known subjects are stored under their canonical name so the
        // practice level lookup finds them.
        let subject = Subject::parse(subject)
            .map(|s| s.as_str().to_string())
            .unwrap_or_else(|| subject.trim().to_string());
        let new_performance = NewPerformance {
            user_id: user_id.to_string(),
            subject,
            score,
        };
        new_performance.validate()?;
        self.performance_repository.record(new_performance).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activities::NewActivity;
    use crate::assignments::NewAssignment;
    use crate::memory::InMemoryStore;
    use crate::utils::parse_datetime;

    #[tokio::test]
    async fn summary_caps_each_list() {
        let store = Arc::new(InMemoryStore::new());
        let user = store.seed_user("ada@example.com");
        let svc = DashboardService::new(store.clone(), store.clone(), store.clone(), store.clone());

        for day in 1..=7 {
            AssignmentRepositoryTrait::create(
                &*store,
                NewAssignment {
                    user_id: user.id.clone(),
                    title: format!("Task {day}"),
                    subject: "Physics".into(),
                    description: None,
                    due_date: parse_datetime(&format!("2024-05-{day:02}")).unwrap(),
                },
                NewActivity::assignment_created("task"),
            )
            .await
            .unwrap();
        }
        for score in [50.0, 60.0, 70.0, 80.0, 90.0, 95.0] {
            svc.record_performance(&user.id, "maths", score).await.unwrap();
        }

        let summary = svc.get_summary(&user.id).unwrap();
        assert_eq!(summary.pending_assignments.len(), 5);
        assert_eq!(summary.pending_assignments[0].title, "Task 1");
        assert_eq!(summary.recent_activities.len(), 7);
        assert_eq!(summary.performance.len(), 5);
        assert_eq!(summary.performance[0].score, 95.0);
        assert_eq!(summary.performance[0].subject, "Mathematics");
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let store = Arc::new(InMemoryStore::new());
        let svc = DashboardService::new(store.clone(), store.clone(), store.clone(), store.clone());
        assert!(svc.get_summary("missing").unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn record_rejects_out_of_range_score() {
        let store = Arc::new(InMemoryStore::new());
        let user = store.seed_user("ada@example.com");
        let svc = DashboardService::new(store.clone(), store.clone(), store.clone(), store.clone());
        assert!(svc.record_performance(&user.id, "Physics", 120.0).await.is_err());
    }
}
