use async_trait::async_trait;

use super::assignments_model::{Assignment, AssignmentUpdate, NewAssignment};
use crate::activities::NewActivity;
use crate::errors::Result;

/// Persistence contract for assignments.
#[async_trait]
pub trait AssignmentRepositoryTrait: Send + Sync {
    /// Inserts the assignment and its activity entry in one write.
    async fn create(&self, new_assignment: NewAssignment, activity: NewActivity)
        -> Result<Assignment>;

    /// Applies `changes` and appends `activity` for the owner in one write.
    async fn update(
        &self,
        assignment_id: &str,
        changes: AssignmentUpdate,
        activity: NewActivity,
    ) -> Result<Assignment>;

    fn get_by_id(&self, assignment_id: &str) -> Result<Assignment>;

    /// Assignments of a user ordered by ascending due date.
    ///
    /// # Arguments
    /// * `status` - If Some, only assignments with exactly this status
    /// * `limit` - If Some, at most this many rows
    fn list_for_user(
        &self,
        user_id: &str,
        status: Option<&str>,
        limit: Option<i64>,
    ) -> Result<Vec<Assignment>>;
}

#[async_trait]
pub trait AssignmentServiceTrait: Send + Sync {
    /// `status` of `None` or `"all"` returns every assignment.
    fn list_assignments(&self, user_id: &str, status: Option<&str>) -> Result<Vec<Assignment>>;

    async fn create_assignment(&self, new_assignment: NewAssignment) -> Result<Assignment>;

    async fn update_assignment(
        &self,
        user_id: &str,
        assignment_id: &str,
        changes: AssignmentUpdate,
    ) -> Result<Assignment>;
}
