use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use smartedtech_core::activities::NewActivity;
use smartedtech_core::assignments::{
    Assignment, AssignmentRepositoryTrait, AssignmentUpdate, NewAssignment,
};
use smartedtech_core::constants::ASSIGNMENT_STATUS_PENDING;
use smartedtech_core::utils::now_naive;
use smartedtech_core::{Error, Result};

use super::model::{AssignmentChangesDB, AssignmentDB};
use crate::activities::insert_activity;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::assignments;
use crate::utils::new_id;

pub struct AssignmentRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl AssignmentRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

fn not_found() -> Error {
    Error::NotFound("Assignment".to_string())
}

#[async_trait]
impl AssignmentRepositoryTrait for AssignmentRepository {
    async fn create(
        &self,
        new_assignment: NewAssignment,
        activity: NewActivity,
    ) -> Result<Assignment> {
        self.writer
            .exec(move |conn| {
                let row = AssignmentDB {
                    id: new_id(),
                    user_id: new_assignment.user_id,
                    title: new_assignment.title,
                    subject: new_assignment.subject,
                    description: new_assignment.description,
                    due_date: new_assignment.due_date,
                    status: ASSIGNMENT_STATUS_PENDING.to_string(),
                    score: None,
                    created_at: now_naive(),
                };
                let stored = diesel::insert_into(assignments::table)
                    .values(&row)
                    .returning(AssignmentDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                insert_activity(conn, &stored.user_id, activity)?;
                Ok(Assignment::from(stored))
            })
            .await
    }

    async fn update(
        &self,
        assignment_id: &str,
        changes: AssignmentUpdate,
        activity: NewActivity,
    ) -> Result<Assignment> {
        let assignment_id = assignment_id.to_string();
        self.writer
            .exec(move |conn| {
                let changes = AssignmentChangesDB::from(changes);
                // An empty changeset is rejected by Diesel, so only the
                // activity is written in that case.
                let stored = if changes.is_empty() {
                    assignments::table
                        .find(&assignment_id)
                        .select(AssignmentDB::as_select())
                        .first::<AssignmentDB>(conn)
                        .optional()
                        .into_core()?
                } else {
                    diesel::update(assignments::table.find(&assignment_id))
                        .set(&changes)
                        .returning(AssignmentDB::as_returning())
                        .get_result(conn)
                        .optional()
                        .into_core()?
                }
                .ok_or_else(not_found)?;

                insert_activity(conn, &stored.user_id, activity)?;
                Ok(Assignment::from(stored))
            })
            .await
    }

    fn get_by_id(&self, assignment_id: &str) -> Result<Assignment> {
        let mut conn = get_connection(&self.pool)?;
        assignments::table
            .find(assignment_id)
            .select(AssignmentDB::as_select())
            .first::<AssignmentDB>(&mut conn)
            .optional()
            .into_core()?
            .map(Assignment::from)
            .ok_or_else(not_found)
    }

    fn list_for_user(
        &self,
        user_id: &str,
        status: Option<&str>,
        limit: Option<i64>,
    ) -> Result<Vec<Assignment>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = assignments::table
            .filter(assignments::user_id.eq(user_id))
            .select(AssignmentDB::as_select())
            .order((assignments::due_date.asc(), assignments::created_at.asc()))
            .into_boxed();
        if let Some(status) = status {
            query = query.filter(assignments::status.eq(status.to_string()));
        }
        if let Some(limit) = limit {
            query = query.limit(limit);
        }
        Ok(query
            .load::<AssignmentDB>(&mut conn)
            .into_core()?
            .into_iter()
            .map(Assignment::from)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activities::ActivityRepository;
    use crate::test_support::setup;
    use chrono::NaiveDate;
    use smartedtech_core::activities::ActivityRepositoryTrait;
    use smartedtech_core::constants::ACTIVITY_ASSIGNMENT_UPDATED;
    use smartedtech_core::errors::DatabaseError;

    fn due(day: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, day)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    fn new_assignment(user_id: &str, title: &str, day: u32) -> NewAssignment {
        NewAssignment {
            user_id: user_id.to_string(),
            title: title.to_string(),
            subject: "Physics".to_string(),
            description: None,
            due_date: due(day),
        }
    }

    #[tokio::test]
    async fn lists_by_due_date_with_status_filter_and_limit() {
        let db = setup();
        let user = db.seed_user("ada@example.com").await;
        let repo = AssignmentRepository::new(Arc::clone(&db.pool), db.writer.clone());

        for (title, day) in [("Late", 20), ("Early", 2), ("Middle", 10)] {
            repo.create(
                new_assignment(&user.id, title, day),
                NewActivity::assignment_created(title),
            )
            .await
            .unwrap();
        }
        let all = repo.list_for_user(&user.id, None, None).unwrap();
        let titles: Vec<_> = all.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, ["Early", "Middle", "Late"]);
        assert!(all.iter().all(|a| a.status == ASSIGNMENT_STATUS_PENDING));

        let first_two = repo.list_for_user(&user.id, Some("pending"), Some(2)).unwrap();
        assert_eq!(first_two.len(), 2);
        assert!(repo
            .list_for_user(&user.id, Some("completed"), None)
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn update_changes_fields_and_logs_activity() {
        let db = setup();
        let user = db.seed_user("ada@example.com").await;
        let repo = AssignmentRepository::new(Arc::clone(&db.pool), db.writer.clone());
        let activities = ActivityRepository::new(Arc::clone(&db.pool), db.writer.clone());
        let created = repo
            .create(
                new_assignment(&user.id, "Lab report", 5),
                NewActivity::assignment_created("Lab report"),
            )
            .await
            .unwrap();

        let updated = repo
            .update(
                &created.id,
                AssignmentUpdate {
                    status: Some("completed".to_string()),
                    score: Some(0.0),
                    ..Default::default()
                },
                NewActivity::assignment_updated("Lab report"),
            )
            .await
            .unwrap();
        assert_eq!(updated.status, "completed");
        assert_eq!(updated.score, Some(0.0));
        assert_eq!(updated.title, "Lab report");
        assert_eq!(repo.get_by_id(&created.id).unwrap(), updated);

        let logged = activities.list_recent(&user.id, 10).unwrap();
        assert!(logged
            .iter()
            .any(|a| a.activity_type == ACTIVITY_ASSIGNMENT_UPDATED));
    }

    #[tokio::test]
    async fn update_of_missing_assignment_writes_nothing() {
        let db = setup();
        let user = db.seed_user("ada@example.com").await;
        let repo = AssignmentRepository::new(Arc::clone(&db.pool), db.writer.clone());
        let activities = ActivityRepository::new(Arc::clone(&db.pool), db.writer.clone());

        let err = repo
            .update(
                "missing",
                AssignmentUpdate::default(),
                NewActivity::assignment_updated("Ghost"),
            )
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        // Only the registration activity exists.
        assert_eq!(activities.list_recent(&user.id, 10).unwrap().len(), 1);
    }

    #[tokio::test]
    async fn create_for_unknown_user_is_rejected() {
        let db = setup();
        let repo = AssignmentRepository::new(Arc::clone(&db.pool), db.writer.clone());
        let err = repo
            .create(
                new_assignment("nobody", "Orphan", 1),
                NewActivity::assignment_created("Orphan"),
            )
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Database(DatabaseError::ForeignKeyViolation(_))
        ));
        assert!(repo.list_for_user("nobody", None, None).unwrap().is_empty());
    }
}
