//! In-memory record store.
//!
//! Implements every repository trait over `RwLock`-guarded vectors with the
//! same ordering, uniqueness and not-found semantics as the SQLite store.
//! Used by the service tests and available to other crates through the
//! `memory-store` feature.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::activities::{Activity, ActivityRepositoryTrait, NewActivity};
use crate::assignments::{Assignment, AssignmentRepositoryTrait, AssignmentUpdate, NewAssignment};
use crate::boosters::{BoosterRepositoryTrait, NewPerformanceBooster, PerformanceBooster};
use crate::constants::{ASSIGNMENT_STATUS_PENDING, DEFAULT_USER_LEVEL};
use crate::errors::{DatabaseError, Error, Result};
use crate::performance::{
    NewPerformance, NewPerformanceHistory, Performance, PerformanceHistory,
    PerformanceRepositoryTrait,
};
use crate::practice::{
    AdaptivePractice, AdaptivePracticeUpdate, NewAdaptivePractice, PracticeRepositoryTrait,
};
use crate::tutor::{NewPersonalizedTutor, PersonalizedTutor, TutorRepositoryTrait};
use crate::users::{normalize_email, NewUser, User, UserCredentials, UserRepositoryTrait};
use crate::utils::now_naive;

#[derive(Default)]
struct Tables {
    users: Vec<UserCredentials>,
    activities: Vec<Activity>,
    assignments: Vec<Assignment>,
    performances: Vec<Performance>,
    history: Vec<PerformanceHistory>,
    practices: Vec<AdaptivePractice>,
    boosters: Vec<PerformanceBooster>,
    tutors: Vec<PersonalizedTutor>,
}

impl Tables {
    fn require_user(&self, user_id: &str) -> Result<()> {
        if self.users.iter().any(|c| c.user.id == user_id) {
            Ok(())
        } else {
            Err(DatabaseError::ForeignKeyViolation(format!("users.id = {user_id}")).into())
        }
    }

    fn push_activity(&mut self, user_id: &str, activity: NewActivity) -> Activity {
        let row = Activity {
            id: new_id(),
            user_id: user_id.to_string(),
            activity_type: activity.activity_type,
            description: activity.description,
            metadata: activity.metadata,
            created_at: now_naive(),
        };
        self.activities.push(row.clone());
        row
    }
}

#[derive(Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

fn new_id() -> String {
    Uuid::now_v7().to_string()
}

fn not_found(entity: &str) -> Error {
    Error::NotFound(entity.to_string())
}

/// Newest first. Rows inserted later win ties on the timestamp.
fn newest_first<T: Clone>(
    rows: impl DoubleEndedIterator<Item = T>,
    key: impl Fn(&T) -> NaiveDateTime,
) -> Vec<T> {
    let mut out: Vec<T> = rows.rev().collect();
    out.sort_by(|a, b| key(b).cmp(&key(a)));
    out
}

fn limited<T>(mut rows: Vec<T>, limit: Option<i64>) -> Vec<T> {
    if let Some(limit) = limit {
        rows.truncate(usize::try_from(limit).unwrap_or(0));
    }
    rows
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Inserts a user with a placeholder hash, bypassing registration.
    pub fn seed_user(&self, email: &str) -> User {
        let user = User {
            id: new_id(),
            name: email.split('@').next().unwrap_or(email).to_string(),
            email: normalize_email(email),
            avatar: None,
            level: DEFAULT_USER_LEVEL,
            created_at: now_naive(),
        };
        self.write().users.push(UserCredentials {
            user: user.clone(),
            password_hash: String::new(),
        });
        user
    }
}

#[async_trait]
impl UserRepositoryTrait for InMemoryStore {
    async fn create(&self, new_user: NewUser, activity: NewActivity) -> Result<User> {
        let mut tables = self.write();
        let email = normalize_email(&new_user.email);
        if tables.users.iter().any(|c| c.user.email == email) {
            return Err(DatabaseError::UniqueViolation("users.email".to_string()).into());
        }
        let user = User {
            id: new_id(),
            name: new_user.name,
            email,
            avatar: new_user.avatar,
            level: DEFAULT_USER_LEVEL,
            created_at: now_naive(),
        };
        tables.users.push(UserCredentials {
            user: user.clone(),
            password_hash: new_user.password_hash,
        });
        tables.push_activity(&user.id, activity);
        Ok(user)
    }

    fn get_by_id(&self, user_id: &str) -> Result<User> {
        self.read()
            .users
            .iter()
            .find(|c| c.user.id == user_id)
            .map(|c| c.user.clone())
            .ok_or_else(|| not_found("User"))
    }

    fn find_credentials_by_email(&self, email: &str) -> Result<Option<UserCredentials>> {
        let email = normalize_email(email);
        Ok(self
            .read()
            .users
            .iter()
            .find(|c| c.user.email == email)
            .cloned())
    }
}

#[async_trait]
impl ActivityRepositoryTrait for InMemoryStore {
    async fn append(&self, user_id: &str, activity: NewActivity) -> Result<Activity> {
        let mut tables = self.write();
        tables.require_user(user_id)?;
        Ok(tables.push_activity(user_id, activity))
    }

    fn list_recent(&self, user_id: &str, limit: i64) -> Result<Vec<Activity>> {
        let tables = self.read();
        let rows = tables
            .activities
            .iter()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect::<Vec<_>>();
        Ok(limited(
            newest_first(rows.into_iter(), |a| a.created_at),
            Some(limit),
        ))
    }
}

#[async_trait]
impl AssignmentRepositoryTrait for InMemoryStore {
    async fn create(
        &self,
        new_assignment: NewAssignment,
        activity: NewActivity,
    ) -> Result<Assignment> {
        let mut tables = self.write();
        tables.require_user(&new_assignment.user_id)?;
        let assignment = Assignment {
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
        tables.assignments.push(assignment.clone());
        tables.push_activity(&assignment.user_id, activity);
        Ok(assignment)
    }

    async fn update(
        &self,
        assignment_id: &str,
        changes: AssignmentUpdate,
        activity: NewActivity,
    ) -> Result<Assignment> {
        let mut tables = self.write();
        let assignment = tables
            .assignments
            .iter_mut()
            .find(|a| a.id == assignment_id)
            .ok_or_else(|| not_found("Assignment"))?;
        changes.apply_to(assignment);
        let updated = assignment.clone();
        tables.push_activity(&updated.user_id, activity);
        Ok(updated)
    }

    fn get_by_id(&self, assignment_id: &str) -> Result<Assignment> {
        self.read()
            .assignments
            .iter()
            .find(|a| a.id == assignment_id)
            .cloned()
            .ok_or_else(|| not_found("Assignment"))
    }

    fn list_for_user(
        &self,
        user_id: &str,
        status: Option<&str>,
        limit: Option<i64>,
    ) -> Result<Vec<Assignment>> {
        let mut rows: Vec<Assignment> = self
            .read()
            .assignments
            .iter()
            .filter(|a| a.user_id == user_id)
            .filter(|a| status.map_or(true, |s| a.status == s))
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.due_date.cmp(&b.due_date));
        Ok(limited(rows, limit))
    }
}

#[async_trait]
impl PerformanceRepositoryTrait for InMemoryStore {
    async fn record(&self, new_performance: NewPerformance) -> Result<Performance> {
        let mut tables = self.write();
        tables.require_user(&new_performance.user_id)?;
        let row = Performance {
            id: new_id(),
            user_id: new_performance.user_id,
            subject: new_performance.subject,
            score: new_performance.score,
            date: now_naive(),
        };
        tables.performances.push(row.clone());
        Ok(row)
    }

    fn latest_for_subject(&self, user_id: &str, subject: &str) -> Result<Option<Performance>> {
        let tables = self.read();
        let rows = tables
            .performances
            .iter()
            .filter(|p| p.user_id == user_id && p.subject == subject)
            .cloned()
            .collect::<Vec<_>>();
        Ok(newest_first(rows.into_iter(), |p| p.date).into_iter().next())
    }

    fn list_recent_performances(&self, user_id: &str, limit: i64) -> Result<Vec<Performance>> {
        let tables = self.read();
        let rows = tables
            .performances
            .iter()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect::<Vec<_>>();
        Ok(limited(newest_first(rows.into_iter(), |p| p.date), Some(limit)))
    }

    fn list_history(
        &self,
        user_id: &str,
        subject: Option<&str>,
        limit: Option<i64>,
    ) -> Result<Vec<PerformanceHistory>> {
        let tables = self.read();
        let rows = tables
            .history
            .iter()
            .filter(|h| h.user_id == user_id)
            .filter(|h| subject.map_or(true, |s| h.subject == s))
            .cloned()
            .collect::<Vec<_>>();
        Ok(limited(newest_first(rows.into_iter(), |h| h.date_taken), limit))
    }
}

#[async_trait]
impl PracticeRepositoryTrait for InMemoryStore {
    async fn create(&self, new_practice: NewAdaptivePractice) -> Result<AdaptivePractice> {
        let mut tables = self.write();
        tables.require_user(&new_practice.user_id)?;
        let row = AdaptivePractice {
            id: new_id(),
            user_id: new_practice.user_id,
            subject: new_practice.subject,
            performance_level: new_practice.performance_level,
            title: new_practice.title,
            description: new_practice.description,
            content: new_practice.content,
            resources: new_practice.resources,
            completed: new_practice.completed,
            created_at: now_naive(),
        };
        tables.practices.push(row.clone());
        Ok(row)
    }

    fn get_by_id(&self, practice_id: &str) -> Result<AdaptivePractice> {
        self.read()
            .practices
            .iter()
            .find(|p| p.id == practice_id)
            .cloned()
            .ok_or_else(|| not_found("Adaptive practice"))
    }

    fn list_for_user(
        &self,
        user_id: &str,
        subject: Option<&str>,
    ) -> Result<Vec<AdaptivePractice>> {
        let tables = self.read();
        let rows = tables
            .practices
            .iter()
            .filter(|p| p.user_id == user_id)
            .filter(|p| subject.map_or(true, |s| p.subject == s))
            .cloned()
            .collect::<Vec<_>>();
        Ok(newest_first(rows.into_iter(), |p| p.created_at))
    }

    async fn update(
        &self,
        practice_id: &str,
        changes: AdaptivePracticeUpdate,
    ) -> Result<AdaptivePractice> {
        let mut tables = self.write();
        let practice = tables
            .practices
            .iter_mut()
            .find(|p| p.id == practice_id)
            .ok_or_else(|| not_found("Adaptive practice"))?;
        changes.apply_to(practice);
        Ok(practice.clone())
    }

    async fn delete(&self, practice_id: &str) -> Result<usize> {
        let mut tables = self.write();
        let before = tables.practices.len();
        tables.practices.retain(|p| p.id != practice_id);
        Ok(before - tables.practices.len())
    }
}

#[async_trait]
impl BoosterRepositoryTrait for InMemoryStore {
    async fn create(&self, new_booster: NewPerformanceBooster) -> Result<PerformanceBooster> {
        let mut tables = self.write();
        tables.require_user(&new_booster.user_id)?;
        if !tables
            .assignments
            .iter()
            .any(|a| a.id == new_booster.assignment_id)
        {
            return Err(DatabaseError::ForeignKeyViolation(format!(
                "assignments.id = {}",
                new_booster.assignment_id
            ))
            .into());
        }
        let row = PerformanceBooster {
            id: new_id(),
            user_id: new_booster.user_id,
            assignment_id: new_booster.assignment_id,
            subject: new_booster.subject,
            assignment_title: new_booster.assignment_title,
            grade: new_booster.grade,
            feedback: new_booster.feedback,
            tier: new_booster.tier,
            diagnostic_summary: new_booster.content.diagnostic_summary,
            strategies: new_booster.content.strategies,
            resources: new_booster.content.resources,
            assessment: new_booster.content.assessment,
            created_at: now_naive(),
        };
        tables.boosters.push(row.clone());
        Ok(row)
    }

    fn get_by_id(&self, booster_id: &str) -> Result<PerformanceBooster> {
        self.read()
            .boosters
            .iter()
            .find(|b| b.id == booster_id)
            .cloned()
            .ok_or_else(|| not_found("Booster"))
    }

    fn list_for_user(&self, user_id: &str) -> Result<Vec<PerformanceBooster>> {
        let tables = self.read();
        let rows = tables
            .boosters
            .iter()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect::<Vec<_>>();
        Ok(newest_first(rows.into_iter(), |b| b.created_at))
    }
}

#[async_trait]
impl TutorRepositoryTrait for InMemoryStore {
    async fn create(&self, new_tutor: NewPersonalizedTutor) -> Result<PersonalizedTutor> {
        let mut tables = self.write();
        tables.require_user(&new_tutor.user_id)?;
        let row = PersonalizedTutor {
            id: new_id(),
            user_id: new_tutor.user_id,
            subject: new_tutor.subject,
            performance_level: new_tutor.performance_level,
            title: new_tutor.title,
            content: new_tutor.content,
            quiz_data: new_tutor.quiz_data,
            completed: false,
            score: None,
            created_at: now_naive(),
        };
        tables.tutors.push(row.clone());
        Ok(row)
    }

    fn get_by_id(&self, tutor_id: &str) -> Result<PersonalizedTutor> {
        self.read()
            .tutors
            .iter()
            .find(|t| t.id == tutor_id)
            .cloned()
            .ok_or_else(|| not_found("Tutor"))
    }

    fn list_for_user(&self, user_id: &str) -> Result<Vec<PersonalizedTutor>> {
        let tables = self.read();
        let rows = tables
            .tutors
            .iter()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect::<Vec<_>>();
        Ok(newest_first(rows.into_iter(), |t| t.created_at))
    }

    async fn complete_quiz(
        &self,
        tutor_id: &str,
        score: f64,
        history: NewPerformanceHistory,
    ) -> Result<PersonalizedTutor> {
        let mut tables = self.write();
        let tutor = tables
            .tutors
            .iter_mut()
            .find(|t| t.id == tutor_id)
            .ok_or_else(|| not_found("Tutor"))?;
        tutor.completed = true;
        tutor.score = Some(score);
        let updated = tutor.clone();

        tables.history.push(PerformanceHistory {
            id: new_id(),
            user_id: history.user_id,
            subject: history.subject,
            quiz_id: history.quiz_id,
            score: history.score,
            max_score: history.max_score,
            percentage: history.percentage,
            date_taken: now_naive(),
        });
        Ok(updated)
    }
}
