use async_trait::async_trait;

use super::tutor_model::{NewPersonalizedTutor, PersonalizedTutor, QuizResult};
use crate::errors::Result;
use crate::performance::{NewPerformanceHistory, PerformanceHistory};

/// Persistence contract for tutoring sessions.
#[async_trait]
pub trait TutorRepositoryTrait: Send + Sync {
    async fn create(&self, new_tutor: NewPersonalizedTutor) -> Result<PersonalizedTutor>;

    fn get_by_id(&self, tutor_id: &str) -> Result<PersonalizedTutor>;

    /// Sessions of a user, newest first.
    fn list_for_user(&self, user_id: &str) -> Result<Vec<PersonalizedTutor>>;

    /// Marks the session completed with `score` and appends `history` in one write.
    async fn complete_quiz(
        &self,
        tutor_id: &str,
        score: f64,
        history: NewPerformanceHistory,
    ) -> Result<PersonalizedTutor>;
}

#[async_trait]
pub trait TutorServiceTrait: Send + Sync {
    fn list_sessions(&self, user_id: &str) -> Result<Vec<PersonalizedTutor>>;

    fn get_session(&self, tutor_id: &str) -> Result<PersonalizedTutor>;

    /// Derives the level from recent quiz history and generates a session.
    async fn generate_session(&self, user_id: &str, subject: &str) -> Result<PersonalizedTutor>;

    /// Grades `answers` against the stored quiz and records the attempt.
    async fn submit_answers(&self, tutor_id: &str, answers: Vec<String>) -> Result<QuizResult>;

    fn performance_history(
        &self,
        user_id: &str,
        subject: Option<&str>,
    ) -> Result<Vec<PerformanceHistory>>;
}
