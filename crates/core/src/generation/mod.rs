//! Content generation seam.
//!
//! Services ask a [`ContentGeneratorTrait`] for study material. Implementations
//! are expected to recover from upstream failures themselves, so the calls
//! are infallible from the caller's point of view.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::grading::{PracticeLevel, TutorLevel};
use crate::subjects::Subject;
use crate::tutor::QuizQuestion;

/// Material for one adaptive-practice assignment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratedPractice {
    pub title: String,
    pub description: String,
    pub content: String,
    pub resources: Vec<String>,
}

/// Material for one tutoring session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratedTutorSession {
    pub title: String,
    pub content: String,
    pub quiz_data: Vec<QuizQuestion>,
}

#[async_trait]
pub trait ContentGeneratorTrait: Send + Sync {
    async fn generate_practice(&self, subject: Subject, level: PracticeLevel) -> GeneratedPractice;

    async fn generate_tutor_session(
        &self,
        subject: Subject,
        level: TutorLevel,
    ) -> GeneratedTutorSession;
}
