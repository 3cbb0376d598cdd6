use log::info;
use std::sync::Arc;

use super::tutor_model::{score_quiz, NewPersonalizedTutor, PersonalizedTutor, QuizResult};
use super::tutor_traits::{TutorRepositoryTrait, TutorServiceTrait};
use crate::constants::TUTOR_HISTORY_WINDOW;
use crate::errors::Result;
use crate::generation::ContentGeneratorTrait;
use crate::grading::classify_tutor_level;
use crate::performance::{NewPerformanceHistory, PerformanceHistory, PerformanceRepositoryTrait};
use crate::subjects::Subject;
use crate::users::UserRepositoryTrait;

pub struct TutorService {
    repository: Arc<dyn TutorRepositoryTrait>,
    performance_repository: Arc<dyn PerformanceRepositoryTrait>,
    user_repository: Arc<dyn UserRepositoryTrait>,
    generator: Arc<dyn ContentGeneratorTrait>,
}

impl TutorService {
    pub fn new(
        repository: Arc<dyn TutorRepositoryTrait>,
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

#[async_trait::async_trait]
impl TutorServiceTrait for TutorService {
    fn list_sessions(&self, user_id: &str) -> Result<Vec<PersonalizedTutor>> {
        self.repository.list_for_user(user_id)
    }

    fn get_session(&self, tutor_id: &str) -> Result<PersonalizedTutor> {
        self.repository.get_by_id(tutor_id)
    }

    async fn generate_session(&self, user_id: &str, subject: &str) -> Result<PersonalizedTutor> {
        let subject = Subject::parse_required(subject)?;
        self.user_repository.get_by_id(user_id)?;

        let percentages: Vec<f64> = self
            .performance_repository
            .list_history(user_id, Some(subject.as_str()), Some(TUTOR_HISTORY_WINDOW))?
            .iter()
            .map(|h| h.percentage)
            .collect();
        let level = classify_tutor_level(&percentages);
        info!("Generating {subject} tutor session at {level} level for {user_id}");

        let generated = self.generator.generate_tutor_session(subject, level).await;
        self.repository
            .create(NewPersonalizedTutor {
                user_id: user_id.to_string(),
                subject: subject.as_str().to_string(),
                performance_level: level,
                title: generated.title,
                content: generated.content,
                quiz_data: generated.quiz_data,
            })
            .await
    }

    async fn submit_answers(&self, tutor_id: &str, answers: Vec<String>) -> Result<QuizResult> {
        let tutor = self.repository.get_by_id(tutor_id)?;
        let result = score_quiz(&tutor.quiz_data, &answers);

        let history = NewPerformanceHistory {
            user_id: tutor.user_id.clone(),
            subject: tutor.subject.clone(),
            quiz_id: Some(tutor.id.clone()),
            score: result.correct_count as f64,
            max_score: result.total_questions as f64,
            percentage: result.score,
        };
        self.repository
            .complete_quiz(&tutor.id, result.score, history)
            .await?;
        Ok(result)
    }

    fn performance_history(
        &self,
        user_id: &str,
        subject: Option<&str>,
    ) -> Result<Vec<PerformanceHistory>> {
        let subject = subject
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| Subject::parse(s).map(|p| p.as_str()).unwrap_or(s));
        self.performance_repository.list_history(user_id, subject, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::{GeneratedPractice, GeneratedTutorSession};
    use crate::grading::{PracticeLevel, TutorLevel};
    use crate::memory::InMemoryStore;
    use crate::tutor::QuizQuestion;
    use async_trait::async_trait;

    /// Echoes the requested level in the title and returns a two-question quiz.
    struct EchoGenerator;

    #[async_trait]
    impl ContentGeneratorTrait for EchoGenerator {
        async fn generate_practice(
            &self,
            subject: Subject,
            level: PracticeLevel,
        ) -> GeneratedPractice {
            GeneratedPractice {
                title: format!("{subject} {level}"),
                description: String::new(),
                content: String::new(),
                resources: vec![],
            }
        }

        async fn generate_tutor_session(
            &self,
            subject: Subject,
            level: TutorLevel,
        ) -> GeneratedTutorSession {
            let q = |answer: &str| QuizQuestion {
                question: "?".into(),
                options: vec!["w".into(), "x".into(), "y".into(), "z".into()],
                correct_answer: answer.into(),
            };
            GeneratedTutorSession {
                title: format!("{subject} {level}"),
                content: "Concept".into(),
                quiz_data: vec![q("A"), q("B")],
            }
        }
    }

    fn service(store: &Arc<InMemoryStore>) -> TutorService {
        TutorService::new(
            store.clone(),
            store.clone(),
            store.clone(),
            Arc::new(EchoGenerator),
        )
    }

    #[tokio::test]
    async fn first_session_is_medium_and_submission_feeds_level() {
        let store = Arc::new(InMemoryStore::new());
        let user = store.seed_user("ada@example.com");
        let svc = service(&store);

        let session = svc.generate_session(&user.id, "chemistry").await.unwrap();
        assert_eq!(session.performance_level, TutorLevel::Medium);
        assert_eq!(session.subject, "Chemistry");
        assert!(!session.completed);

        let result = svc
            .submit_answers(&session.id, vec!["B".into(), "A".into()])
            .await
            .unwrap();
        assert_eq!(result.correct_count, 0);
        assert_eq!(result.score, 0.0);

        let stored = svc.get_session(&session.id).unwrap();
        assert!(stored.completed);
        assert_eq!(stored.score, Some(0.0));

        let history = svc.performance_history(&user.id, Some("CHEMISTRY")).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].max_score, 2.0);
        assert_eq!(history[0].quiz_id.as_deref(), Some(session.id.as_str()));

        let next = svc.generate_session(&user.id, "Chemistry").await.unwrap();
        assert_eq!(next.performance_level, TutorLevel::Low);
        assert_eq!(svc.list_sessions(&user.id).unwrap()[0].id, next.id);
    }

    #[tokio::test]
    async fn perfect_scores_raise_level() {
        let store = Arc::new(InMemoryStore::new());
        let user = store.seed_user("ada@example.com");
        let svc = service(&store);

        let session = svc.generate_session(&user.id, "Physics").await.unwrap();
        svc.submit_answers(&session.id, vec!["a".into(), "b".into()])
            .await
            .unwrap();

        let next = svc.generate_session(&user.id, "physics").await.unwrap();
        assert_eq!(next.performance_level, TutorLevel::High);
    }

    #[tokio::test]
    async fn rejects_unknown_subject_and_missing_session() {
        let store = Arc::new(InMemoryStore::new());
        let user = store.seed_user("ada@example.com");
        let svc = service(&store);

        assert!(svc.generate_session(&user.id, "History").await.is_err());
        let err = svc.submit_answers("missing", vec![]).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
