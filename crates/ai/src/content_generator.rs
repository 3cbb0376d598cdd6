//! Generates practice and tutoring material with the generative model,
//! falling back to the static tables on any failure.

use async_trait::async_trait;
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::Arc;

use smartedtech_core::generation::{
    ContentGeneratorTrait, GeneratedPractice, GeneratedTutorSession,
};
use smartedtech_core::grading::{PracticeLevel, TutorLevel};
use smartedtech_core::tutor::QuizQuestion;
use smartedtech_core::Subject;

use crate::error::AiError;
use crate::fallback::{fallback_practice, fallback_tutor_session};
use crate::model::GenerativeModelTrait;
use crate::prompts::{practice_prompt, tutor_prompt};

pub struct ContentGenerator {
    model: Arc<dyn GenerativeModelTrait>,
}

impl ContentGenerator {
    pub fn new(model: Arc<dyn GenerativeModelTrait>) -> Self {
        Self { model }
    }

    async fn practice_from_model(
        &self,
        subject: Subject,
        level: PracticeLevel,
    ) -> Result<GeneratedPractice, AiError> {
        let reply = self.model.complete(&practice_prompt(subject, level)).await?;
        parse_practice(&reply)
    }

    async fn tutor_from_model(
        &self,
        subject: Subject,
        level: TutorLevel,
    ) -> Result<GeneratedTutorSession, AiError> {
        let reply = self.model.complete(&tutor_prompt(subject, level)).await?;
        parse_tutor_session(&reply)
    }
}

#[async_trait]
impl ContentGeneratorTrait for ContentGenerator {
    async fn generate_practice(&self, subject: Subject, level: PracticeLevel) -> GeneratedPractice {
        match self.practice_from_model(subject, level).await {
            Ok(practice) => {
                debug!("Generated {} practice for {}", level, subject);
                practice
            }
            Err(e) => {
                warn!(
                    "Practice generation for {} ({}) failed, using fallback: {}",
                    subject, level, e
                );
                fallback_practice(subject.as_str(), level)
            }
        }
    }

    async fn generate_tutor_session(
        &self,
        subject: Subject,
        level: TutorLevel,
    ) -> GeneratedTutorSession {
        match self.tutor_from_model(subject, level).await {
            Ok(session) => {
                debug!("Generated {} tutor session for {}", level, subject);
                session
            }
            Err(e) => {
                warn!(
                    "Tutor generation for {} ({}) failed, using fallback: {}",
                    subject, level, e
                );
                fallback_tutor_session(subject.as_str(), level)
            }
        }
    }
}

// ============================================================================
// Reply parsing
// ============================================================================

/// Slice from the first `{` to the last `}`. Strips prose and Markdown fences
/// around the object.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}

fn parse_object<T: DeserializeOwned>(reply: &str) -> Result<T, AiError> {
    let json = extract_json_object(reply)
        .ok_or_else(|| AiError::invalid_response("no JSON object in reply"))?;
    serde_json::from_str(json).map_err(|e| AiError::invalid_response(e.to_string()))
}

fn require_text(field: &str, value: String) -> Result<String, AiError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AiError::invalid_response(format!("{field} is empty")));
    }
    Ok(trimmed.to_string())
}

#[derive(Deserialize)]
struct PracticeReply {
    title: String,
    description: String,
    content: String,
    resources: Vec<String>,
}

pub fn parse_practice(reply: &str) -> Result<GeneratedPractice, AiError> {
    let parsed: PracticeReply = parse_object(reply)?;
    let resources: Vec<String> = parsed
        .resources
        .into_iter()
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty())
        .collect();
    if resources.is_empty() {
        return Err(AiError::invalid_response("resources is empty"));
    }
    Ok(GeneratedPractice {
        title: require_text("title", parsed.title)?,
        description: require_text("description", parsed.description)?,
        content: require_text("content", parsed.content)?,
        resources,
    })
}

#[derive(Deserialize)]
struct TutorReply {
    title: String,
    content: String,
    quiz_data: Vec<QuizQuestion>,
}

pub fn parse_tutor_session(reply: &str) -> Result<GeneratedTutorSession, AiError> {
    let parsed: TutorReply = parse_object(reply)?;
    if parsed.quiz_data.is_empty() {
        return Err(AiError::invalid_response("quiz_data is empty"));
    }
    let mut quiz_data = Vec::with_capacity(parsed.quiz_data.len());
    for (index, mut question) in parsed.quiz_data.into_iter().enumerate() {
        question.correct_answer = question.correct_answer.trim().to_ascii_uppercase();
        if !question.is_well_formed() {
            return Err(AiError::invalid_response(format!(
                "quiz question {} needs 4 options and an answer in A-D",
                index + 1
            )));
        }
        quiz_data.push(question);
    }
    Ok(GeneratedTutorSession {
        title: require_text("title", parsed.title)?,
        content: require_text("content", parsed.content)?,
        quiz_data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FakeModel;

    const PRACTICE_REPLY: &str = "Here you go:\n```json\n{\"title\": \"Vectors\", \
\"description\": \"Adding vectors.\", \"content\": \"# Vectors\", \
\"resources\": [\"OpenStax\", \" \"]}\n```";

    const TUTOR_REPLY: &str = r#"{"title": "Moles", "content": "A mole is 6.022e23 particles.",
        "quiz_data": [{"question": "Avogadro's number?", "options": ["6.022e23", "3.14", "9.81", "1"], "correct_answer": "a"}]}"#;

    #[test]
    fn extracts_object_from_fenced_reply() {
        assert_eq!(
            extract_json_object("```json\n{\"a\": {\"b\": 1}}\n```"),
            Some("{\"a\": {\"b\": 1}}")
        );
        assert_eq!(extract_json_object("no json here"), None);
        assert_eq!(extract_json_object("} backwards {"), None);
    }

    #[test]
    fn parses_practice_and_drops_blank_resources() {
        let practice = parse_practice(PRACTICE_REPLY).unwrap();
        assert_eq!(practice.title, "Vectors");
        assert_eq!(practice.resources, vec!["OpenStax"]);
    }

    #[test]
    fn rejects_practice_with_missing_or_empty_keys() {
        assert!(parse_practice(r#"{"title": "x", "description": "y", "content": "z"}"#).is_err());
        assert!(parse_practice(
            r#"{"title": " ", "description": "y", "content": "z", "resources": ["r"]}"#
        )
        .is_err());
    }

    #[test]
    fn normalizes_answer_letter() {
        let session = parse_tutor_session(TUTOR_REPLY).unwrap();
        assert_eq!(session.quiz_data[0].correct_answer, "A");
    }

    #[test]
    fn rejects_malformed_questions() {
        let three_options = r#"{"title": "t", "content": "c", "quiz_data": [
            {"question": "q", "options": ["a", "b", "c"], "correct_answer": "A"}]}"#;
        let bad_letter = r#"{"title": "t", "content": "c", "quiz_data": [
            {"question": "q", "options": ["a", "b", "c", "d"], "correct_answer": "E"}]}"#;
        let no_questions = r#"{"title": "t", "content": "c", "quiz_data": []}"#;
        for reply in [three_options, bad_letter, no_questions] {
            assert!(matches!(
                parse_tutor_session(reply),
                Err(AiError::InvalidResponse(_))
            ));
        }
    }

    #[tokio::test]
    async fn failing_model_falls_back_for_every_subject_and_level() {
        let generator = ContentGenerator::new(Arc::new(FakeModel::failing()));
        for subject in Subject::ALL {
            for level in [
                PracticeLevel::Remedial,
                PracticeLevel::Standard,
                PracticeLevel::Advanced,
            ] {
                let practice = generator.generate_practice(subject, level).await;
                assert_eq!(practice, fallback_practice(subject.as_str(), level));
                assert!(!practice.title.is_empty());
                assert!(!practice.description.is_empty());
                assert!(practice.content.starts_with('#'));
                assert!((3..=5).contains(&practice.resources.len()));
            }
            for level in [TutorLevel::Low, TutorLevel::Medium, TutorLevel::High] {
                let session = generator.generate_tutor_session(subject, level).await;
                assert_eq!(session.title, format!("Personalized {} Practice", subject));
                assert!(!session.quiz_data.is_empty());
                assert!(session.quiz_data.iter().all(QuizQuestion::is_well_formed));
            }
        }
    }

    #[tokio::test]
    async fn unusable_reply_falls_back() {
        let generator = ContentGenerator::new(Arc::new(FakeModel::with_reply("Sorry, I can't.")));
        let session = generator
            .generate_tutor_session(Subject::Chemistry, TutorLevel::High)
            .await;
        assert_eq!(
            session.content,
            "Let's review the periodic table and element properties."
        );
    }

    #[tokio::test]
    async fn valid_reply_is_used() {
        let generator = ContentGenerator::new(Arc::new(FakeModel::with_reply(TUTOR_REPLY)));
        let session = generator
            .generate_tutor_session(Subject::Chemistry, TutorLevel::Medium)
            .await;
        assert_eq!(session.title, "Moles");
        assert_eq!(session.quiz_data.len(), 1);
    }
}
