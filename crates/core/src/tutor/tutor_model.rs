//! Personalized tutor domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::grading::TutorLevel;

/// Letters a quiz answer may take, in option order.
pub const ANSWER_LETTERS: [&str; 4] = ["A", "B", "C", "D"];

/// A four-option multiple-choice question.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

impl QuizQuestion {
    /// Exactly four options and a correct answer in A-D.
    pub fn is_well_formed(&self) -> bool {
        !self.question.trim().is_empty()
            && self.options.len() == ANSWER_LETTERS.len()
            && ANSWER_LETTERS.contains(&self.correct_answer.trim())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersonalizedTutor {
    pub id: String,
    pub user_id: String,
    pub subject: String,
    pub performance_level: TutorLevel,
    pub title: String,
    pub content: String,
    pub quiz_data: Vec<QuizQuestion>,
    pub completed: bool,
    pub score: Option<f64>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone)]
pub struct NewPersonalizedTutor {
    pub user_id: String,
    pub subject: String,
    pub performance_level: TutorLevel,
    pub title: String,
    pub content: String,
    pub quiz_data: Vec<QuizQuestion>,
}

/// Outcome of grading a quiz submission.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct QuizResult {
    pub score: f64,
    pub correct_count: usize,
    pub total_questions: usize,
}

/// Grades answers positionally. Missing answers count as wrong, extra ones are
/// ignored, and answers compare case-insensitively.
pub fn score_quiz(questions: &[QuizQuestion], answers: &[String]) -> QuizResult {
    let total_questions = questions.len();
    let correct_count = questions
        .iter()
        .zip(answers)
        .filter(|(q, a)| q.correct_answer.trim().eq_ignore_ascii_case(a.trim()))
        .count();
    let score = if total_questions == 0 {
        0.0
    } else {
        correct_count as f64 * 100.0 / total_questions as f64
    };
    QuizResult {
        score,
        correct_count,
        total_questions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(correct: &str) -> QuizQuestion {
        QuizQuestion {
            question: "Which?".into(),
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct_answer: correct.into(),
        }
    }

    fn answers(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn scores_percentage_of_correct_answers() {
        let quiz = vec![question("A"), question("C"), question("B"), question("D")];
        let result = score_quiz(&quiz, &answers(&["A", "c", "D"]));
        assert_eq!(result.correct_count, 2);
        assert_eq!(result.total_questions, 4);
        assert_eq!(result.score, 50.0);
    }

    #[test]
    fn empty_quiz_scores_zero() {
        let result = score_quiz(&[], &answers(&["A"]));
        assert_eq!(result.score, 0.0);
        assert_eq!(result.total_questions, 0);
    }

    #[test]
    fn well_formed_needs_four_options_and_letter() {
        assert!(question("B").is_well_formed());
        assert!(!question("E").is_well_formed());
        let mut short = question("A");
        short.options.pop();
        assert!(!short.is_well_formed());
    }
}
