//! Performance booster domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::performance::validate_percentage;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoosterResource {
    pub name: String,
    pub url: String,
}

/// One assessment item. Multiple-choice answers are option indices.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AssessmentQuestion {
    MultipleChoice {
        question: String,
        options: Vec<String>,
        correct_answer: usize,
    },
    ShortAnswer {
        question: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoosterAssessment {
    pub questions: Vec<AssessmentQuestion>,
    pub guidance: String,
}

/// Composed study plan for one graded assignment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoosterContent {
    pub diagnostic_summary: String,
    pub strategies: Vec<String>,
    pub resources: Vec<BoosterResource>,
    pub assessment: BoosterAssessment,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PerformanceBooster {
    pub id: String,
    pub user_id: String,
    pub assignment_id: String,
    pub subject: String,
    pub assignment_title: String,
    pub grade: f64,
    pub feedback: Option<String>,
    pub tier: i32,
    pub diagnostic_summary: String,
    pub strategies: Vec<String>,
    pub resources: Vec<BoosterResource>,
    pub assessment: BoosterAssessment,
    pub created_at: NaiveDateTime,
}

/// Booster row ready to persist.
#[derive(Debug, Clone)]
pub struct NewPerformanceBooster {
    pub user_id: String,
    pub assignment_id: String,
    pub subject: String,
    pub assignment_title: String,
    pub grade: f64,
    pub feedback: Option<String>,
    pub tier: i32,
    pub content: BoosterContent,
}

/// Request for a new booster.
#[derive(Debug, Clone, Deserialize)]
pub struct BoosterRequest {
    pub user_id: String,
    pub assignment_id: String,
    pub subject: String,
    pub assignment_title: String,
    pub grade: f64,
    pub feedback: String,
}

impl BoosterRequest {
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("user_id", &self.user_id),
            ("assignment_id", &self.assignment_id),
            ("subject", &self.subject),
            ("assignment_title", &self.assignment_title),
        ] {
            if value.trim().is_empty() {
                return Err(Error::missing_field(field));
            }
        }
        validate_percentage("grade", self.grade)
    }
}
