//! Performance samples and quiz history.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// A subject score sample. The latest one per subject drives adaptive practice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Performance {
    pub id: String,
    pub user_id: String,
    pub subject: String,
    pub score: f64,
    pub date: NaiveDateTime,
}

#[derive(Debug, Clone)]
pub struct NewPerformance {
    pub user_id: String,
    pub subject: String,
    pub score: f64,
}

impl NewPerformance {
    pub fn validate(&self) -> Result<()> {
        if self.subject.trim().is_empty() {
            return Err(Error::missing_field("subject"));
        }
        validate_percentage("score", self.score)
    }
}

/// A graded quiz attempt. The recent average drives the tutor level.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PerformanceHistory {
    pub id: String,
    pub user_id: String,
    pub subject: String,
    pub quiz_id: Option<String>,
    pub score: f64,
    pub max_score: f64,
    pub percentage: f64,
    pub date_taken: NaiveDateTime,
}

#[derive(Debug, Clone)]
pub struct NewPerformanceHistory {
    pub user_id: String,
    pub subject: String,
    pub quiz_id: Option<String>,
    pub score: f64,
    pub max_score: f64,
    pub percentage: f64,
}

/// Accepts finite values in `0..=100`.
pub fn validate_percentage(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(Error::invalid_input(format!(
            "{field} must be between 0 and 100"
        )));
    }
    Ok(())
}
