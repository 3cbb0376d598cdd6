//! Adaptive practice domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::grading::PracticeLevel;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdaptivePractice {
    pub id: String,
    pub user_id: String,
    pub subject: String,
    pub performance_level: PracticeLevel,
    pub title: String,
    pub description: String,
    pub content: String,
    pub resources: Vec<String>,
    pub completed: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone)]
pub struct NewAdaptivePractice {
    pub user_id: String,
    pub subject: String,
    pub performance_level: PracticeLevel,
    pub title: String,
    pub description: String,
    pub content: String,
    pub resources: Vec<String>,
    pub completed: bool,
}

impl NewAdaptivePractice {
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("user_id", &self.user_id),
            ("subject", &self.subject),
            ("title", &self.title),
        ] {
            if value.trim().is_empty() {
                return Err(Error::missing_field(field));
            }
        }
        Ok(())
    }
}

/// Partial update; `None` keeps the stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdaptivePracticeUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub resources: Option<Vec<String>>,
    pub completed: Option<bool>,
    pub performance_level: Option<PracticeLevel>,
}

impl AdaptivePracticeUpdate {
    pub fn apply_to(&self, practice: &mut AdaptivePractice) {
        if let Some(title) = &self.title {
            practice.title = title.clone();
        }
        if let Some(description) = &self.description {
            practice.description = description.clone();
        }
        if let Some(content) = &self.content {
            practice.content = content.clone();
        }
        if let Some(resources) = &self.resources {
            practice.resources = resources.clone();
        }
        if let Some(completed) = self.completed {
            practice.completed = completed;
        }
        if let Some(level) = self.performance_level {
            practice.performance_level = level;
        }
    }
}
