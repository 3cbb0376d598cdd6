//! Assignment domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Assignment {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub subject: String,
    pub description: Option<String>,
    pub due_date: NaiveDateTime,
    pub status: String,
    pub score: Option<f64>,
    pub created_at: NaiveDateTime,
}

/// Input model for creating an assignment. New assignments always start as pending.
#[derive(Debug, Clone)]
pub struct NewAssignment {
    pub user_id: String,
    pub title: String,
    pub subject: String,
    pub description: Option<String>,
    pub due_date: NaiveDateTime,
}

impl NewAssignment {
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::missing_field("title"));
        }
        if self.subject.trim().is_empty() {
            return Err(Error::missing_field("subject"));
        }
        Ok(())
    }
}

/// Partial update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct AssignmentUpdate {
    pub title: Option<String>,
    pub subject: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<NaiveDateTime>,
    pub status: Option<String>,
    pub score: Option<f64>,
}

impl AssignmentUpdate {
    /// Blank strings count as "not supplied".
    pub fn normalized(self) -> Self {
        fn keep(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.trim().is_empty())
        }
        Self {
            title: keep(self.title),
            subject: keep(self.subject),
            description: keep(self.description),
            due_date: self.due_date,
            status: keep(self.status),
            score: self.score,
        }
    }

    pub fn apply_to(&self, assignment: &mut Assignment) {
        if let Some(title) = &self.title {
            assignment.title = title.clone();
        }
        if let Some(subject) = &self.subject {
            assignment.subject = subject.clone();
        }
        if let Some(description) = &self.description {
            assignment.description = Some(description.clone());
        }
        if let Some(due_date) = self.due_date {
            assignment.due_date = due_date;
        }
        if let Some(status) = &self.status {
            assignment.status = status.clone();
        }
        if let Some(score) = self.score {
            assignment.score = Some(score);
        }
    }
}
