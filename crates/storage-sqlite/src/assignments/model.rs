//! Database models for assignments.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use smartedtech_core::assignments::{Assignment, AssignmentUpdate};

#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::assignments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AssignmentDB {
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

/// Changed columns only; `None` fields are skipped by Diesel.
#[derive(AsChangeset, Debug, Default)]
#[diesel(table_name = crate::schema::assignments)]
pub struct AssignmentChangesDB {
    pub title: Option<String>,
    pub subject: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<NaiveDateTime>,
    pub status: Option<String>,
    pub score: Option<f64>,
}

impl AssignmentChangesDB {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.subject.is_none()
            && self.description.is_none()
            && self.due_date.is_none()
            && self.status.is_none()
            && self.score.is_none()
    }
}

impl From<AssignmentUpdate> for AssignmentChangesDB {
    fn from(update: AssignmentUpdate) -> Self {
        Self {
            title: update.title,
            subject: update.subject,
            description: update.description,
            due_date: update.due_date,
            status: update.status,
            score: update.score,
        }
    }
}

impl From<AssignmentDB> for Assignment {
    fn from(db: AssignmentDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            title: db.title,
            subject: db.subject,
            description: db.description,
            due_date: db.due_date,
            status: db.status,
            score: db.score,
            created_at: db.created_at,
        }
    }
}
