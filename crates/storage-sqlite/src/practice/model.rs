//! Database models for adaptive practice.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use smartedtech_core::grading::PracticeLevel;
use smartedtech_core::practice::AdaptivePractice;
use smartedtech_core::{Error, Result};

use crate::utils::{from_json_text, to_json_text};

#[derive(
    Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Debug, Clone,
)]
#[diesel(table_name = crate::schema::adaptive_practices)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AdaptivePracticeDB {
    pub id: String,
    pub user_id: String,
    pub subject: String,
    pub performance_level: String,
    pub title: String,
    pub description: String,
    pub content: String,
    pub resources: String,
    pub completed: bool,
    pub created_at: NaiveDateTime,
}

impl AdaptivePracticeDB {
    pub fn from_domain(practice: &AdaptivePractice) -> Result<Self> {
        Ok(Self {
            id: practice.id.clone(),
            user_id: practice.user_id.clone(),
            subject: practice.subject.clone(),
            performance_level: practice.performance_level.as_str().to_string(),
            title: practice.title.clone(),
            description: practice.description.clone(),
            content: practice.content.clone(),
            resources: to_json_text(&practice.resources)?,
            completed: practice.completed,
            created_at: practice.created_at,
        })
    }
}

impl TryFrom<AdaptivePracticeDB> for AdaptivePractice {
    type Error = Error;

    fn try_from(db: AdaptivePracticeDB) -> Result<Self> {
        let performance_level = db
            .performance_level
            .parse::<PracticeLevel>()
            .map_err(|_| {
                Error::Unexpected(format!(
                    "Stored practice level '{}' is not recognised",
                    db.performance_level
                ))
            })?;
        Ok(Self {
            resources: from_json_text(&db.resources)?,
            performance_level,
            id: db.id,
            user_id: db.user_id,
            subject: db.subject,
            title: db.title,
            description: db.description,
            content: db.content,
            completed: db.completed,
            created_at: db.created_at,
        })
    }
}
