//! Database models for tutoring sessions.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use smartedtech_core::grading::TutorLevel;
use smartedtech_core::tutor::PersonalizedTutor;
use smartedtech_core::Error;

use crate::utils::from_json_text;

#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::personalized_tutors)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PersonalizedTutorDB {
    pub id: String,
    pub user_id: String,
    pub subject: String,
    pub performance_level: String,
    pub title: String,
    pub content: String,
    pub quiz_data: String,
    pub completed: bool,
    pub score: Option<f64>,
    pub created_at: NaiveDateTime,
}

impl TryFrom<PersonalizedTutorDB> for PersonalizedTutor {
    type Error = Error;

    fn try_from(db: PersonalizedTutorDB) -> Result<Self, Self::Error> {
        let performance_level = db.performance_level.parse::<TutorLevel>().map_err(|_| {
            Error::Unexpected(format!(
                "Stored tutor level '{}' is not recognised",
                db.performance_level
            ))
        })?;
        Ok(Self {
            quiz_data: from_json_text(&db.quiz_data)?,
            performance_level,
            id: db.id,
            user_id: db.user_id,
            subject: db.subject,
            title: db.title,
            content: db.content,
            completed: db.completed,
            score: db.score,
            created_at: db.created_at,
        })
    }
}
