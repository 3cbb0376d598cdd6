use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use smartedtech_core::performance::NewPerformanceHistory;
use smartedtech_core::tutor::{NewPersonalizedTutor, PersonalizedTutor, TutorRepositoryTrait};
use smartedtech_core::utils::now_naive;
use smartedtech_core::{Error, Result};

use super::model::PersonalizedTutorDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::performance::insert_history;
use crate::schema::personalized_tutors;
use crate::utils::{new_id, to_json_text};

pub struct TutorRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl TutorRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

fn not_found() -> Error {
    Error::NotFound("Tutor".to_string())
}

#[async_trait]
impl TutorRepositoryTrait for TutorRepository {
    async fn create(&self, new_tutor: NewPersonalizedTutor) -> Result<PersonalizedTutor> {
        self.writer
            .exec(move |conn| {
                let row = PersonalizedTutorDB {
                    id: new_id(),
                    user_id: new_tutor.user_id,
                    subject: new_tutor.subject,
                    performance_level: new_tutor.performance_level.as_str().to_string(),
                    title: new_tutor.title,
                    content: new_tutor.content,
                    quiz_data: to_json_text(&new_tutor.quiz_data)?,
                    completed: false,
                    score: None,
                    created_at: now_naive(),
                };
                let stored = diesel::insert_into(personalized_tutors::table)
                    .values(&row)
                    .returning(PersonalizedTutorDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                PersonalizedTutor::try_from(stored)
            })
            .await
    }

    fn get_by_id(&self, tutor_id: &str) -> Result<PersonalizedTutor> {
        let mut conn = get_connection(&self.pool)?;
        personalized_tutors::table
            .find(tutor_id)
            .select(PersonalizedTutorDB::as_select())
            .first::<PersonalizedTutorDB>(&mut conn)
            .optional()
            .into_core()?
            .ok_or_else(not_found)
            .and_then(PersonalizedTutor::try_from)
    }

    fn list_for_user(&self, user_id: &str) -> Result<Vec<PersonalizedTutor>> {
        let mut conn = get_connection(&self.pool)?;
        personalized_tutors::table
            .filter(personalized_tutors::user_id.eq(user_id))
            .order((
                personalized_tutors::created_at.desc(),
                personalized_tutors::id.desc(),
            ))
            .select(PersonalizedTutorDB::as_select())
            .load::<PersonalizedTutorDB>(&mut conn)
            .into_core()?
            .into_iter()
            .map(PersonalizedTutor::try_from)
            .collect()
    }

    async fn complete_quiz(
        &self,
        tutor_id: &str,
        score: f64,
        history: NewPerformanceHistory,
    ) -> Result<PersonalizedTutor> {
        let tutor_id = tutor_id.to_string();
        self.writer
            .exec(move |conn| {
                let stored = diesel::update(personalized_tutors::table.find(&tutor_id))
                    .set((
                        personalized_tutors::completed.eq(true),
                        personalized_tutors::score.eq(Some(score)),
                    ))
                    .returning(PersonalizedTutorDB::as_returning())
                    .get_result(conn)
                    .optional()
                    .into_core()?
                    .ok_or_else(not_found)?;
                insert_history(conn, history)?;
                PersonalizedTutor::try_from(stored)
            })
            .await
    }
}
