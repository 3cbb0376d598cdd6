use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use smartedtech_core::practice::{
    AdaptivePractice, AdaptivePracticeUpdate, NewAdaptivePractice, PracticeRepositoryTrait,
};
use smartedtech_core::utils::now_naive;
use smartedtech_core::{Error, Result};

use super::model::AdaptivePracticeDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::adaptive_practices;
use crate::utils::{new_id, to_json_text};

pub struct PracticeRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl PracticeRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

fn not_found() -> Error {
    Error::NotFound("Adaptive practice".to_string())
}

#[async_trait]
impl PracticeRepositoryTrait for PracticeRepository {
    async fn create(&self, new_practice: NewAdaptivePractice) -> Result<AdaptivePractice> {
        self.writer
            .exec(move |conn| {
                let row = AdaptivePracticeDB {
                    id: new_id(),
                    user_id: new_practice.user_id,
                    subject: new_practice.subject,
                    performance_level: new_practice.performance_level.as_str().to_string(),
                    title: new_practice.title,
                    description: new_practice.description,
                    content: new_practice.content,
                    resources: to_json_text(&new_practice.resources)?,
                    completed: new_practice.completed,
                    created_at: now_naive(),
                };
                let stored = diesel::insert_into(adaptive_practices::table)
                    .values(&row)
                    .returning(AdaptivePracticeDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                AdaptivePractice::try_from(stored)
            })
            .await
    }

    fn get_by_id(&self, practice_id: &str) -> Result<AdaptivePractice> {
        let mut conn = get_connection(&self.pool)?;
        adaptive_practices::table
            .find(practice_id)
            .select(AdaptivePracticeDB::as_select())
            .first::<AdaptivePracticeDB>(&mut conn)
            .optional()
            .into_core()?
            .ok_or_else(not_found)
            .and_then(AdaptivePractice::try_from)
    }

    fn list_for_user(
        &self,
        user_id: &str,
        subject: Option<&str>,
    ) -> Result<Vec<AdaptivePractice>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = adaptive_practices::table
            .filter(adaptive_practices::user_id.eq(user_id))
            .order((
                adaptive_practices::created_at.desc(),
                adaptive_practices::id.desc(),
            ))
            .select(AdaptivePracticeDB::as_select())
            .into_boxed();
        if let Some(subject) = subject {
            query = query.filter(adaptive_practices::subject.eq(subject.to_string()));
        }
        query
            .load::<AdaptivePracticeDB>(&mut conn)
            .into_core()?
            .into_iter()
            .map(AdaptivePractice::try_from)
            .collect()
    }

    async fn update(
        &self,
        practice_id: &str,
        changes: AdaptivePracticeUpdate,
    ) -> Result<AdaptivePractice> {
        let practice_id = practice_id.to_string();
        self.writer
            .exec(move |conn| {
                let existing = adaptive_practices::table
                    .find(&practice_id)
                    .select(AdaptivePracticeDB::as_select())
                    .first::<AdaptivePracticeDB>(conn)
                    .optional()
                    .into_core()?
                    .ok_or_else(not_found)?;

                let mut practice = AdaptivePractice::try_from(existing)?;
                changes.apply_to(&mut practice);
                let row = AdaptivePracticeDB::from_domain(&practice)?;

                let stored = diesel::update(adaptive_practices::table.find(&practice_id))
                    .set(&row)
                    .returning(AdaptivePracticeDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                AdaptivePractice::try_from(stored)
            })
            .await
    }

    async fn delete(&self, practice_id: &str) -> Result<usize> {
        let practice_id = practice_id.to_string();
        self.writer
            .exec(move |conn| {
                diesel::delete(adaptive_practices::table.find(&practice_id))
                    .execute(conn)
                    .into_core()
            })
            .await
    }
}
