use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use smartedtech_core::boosters::{
    BoosterRepositoryTrait, NewPerformanceBooster, PerformanceBooster,
};
use smartedtech_core::utils::now_naive;
use smartedtech_core::{Error, Result};

use super::model::PerformanceBoosterDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::performance_boosters;
use crate::utils::{new_id, to_json_text};

pub struct BoosterRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl BoosterRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl BoosterRepositoryTrait for BoosterRepository {
    async fn create(&self, new_booster: NewPerformanceBooster) -> Result<PerformanceBooster> {
        self.writer
            .exec(move |conn| {
                let content = new_booster.content;
                let row = PerformanceBoosterDB {
                    id: new_id(),
                    user_id: new_booster.user_id,
                    assignment_id: new_booster.assignment_id,
                    subject: new_booster.subject,
                    assignment_title: new_booster.assignment_title,
                    grade: new_booster.grade,
                    feedback: new_booster.feedback,
                    tier: new_booster.tier,
                    diagnostic_summary: content.diagnostic_summary,
                    strategies: to_json_text(&content.strategies)?,
                    resources: to_json_text(&content.resources)?,
                    assessment: to_json_text(&content.assessment)?,
                    created_at: now_naive(),
                };
                let stored = diesel::insert_into(performance_boosters::table)
                    .values(&row)
                    .returning(PerformanceBoosterDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                PerformanceBooster::try_from(stored)
            })
            .await
    }

    fn get_by_id(&self, booster_id: &str) -> Result<PerformanceBooster> {
        let mut conn = get_connection(&self.pool)?;
        performance_boosters::table
            .find(booster_id)
            .select(PerformanceBoosterDB::as_select())
            .first::<PerformanceBoosterDB>(&mut conn)
            .optional()
            .into_core()?
            .ok_or_else(|| Error::NotFound("Booster".to_string()))
            .and_then(PerformanceBooster::try_from)
    }

    fn list_for_user(&self, user_id: &str) -> Result<Vec<PerformanceBooster>> {
        let mut conn = get_connection(&self.pool)?;
        performance_boosters::table
            .filter(performance_boosters::user_id.eq(user_id))
            .order((
                performance_boosters::created_at.desc(),
                performance_boosters::id.desc(),
            ))
            .select(PerformanceBoosterDB::as_select())
            .load::<PerformanceBoosterDB>(&mut conn)
            .into_core()?
            .into_iter()
            .map(PerformanceBooster::try_from)
            .collect()
    }
}
