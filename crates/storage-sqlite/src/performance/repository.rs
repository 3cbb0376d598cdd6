use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;

use smartedtech_core::performance::{
    NewPerformance, NewPerformanceHistory, Performance, PerformanceHistory,
    PerformanceRepositoryTrait,
};
use smartedtech_core::utils::now_naive;
use smartedtech_core::Result;

use super::model::{PerformanceDB, PerformanceHistoryDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::{performance_history, performances};
use crate::utils::new_id;

/// Inserts one quiz history row on an open connection.
pub(crate) fn insert_history(
    conn: &mut SqliteConnection,
    history: NewPerformanceHistory,
) -> Result<PerformanceHistory> {
    let row = PerformanceHistoryDB {
        id: new_id(),
        user_id: history.user_id,
        subject: history.subject,
        quiz_id: history.quiz_id,
        score: history.score,
        max_score: history.max_score,
        percentage: history.percentage,
        date_taken: now_naive(),
    };
    let stored = diesel::insert_into(performance_history::table)
        .values(&row)
        .returning(PerformanceHistoryDB::as_returning())
        .get_result(conn)
        .into_core()?;
    Ok(PerformanceHistory::from(stored))
}

pub struct PerformanceRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl PerformanceRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl PerformanceRepositoryTrait for PerformanceRepository {
    async fn record(&self, new_performance: NewPerformance) -> Result<Performance> {
        self.writer
            .exec(move |conn| {
                let row = PerformanceDB {
                    id: new_id(),
                    user_id: new_performance.user_id,
                    subject: new_performance.subject,
                    score: new_performance.score,
                    date: now_naive(),
                };
                let stored = diesel::insert_into(performances::table)
                    .values(&row)
                    .returning(PerformanceDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Performance::from(stored))
            })
            .await
    }

    fn latest_for_subject(&self, user_id: &str, subject: &str) -> Result<Option<Performance>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(performances::table
            .filter(performances::user_id.eq(user_id))
            .filter(performances::subject.eq(subject))
            .order((performances::date.desc(), performances::id.desc()))
            .select(PerformanceDB::as_select())
            .first::<PerformanceDB>(&mut conn)
            .optional()
            .into_core()?
            .map(Performance::from))
    }

    fn list_recent_performances(&self, user_id: &str, limit: i64) -> Result<Vec<Performance>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(performances::table
            .filter(performances::user_id.eq(user_id))
            .order((performances::date.desc(), performances::id.desc()))
            .limit(limit)
            .select(PerformanceDB::as_select())
            .load::<PerformanceDB>(&mut conn)
            .into_core()?
            .into_iter()
            .map(Performance::from)
            .collect())
    }

    fn list_history(
        &self,
        user_id: &str,
        subject: Option<&str>,
        limit: Option<i64>,
    ) -> Result<Vec<PerformanceHistory>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = performance_history::table
            .filter(performance_history::user_id.eq(user_id))
            .order((
                performance_history::date_taken.desc(),
                performance_history::id.desc(),
            ))
            .select(PerformanceHistoryDB::as_select())
            .into_boxed();
        if let Some(subject) = subject {
            query = query.filter(performance_history::subject.eq(subject.to_string()));
        }
        if let Some(limit) = limit {
            query = query.limit(limit);
        }
        Ok(query
            .load::<PerformanceHistoryDB>(&mut conn)
            .into_core()?
            .into_iter()
            .map(PerformanceHistory::from)
            .collect())
    }
}
