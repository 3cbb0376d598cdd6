use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;

use smartedtech_core::activities::{Activity, ActivityRepositoryTrait, NewActivity};
use smartedtech_core::utils::now_naive;
use smartedtech_core::Result;

use super::model::ActivityDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::activities;
use crate::utils::{new_id, to_json_text};

/// Inserts one activity row on an open connection.
///
/// Other repositories call this from inside their own writer jobs so the
/// record and its activity commit together.
pub(crate) fn insert_activity(
    conn: &mut SqliteConnection,
    user_id: &str,
    activity: NewActivity,
) -> Result<Activity> {
    let row = ActivityDB {
        id: new_id(),
        user_id: user_id.to_string(),
        activity_type: activity.activity_type,
        description: activity.description,
        metadata: activity.metadata.as_ref().map(to_json_text).transpose()?,
        created_at: now_naive(),
    };
    let stored = diesel::insert_into(activities::table)
        .values(&row)
        .returning(ActivityDB::as_returning())
        .get_result(conn)
        .into_core()?;
    Activity::try_from(stored)
}

pub struct ActivityRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ActivityRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl ActivityRepositoryTrait for ActivityRepository {
    async fn append(&self, user_id: &str, activity: NewActivity) -> Result<Activity> {
        let user_id = user_id.to_string();
        self.writer
            .exec(move |conn| insert_activity(conn, &user_id, activity))
            .await
    }

    fn list_recent(&self, user_id: &str, limit: i64) -> Result<Vec<Activity>> {
        let mut conn = get_connection(&self.pool)?;
        activities::table
            .filter(activities::user_id.eq(user_id))
            .order((activities::created_at.desc(), activities::id.desc()))
            .limit(limit)
            .select(ActivityDB::as_select())
            .load::<ActivityDB>(&mut conn)
            .into_core()?
            .into_iter()
            .map(Activity::try_from)
            .collect()
    }
}
