//! Database models for the activity log.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use smartedtech_core::activities::Activity;
use smartedtech_core::Error;

use crate::utils::from_json_text;

#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::activities)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ActivityDB {
    pub id: String,
    pub user_id: String,
    pub activity_type: String,
    pub description: String,
    pub metadata: Option<String>,
    pub created_at: NaiveDateTime,
}

impl TryFrom<ActivityDB> for Activity {
    type Error = Error;

    fn try_from(db: ActivityDB) -> Result<Self, Self::Error> {
        Ok(Self {
            metadata: db.metadata.as_deref().map(from_json_text).transpose()?,
            id: db.id,
            user_id: db.user_id,
            activity_type: db.activity_type,
            description: db.description,
            created_at: db.created_at,
        })
    }
}
