//! Database models for performance boosters.
//!
//! Strategy, resource and assessment lists are stored as JSON text columns.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use smartedtech_core::boosters::PerformanceBooster;
use smartedtech_core::Error;

use crate::utils::from_json_text;

#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::performance_boosters)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PerformanceBoosterDB {
    pub id: String,
    pub user_id: String,
    pub assignment_id: String,
    pub subject: String,
    pub assignment_title: String,
    pub grade: f64,
    pub feedback: Option<String>,
    pub tier: i32,
    pub diagnostic_summary: String,
    pub strategies: String,
    pub resources: String,
    pub assessment: String,
    pub created_at: NaiveDateTime,
}

impl TryFrom<PerformanceBoosterDB> for PerformanceBooster {
    type Error = Error;

    fn try_from(db: PerformanceBoosterDB) -> Result<Self, Self::Error> {
        Ok(Self {
            strategies: from_json_text(&db.strategies)?,
            resources: from_json_text(&db.resources)?,
            assessment: from_json_text(&db.assessment)?,
            id: db.id,
            user_id: db.user_id,
            assignment_id: db.assignment_id,
            subject: db.subject,
            assignment_title: db.assignment_title,
            grade: db.grade,
            feedback: db.feedback,
            tier: db.tier,
            diagnostic_summary: db.diagnostic_summary,
            created_at: db.created_at,
        })
    }
}
