//! Database models for performance samples and quiz history.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use smartedtech_core::performance::{Performance, PerformanceHistory};

#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::performances)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PerformanceDB {
    pub id: String,
    pub user_id: String,
    pub subject: String,
    pub score: f64,
    pub date: NaiveDateTime,
}

#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::performance_history)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PerformanceHistoryDB {
    pub id: String,
    pub user_id: String,
    pub subject: String,
    pub quiz_id: Option<String>,
    pub score: f64,
    pub max_score: f64,
    pub percentage: f64,
    pub date_taken: NaiveDateTime,
}

impl From<PerformanceDB> for Performance {
    fn from(db: PerformanceDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            subject: db.subject,
            score: db.score,
            date: db.date,
        }
    }
}

impl From<PerformanceHistoryDB> for PerformanceHistory {
    fn from(db: PerformanceHistoryDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            subject: db.subject,
            quiz_id: db.quiz_id,
            score: db.score,
            max_score: db.max_score,
            percentage: db.percentage,
            date_taken: db.date_taken,
        }
    }
}
