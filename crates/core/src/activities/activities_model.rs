//! Activity log domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::{
    ACTIVITY_ACCOUNT_CREATED, ACTIVITY_ASSIGNMENT_CREATED, ACTIVITY_ASSIGNMENT_UPDATED,
    ACTIVITY_LOGIN,
};

/// Append-only record of something a user did.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    pub id: String,
    pub user_id: String,
    pub activity_type: String,
    pub description: String,
    pub metadata: Option<Value>,
    pub created_at: NaiveDateTime,
}

/// Activity entry to append. The owning user is supplied by the write that
/// records it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewActivity {
    pub activity_type: String,
    pub description: String,
    pub metadata: Option<Value>,
}

impl NewActivity {
    pub fn new(activity_type: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            activity_type: activity_type.into(),
            description: description.into(),
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, metadata: Value) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn account_created(user_name: &str) -> Self {
        Self::new(
            ACTIVITY_ACCOUNT_CREATED,
            format!("Account created for {user_name}"),
        )
    }

    pub fn login(user_name: &str) -> Self {
        Self::new(ACTIVITY_LOGIN, format!("{user_name} logged in"))
    }

    pub fn assignment_created(title: &str) -> Self {
        Self::new(
            ACTIVITY_ASSIGNMENT_CREATED,
            format!("Assignment created: {title}"),
        )
    }

    pub fn assignment_updated(title: &str) -> Self {
        Self::new(
            ACTIVITY_ASSIGNMENT_UPDATED,
            format!("Assignment updated: {title}"),
        )
    }
}
