//! Small helpers shared by the repositories.

use serde::de::DeserializeOwned;
use serde::Serialize;
use smartedtech_core::Result;
use uuid::Uuid;

use crate::errors::IntoCore;

/// Time-ordered primary key for a new row.
pub fn new_id() -> String {
    Uuid::now_v7().to_string()
}

/// Serializes a structured column into its JSON text form.
pub fn to_json_text<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string(value).into_core()
}

/// Reads a structured column back from JSON text.
pub fn from_json_text<T: DeserializeOwned>(text: &str) -> Result<T> {
    serde_json::from_str(text).into_core()
}
