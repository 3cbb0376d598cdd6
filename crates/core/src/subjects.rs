//! Subjects supported by the content-generation features.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
    Physics,
    Chemistry,
    Mathematics,
}

impl Subject {
    pub const ALL: [Subject; 3] = [Subject::Physics, Subject::Chemistry, Subject::Mathematics];

    /// Case-insensitive lookup; `maths` is accepted as an alias.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "physics" => Some(Subject::Physics),
            "chemistry" => Some(Subject::Chemistry),
            "mathematics" | "maths" => Some(Subject::Mathematics),
            _ => None,
        }
    }

    /// Like [`Subject::parse`] but reports the accepted values on failure.
    pub fn parse_required(raw: &str) -> Result<Self> {
        Self::parse(raw).ok_or_else(|| {
            Error::invalid_input("Subject must be Physics, Chemistry, or Mathematics")
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Subject::Physics => "Physics",
            Subject::Chemistry => "Chemistry",
            Subject::Mathematics => "Mathematics",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
