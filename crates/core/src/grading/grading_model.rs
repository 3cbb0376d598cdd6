//! Performance levels and booster tiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// Level used by adaptive practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PracticeLevel {
    Remedial,
    Standard,
    Advanced,
}

impl PracticeLevel {
    pub const ALL: [PracticeLevel; 3] = [
        PracticeLevel::Remedial,
        PracticeLevel::Standard,
        PracticeLevel::Advanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PracticeLevel::Remedial => "remedial",
            PracticeLevel::Standard => "standard",
            PracticeLevel::Advanced => "advanced",
        }
    }
}

impl fmt::Display for PracticeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PracticeLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "remedial" => Ok(PracticeLevel::Remedial),
            "standard" => Ok(PracticeLevel::Standard),
            "advanced" => Ok(PracticeLevel::Advanced),
            other => Err(Error::invalid_input(format!(
                "performance_level must be remedial, standard or advanced (got '{other}')"
            ))),
        }
    }
}

/// Level used by the personalized tutor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TutorLevel {
    Low,
    Medium,
    High,
}

impl TutorLevel {
    pub const ALL: [TutorLevel; 3] = [TutorLevel::Low, TutorLevel::Medium, TutorLevel::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            TutorLevel::Low => "low",
            TutorLevel::Medium => "medium",
            TutorLevel::High => "high",
        }
    }
}

impl fmt::Display for TutorLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TutorLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(TutorLevel::Low),
            "medium" => Ok(TutorLevel::Medium),
            "high" => Ok(TutorLevel::High),
            other => Err(Error::invalid_input(format!(
                "performance_level must be low, medium or high (got '{other}')"
            ))),
        }
    }
}

/// Grade bracket used by the booster composer. Tier 1 is the A range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BoosterTier {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
}

impl BoosterTier {
    pub const ALL: [BoosterTier; 4] = [
        BoosterTier::One,
        BoosterTier::Two,
        BoosterTier::Three,
        BoosterTier::Four,
    ];

    pub fn number(self) -> i32 {
        self as i32
    }

    pub fn from_number(n: i32) -> Option<Self> {
        match n {
            1 => Some(BoosterTier::One),
            2 => Some(BoosterTier::Two),
            3 => Some(BoosterTier::Three),
            4 => Some(BoosterTier::Four),
            _ => None,
        }
    }
}
