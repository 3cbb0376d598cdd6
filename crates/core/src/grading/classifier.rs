//! Grade classification rules.
//!
//! Every function here is pure and total. A value sitting exactly on a
//! breakpoint belongs to the higher bracket.

use super::grading_model::{BoosterTier, PracticeLevel, TutorLevel};

const PRACTICE_ADVANCED_MIN: f64 = 85.0;
const PRACTICE_STANDARD_MIN: f64 = 70.0;

const BOOSTER_TIER_1_MIN: f64 = 90.0;
const BOOSTER_TIER_2_MIN: f64 = 80.0;
const BOOSTER_TIER_3_MIN: f64 = 70.0;

const TUTOR_MEDIUM_MIN: f64 = 60.0;
const TUTOR_HIGH_MIN: f64 = 85.0;

/// Maps the latest subject score to an adaptive-practice level.
///
/// Without a score the student is treated as `standard`.
pub fn classify_practice_level(score: Option<f64>) -> PracticeLevel {
    match score {
        None => PracticeLevel::Standard,
        Some(s) if s >= PRACTICE_ADVANCED_MIN => PracticeLevel::Advanced,
        Some(s) if s >= PRACTICE_STANDARD_MIN => PracticeLevel::Standard,
        Some(_) => PracticeLevel::Remedial,
    }
}

impl BoosterTier {
    /// Maps an assignment grade to its booster tier.
    pub fn from_grade(grade: f64) -> Self {
        if grade >= BOOSTER_TIER_1_MIN {
            BoosterTier::One
        } else if grade >= BOOSTER_TIER_2_MIN {
            BoosterTier::Two
        } else if grade >= BOOSTER_TIER_3_MIN {
            BoosterTier::Three
        } else {
            BoosterTier::Four
        }
    }
}

/// Averages recent quiz percentages into a tutor level.
///
/// Callers pass the most recent window of history; an empty window is `medium`.
pub fn classify_tutor_level(percentages: &[f64]) -> TutorLevel {
    if percentages.is_empty() {
        return TutorLevel::Medium;
    }
    let average = percentages.iter().sum::<f64>() / percentages.len() as f64;
    if average < TUTOR_MEDIUM_MIN {
        TutorLevel::Low
    } else if average < TUTOR_HIGH_MIN {
        TutorLevel::Medium
    } else {
        TutorLevel::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn practice_level_breakpoints() {
        assert_eq!(classify_practice_level(Some(100.0)), PracticeLevel::Advanced);
        assert_eq!(classify_practice_level(Some(85.0)), PracticeLevel::Advanced);
        assert_eq!(classify_practice_level(Some(84.99)), PracticeLevel::Standard);
        assert_eq!(classify_practice_level(Some(70.0)), PracticeLevel::Standard);
        assert_eq!(classify_practice_level(Some(69.99)), PracticeLevel::Remedial);
        assert_eq!(classify_practice_level(Some(0.0)), PracticeLevel::Remedial);
    }

    #[test]
    fn practice_level_defaults_to_standard() {
        assert_eq!(classify_practice_level(None), PracticeLevel::Standard);
    }

    #[test]
    fn booster_tier_breakpoints() {
        assert_eq!(BoosterTier::from_grade(92.0), BoosterTier::One);
        assert_eq!(BoosterTier::from_grade(90.0), BoosterTier::One);
        assert_eq!(BoosterTier::from_grade(89.9), BoosterTier::Two);
        assert_eq!(BoosterTier::from_grade(80.0), BoosterTier::Two);
        assert_eq!(BoosterTier::from_grade(79.9), BoosterTier::Three);
        assert_eq!(BoosterTier::from_grade(70.0), BoosterTier::Three);
        assert_eq!(BoosterTier::from_grade(69.9), BoosterTier::Four);
        assert_eq!(BoosterTier::from_grade(0.0), BoosterTier::Four);
    }

    #[test]
    fn tutor_level_uses_average() {
        assert_eq!(classify_tutor_level(&[]), TutorLevel::Medium);
        assert_eq!(classify_tutor_level(&[50.0, 60.0, 65.0]), TutorLevel::Low);
        assert_eq!(classify_tutor_level(&[60.0]), TutorLevel::Medium);
        assert_eq!(classify_tutor_level(&[80.0, 90.0]), TutorLevel::High);
        assert_eq!(classify_tutor_level(&[84.0, 85.0]), TutorLevel::Medium);
    }
}
