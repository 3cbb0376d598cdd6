//! Grading module - levels, tiers and the rules that derive them.

mod classifier;
mod grading_model;

pub use classifier::{classify_practice_level, classify_tutor_level};
pub use grading_model::{BoosterTier, PracticeLevel, TutorLevel};
