//! Performance boosters module - tiered study plans for graded assignments.

mod booster_content;
mod boosters_model;
mod boosters_service;
mod boosters_traits;

pub use booster_content::{compose_booster, format_grade};
pub use boosters_model::{
    AssessmentQuestion, BoosterAssessment, BoosterContent, BoosterRequest, BoosterResource,
    NewPerformanceBooster, PerformanceBooster,
};
pub use boosters_service::BoosterService;
pub use boosters_traits::{BoosterRepositoryTrait, BoosterServiceTrait};
