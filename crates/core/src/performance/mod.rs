//! Performance module - score samples and quiz history.

mod performance_model;
mod performance_traits;

pub use performance_model::{
    validate_percentage, NewPerformance, NewPerformanceHistory, Performance, PerformanceHistory,
};
pub use performance_traits::PerformanceRepositoryTrait;
