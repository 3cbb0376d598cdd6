//! Adaptive practice module - domain models, services, and traits.

mod practice_model;
mod practice_service;
mod practice_traits;

pub use practice_model::{AdaptivePractice, AdaptivePracticeUpdate, NewAdaptivePractice};
pub use practice_service::PracticeService;
pub use practice_traits::{PracticeRepositoryTrait, PracticeServiceTrait};
