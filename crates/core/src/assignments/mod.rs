//! Assignments module - domain models, services, and traits.

mod assignments_model;
mod assignments_service;
mod assignments_traits;

pub use assignments_model::{Assignment, AssignmentUpdate, NewAssignment};
pub use assignments_service::AssignmentService;
pub use assignments_traits::{AssignmentRepositoryTrait, AssignmentServiceTrait};
