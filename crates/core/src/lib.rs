//! Smart EdTech Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic of the Smart EdTech backend:
//! grading rules, the booster composer, and the services behind every API
//! route. It is database-agnostic and defines repository traits that are
//! implemented by the `storage-sqlite` crate. Content generation is reached
//! through [`generation::ContentGeneratorTrait`], implemented by the `ai` crate.

pub mod activities;
pub mod assignments;
pub mod boosters;
pub mod constants;
pub mod dashboard;
pub mod errors;
pub mod generation;
pub mod grading;
pub mod performance;
pub mod practice;
pub mod subjects;
pub mod tutor;
pub mod users;
pub mod utils;

#[cfg(any(test, feature = "memory-store"))]
pub mod memory;

pub use subjects::Subject;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
