//! SQLite storage implementation for SmartEdTech.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `smartedtech-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for all domain entities
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies exist.
//! The core crate is database-agnostic and works with traits.
//!
//! ```text
//!      core (domain)
//!            │
//!            ▼
//!  storage-sqlite (this crate)
//!            │
//!            ▼
//!        SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;

// Repository implementations
pub mod activities;
pub mod assignments;
pub mod boosters;
pub mod performance;
pub mod practice;
pub mod tutor;
pub mod users;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

pub use activities::ActivityRepository;
pub use assignments::AssignmentRepository;
pub use boosters::BoosterRepository;
pub use performance::PerformanceRepository;
pub use practice::PracticeRepository;
pub use tutor::TutorRepository;
pub use users::UserRepository;

// Re-export from smartedtech-core for convenience
pub use smartedtech_core::errors::{DatabaseError, Error, Result};
