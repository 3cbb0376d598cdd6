//! Dashboard module - per-user overview and performance recording.

mod dashboard_model;
mod dashboard_service;

pub use dashboard_model::DashboardSummary;
pub use dashboard_service::{DashboardService, DashboardServiceTrait};
