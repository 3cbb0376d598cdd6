mod model;
mod repository;

pub use model::PerformanceBoosterDB;
pub use repository::BoosterRepository;
