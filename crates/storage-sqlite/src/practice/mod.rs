mod model;
mod repository;

pub use model::AdaptivePracticeDB;
pub use repository::PracticeRepository;
