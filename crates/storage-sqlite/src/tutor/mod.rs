mod model;
mod repository;

pub use model::PersonalizedTutorDB;
pub use repository::TutorRepository;
