mod model;
mod repository;

pub use model::ActivityDB;
pub(crate) use repository::insert_activity;
pub use repository::ActivityRepository;
