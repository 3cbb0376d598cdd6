mod model;
mod repository;

pub use model::{PerformanceDB, PerformanceHistoryDB};
pub(crate) use repository::insert_history;
pub use repository::PerformanceRepository;
