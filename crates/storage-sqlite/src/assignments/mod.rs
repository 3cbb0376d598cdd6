mod model;
mod repository;

pub use model::{AssignmentChangesDB, AssignmentDB};
pub use repository::AssignmentRepository;
