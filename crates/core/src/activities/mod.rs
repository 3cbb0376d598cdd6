//! Activities module - the append-only user activity log.

mod activities_model;
mod activities_traits;

pub use activities_model::{Activity, NewActivity};
pub use activities_traits::ActivityRepositoryTrait;
