//! Users module - accounts, credentials and password hashing seam.

mod users_model;
mod users_service;
mod users_traits;

pub use users_model::{normalize_email, NewUser, RegisterUser, User, UserCredentials};
pub use users_service::UserService;
pub use users_traits::{PasswordHasherTrait, UserRepositoryTrait, UserServiceTrait};
