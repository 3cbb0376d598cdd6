//! User repository and service traits.

use async_trait::async_trait;

use super::users_model::{NewUser, RegisterUser, User, UserCredentials};
use crate::activities::NewActivity;
use crate::errors::Result;

/// Persistence contract for users.
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    /// Inserts the user and appends `activity` for it in the same write.
    ///
    /// A duplicate email surfaces as a unique-constraint database error.
    async fn create(&self, new_user: NewUser, activity: NewActivity) -> Result<User>;

    fn get_by_id(&self, user_id: &str) -> Result<User>;

    /// Looks up a user by normalized email, including the password hash.
    fn find_credentials_by_email(&self, email: &str) -> Result<Option<UserCredentials>>;
}

/// One-way password hashing primitive.
pub trait PasswordHasherTrait: Send + Sync {
    fn hash(&self, password: &str) -> Result<String>;

    /// `Ok(false)` for a wrong password; `Err` only when the stored hash is unreadable.
    fn verify(&self, password: &str, password_hash: &str) -> Result<bool>;
}

#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn register(&self, input: RegisterUser) -> Result<User>;

    /// Checks credentials and records a login activity.
    async fn login(&self, email: &str, password: &str) -> Result<User>;

    fn get_user(&self, user_id: &str) -> Result<User>;
}
