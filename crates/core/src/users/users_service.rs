use log::{debug, info};
use std::sync::Arc;

use super::users_model::{normalize_email, NewUser, RegisterUser, User};
use super::users_traits::{PasswordHasherTrait, UserRepositoryTrait, UserServiceTrait};
use crate::activities::{ActivityRepositoryTrait, NewActivity};
use crate::errors::{Error, Result};

/// Registration, login and lookup of users.
pub struct UserService {
    repository: Arc<dyn UserRepositoryTrait>,
    activity_repository: Arc<dyn ActivityRepositoryTrait>,
    password_hasher: Arc<dyn PasswordHasherTrait>,
}

impl UserService {
    pub fn new(
        repository: Arc<dyn UserRepositoryTrait>,
        activity_repository: Arc<dyn ActivityRepositoryTrait>,
        password_hasher: Arc<dyn PasswordHasherTrait>,
    ) -> Self {
        Self {
            repository,
            activity_repository,
            password_hasher,
        }
    }
}

#[async_trait::async_trait]
impl UserServiceTrait for UserService {
    async fn register(&self, input: RegisterUser) -> Result<User> {
        input.validate()?;
        let email = normalize_email(&input.email);

        if self.repository.find_credentials_by_email(&email)?.is_some() {
            return Err(Error::Conflict("User already exists".to_string()));
        }

        let name = input.name.trim().to_string();
        let new_user = NewUser {
            password_hash: self.password_hasher.hash(&input.password)?,
            email,
            avatar: input.avatar.filter(|a| !a.trim().is_empty()),
            name,
        };
        let activity = NewActivity::account_created(&new_user.name);

        let user = self.repository.create(new_user, activity).await?;
        info!("Registered user {}", user.id);
        Ok(user)
    }

    async fn login(&self, email: &str, password: &str) -> Result<User> {
        let credentials = self
            .repository
            .find_credentials_by_email(&normalize_email(email))?
            .ok_or(Error::InvalidCredentials)?;

        if !self
            .password_hasher
            .verify(password, &credentials.password_hash)?
        {
            debug!("Password mismatch for user {}", credentials.user.id);
            return Err(Error::InvalidCredentials);
        }

        let user = credentials.user;
        self.activity_repository
            .append(&user.id, NewActivity::login(&user.name))
            .await?;
        Ok(user)
    }

    fn get_user(&self, user_id: &str) -> Result<User> {
        self.repository.get_by_id(user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryStore;

    /// Reversible stand-in so tests stay fast.
    struct PlainHasher;

    impl PasswordHasherTrait for PlainHasher {
        fn hash(&self, password: &str) -> Result<String> {
            Ok(format!("plain${password}"))
        }

        fn verify(&self, password: &str, password_hash: &str) -> Result<bool> {
            Ok(password_hash == format!("plain${password}"))
        }
    }

    fn service(store: &Arc<InMemoryStore>) -> UserService {
        UserService::new(store.clone(), store.clone(), Arc::new(PlainHasher))
    }

    fn register_input(email: &str) -> RegisterUser {
        RegisterUser {
            name: "Ada Lovelace".into(),
            email: email.into(),
            password: "analytical".into(),
            avatar: None,
        }
    }

    #[tokio::test]
    async fn register_logs_account_created() {
        let store = Arc::new(InMemoryStore::new());
        let user = service(&store)
            .register(register_input("Ada@Example.com "))
            .await
            .unwrap();

        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.level, 1);

        let activities = store.list_recent(&user.id, 10).unwrap();
        assert_eq!(activities.len(), 1);
        assert_eq!(activities[0].activity_type, "account_created");
    }

    #[tokio::test]
    async fn register_rejects_duplicate_email() {
        let store = Arc::new(InMemoryStore::new());
        let svc = service(&store);
        svc.register(register_input("ada@example.com")).await.unwrap();

        let err = svc
            .register(register_input("ADA@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Conflict(_)));
    }

    #[tokio::test]
    async fn login_checks_password_and_logs() {
        let store = Arc::new(InMemoryStore::new());
        let svc = service(&store);
        let user = svc.register(register_input("ada@example.com")).await.unwrap();

        let err = svc.login("ada@example.com", "wrong").await.unwrap_err();
        assert!(matches!(err, Error::InvalidCredentials));

        let err = svc.login("nobody@example.com", "analytical").await.unwrap_err();
        assert!(matches!(err, Error::InvalidCredentials));

        let logged_in = svc.login("ada@example.com", "analytical").await.unwrap();
        assert_eq!(logged_in.id, user.id);
        let activities = store.list_recent(&user.id, 10).unwrap();
        assert_eq!(activities[0].activity_type, "login");
    }
}
