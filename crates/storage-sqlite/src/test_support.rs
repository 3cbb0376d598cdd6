//! Temporary database fixture shared by repository tests.

use std::sync::Arc;

use smartedtech_core::activities::NewActivity;
use smartedtech_core::users::{NewUser, User, UserRepositoryTrait};
use tempfile::{tempdir, TempDir};

use crate::db::{create_pool, init, run_migrations, spawn_writer, DbPool, WriteHandle};
use crate::users::UserRepository;

pub(crate) struct TestDb {
    pub pool: Arc<DbPool>,
    pub writer: WriteHandle,
    _dir: TempDir,
}

/// Must run inside a Tokio runtime; the writer actor is spawned on it.
pub(crate) fn setup() -> TestDb {
    let dir = tempdir().expect("Failed to create temp directory");
    let db_path = dir.path().join("test.db").to_string_lossy().to_string();
    init(&db_path).expect("Failed to initialise database");
    let pool = create_pool(&db_path).expect("Failed to create pool");
    run_migrations(&pool).expect("Failed to run migrations");
    let writer = spawn_writer((*pool).clone());
    TestDb {
        pool,
        writer,
        _dir: dir,
    }
}

impl TestDb {
    pub async fn seed_user(&self, email: &str) -> User {
        UserRepository::new(Arc::clone(&self.pool), self.writer.clone())
            .create(
                NewUser {
                    name: "Test Student".to_string(),
                    email: email.to_string(),
                    password_hash: "hash".to_string(),
                    avatar: None,
                },
                NewActivity::account_created("Test Student"),
            )
            .await
            .expect("Failed to seed user")
    }
}
