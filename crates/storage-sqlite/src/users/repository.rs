use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use smartedtech_core::activities::NewActivity;
use smartedtech_core::constants::DEFAULT_USER_LEVEL;
use smartedtech_core::users::{normalize_email, NewUser, User, UserCredentials, UserRepositoryTrait};
use smartedtech_core::utils::now_naive;
use smartedtech_core::{Error, Result};

use super::model::UserDB;
use crate::activities::insert_activity;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::users;
use crate::utils::new_id;

pub struct UserRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl UserRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    async fn create(&self, new_user: NewUser, activity: NewActivity) -> Result<User> {
        self.writer
            .exec(move |conn| {
                let row = UserDB {
                    id: new_id(),
                    name: new_user.name,
                    email: normalize_email(&new_user.email),
                    password_hash: new_user.password_hash,
                    avatar: new_user.avatar,
                    level: DEFAULT_USER_LEVEL,
                    created_at: now_naive(),
                };
                let stored = diesel::insert_into(users::table)
                    .values(&row)
                    .returning(UserDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                insert_activity(conn, &stored.id, activity)?;
                Ok(User::from(stored))
            })
            .await
    }

    fn get_by_id(&self, user_id: &str) -> Result<User> {
        let mut conn = get_connection(&self.pool)?;
        users::table
            .find(user_id)
            .select(UserDB::as_select())
            .first::<UserDB>(&mut conn)
            .optional()
            .into_core()?
            .map(User::from)
            .ok_or_else(|| Error::NotFound("User".to_string()))
    }

    fn find_credentials_by_email(&self, email: &str) -> Result<Option<UserCredentials>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(users::table
            .filter(users::email.eq(normalize_email(email)))
            .select(UserDB::as_select())
            .first::<UserDB>(&mut conn)
            .optional()
            .into_core()?
            .map(UserCredentials::from))
    }
}
