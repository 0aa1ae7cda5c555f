//! User registration and lookup.

use entities::{ObjectId, User};
use exercise_store::ExerciseStore;

use crate::error::{ServerError, ServerResult};

/// Creates and looks up users.
pub struct UserDirectory<'a, S: ExerciseStore> {
    store: &'a S,
}

impl<'a, S: ExerciseStore> UserDirectory<'a, S> {
    /// Creates a user directory over `store`.
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Registers a user. `username` must already be validated.
    pub async fn create_user(&self, username: &str) -> ServerResult<User> {
        let user = self.store.create_user(username).await?;

        tracing::info!(user_id = %user.id, username = %user.username, "User created");

        Ok(user)
    }

    /// Lists every user in store order.
    pub async fn list_users(&self) -> ServerResult<Vec<User>> {
        Ok(self.store.list_users().await?)
    }

    /// Resolves a user by a well-formed ID.
    pub async fn get_user(&self, id: ObjectId) -> ServerResult<User> {
        self.store
            .get_user(id)
            .await?
            .ok_or(ServerError::UserNotFound(id))
    }
}
