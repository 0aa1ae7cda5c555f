//! In-memory exercise store implementation.

use std::sync::Arc;

use async_trait::async_trait;
use entities::{ExerciseEntry, ObjectId, User};
use tokio::sync::RwLock;

use crate::{ExerciseQuery, ExerciseStore, NewExercise, StoreError, StoreResult};

/// In-memory exercise store. Collections are kept in insertion order.
#[derive(Debug, Default, Clone)]
pub struct MemoryExerciseStore {
    users: Arc<RwLock<Vec<User>>>,
    exercises: Arc<RwLock<Vec<ExerciseEntry>>>,
}

impl MemoryExerciseStore {
    /// Creates a new in-memory exercise store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ExerciseStore for MemoryExerciseStore {
    // =========================================================================
    // User operations
    // =========================================================================

    async fn create_user(&self, username: &str) -> StoreResult<User> {
        let user = User::new(username);
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.id == user.id) {
            return Err(StoreError::already_exists("User", user.id.to_string()));
        }
        users.push(user.clone());
        Ok(user)
    }

    async fn list_users(&self) -> StoreResult<Vec<User>> {
        let users = self.users.read().await;
        Ok(users.clone())
    }

    async fn get_user(&self, id: ObjectId) -> StoreResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    // =========================================================================
    // Exercise operations
    // =========================================================================

    async fn create_exercise(&self, exercise: NewExercise) -> StoreResult<ExerciseEntry> {
        let entry = ExerciseEntry::new(
            exercise.user_id,
            exercise.description,
            exercise.duration,
            exercise.date,
        );
        let mut exercises = self.exercises.write().await;
        if exercises.iter().any(|e| e.id == entry.id) {
            return Err(StoreError::already_exists(
                "ExerciseEntry",
                entry.id.to_string(),
            ));
        }
        exercises.push(entry.clone());
        Ok(entry)
    }

    async fn find_exercises(&self, query: &ExerciseQuery) -> StoreResult<Vec<ExerciseEntry>> {
        let exercises = self.exercises.read().await;
        let limit = query.limit.map_or(usize::MAX, |limit| limit as usize);

        Ok(exercises
            .iter()
            .filter(|e| query.matches(e))
            .take(limit)
            .cloned()
            .collect())
    }
}
