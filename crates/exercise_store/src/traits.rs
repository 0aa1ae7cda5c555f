//! Exercise store trait definitions.

use async_trait::async_trait;
use chrono::NaiveDate;
use entities::{ExerciseEntry, ObjectId, User};

use crate::StoreResult;

/// Fields of an exercise entry that is about to be stored. The store
/// assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExercise {
    /// Owning user.
    pub user_id: ObjectId,
    /// What was done.
    pub description: String,
    /// Duration in minutes.
    pub duration: u32,
    /// Calendar day of the exercise.
    pub date: NaiveDate,
}

/// Selection of a user's exercise entries.
///
/// Entries are returned in insertion order. Both date bounds are inclusive
/// and independent; the limit is applied after filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseQuery {
    /// Owning user.
    pub user_id: ObjectId,
    /// Earliest date to include.
    pub from: Option<NaiveDate>,
    /// Latest date to include.
    pub to: Option<NaiveDate>,
    /// Maximum number of results.
    pub limit: Option<u32>,
}

impl ExerciseQuery {
    /// Selects every entry belonging to `user_id`.
    pub fn for_user(user_id: ObjectId) -> Self {
        Self {
            user_id,
            from: None,
            to: None,
            limit: None,
        }
    }

    /// Sets the inclusive lower date bound.
    pub fn with_from(mut self, from: NaiveDate) -> Self {
        self.from = Some(from);
        self
    }

    /// Sets the inclusive upper date bound.
    pub fn with_to(mut self, to: NaiveDate) -> Self {
        self.to = Some(to);
        self
    }

    /// Caps the number of returned entries.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Returns true if `entry` is selected by this query, ignoring the limit.
    pub fn matches(&self, entry: &ExerciseEntry) -> bool {
        entry.user_id == self.user_id && entry.within(self.from, self.to)
    }
}

/// Trait for user and exercise storage operations.
///
/// Every mutation is a single-record insert; nothing is updated or deleted.
#[async_trait]
pub trait ExerciseStore: Send + Sync {
    // =========================================================================
    // User operations
    // =========================================================================

    /// Creates a new user with a freshly assigned identifier.
    async fn create_user(&self, username: &str) -> StoreResult<User>;

    /// Lists all users in insertion order.
    async fn list_users(&self) -> StoreResult<Vec<User>>;

    /// Gets a user by ID.
    async fn get_user(&self, id: ObjectId) -> StoreResult<Option<User>>;

    // =========================================================================
    // Exercise operations
    // =========================================================================

    /// Appends a new exercise entry with a freshly assigned identifier.
    async fn create_exercise(&self, exercise: NewExercise) -> StoreResult<ExerciseEntry>;

    /// Finds the entries selected by `query`.
    async fn find_exercises(&self, query: &ExerciseQuery) -> StoreResult<Vec<ExerciseEntry>>;
}
