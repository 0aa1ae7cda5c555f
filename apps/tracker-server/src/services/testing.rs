//! Store doubles for service tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use entities::{ExerciseEntry, ObjectId, User};
use exercise_store::{
    ExerciseQuery, ExerciseStore, MemoryExerciseStore, NewExercise, StoreError, StoreResult,
};

/// Memory store that counts reads and can be told to reject writes.
#[derive(Debug, Default)]
pub(crate) struct InstrumentedStore {
    inner: MemoryExerciseStore,
    reject_writes: bool,
    user_reads: AtomicUsize,
    exercise_reads: AtomicUsize,
}

impl InstrumentedStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Wraps `inner`, failing every subsequent write.
    pub(crate) fn rejecting_writes(inner: MemoryExerciseStore) -> Self {
        Self {
            inner,
            reject_writes: true,
            ..Self::default()
        }
    }

    pub(crate) fn user_reads(&self) -> usize {
        self.user_reads.load(Ordering::SeqCst)
    }

    pub(crate) fn exercise_reads(&self) -> usize {
        self.exercise_reads.load(Ordering::SeqCst)
    }

    fn check_write(&self) -> StoreResult<()> {
        if self.reject_writes {
            return Err(StoreError::Other("write rejected".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ExerciseStore for InstrumentedStore {
    async fn create_user(&self, username: &str) -> StoreResult<User> {
        self.check_write()?;
        self.inner.create_user(username).await
    }

    async fn list_users(&self) -> StoreResult<Vec<User>> {
        self.user_reads.fetch_add(1, Ordering::SeqCst);
        self.inner.list_users().await
    }

    async fn get_user(&self, id: ObjectId) -> StoreResult<Option<User>> {
        self.user_reads.fetch_add(1, Ordering::SeqCst);
        self.inner.get_user(id).await
    }

    async fn create_exercise(&self, exercise: NewExercise) -> StoreResult<ExerciseEntry> {
        self.check_write()?;
        self.inner.create_exercise(exercise).await
    }

    async fn find_exercises(&self, query: &ExerciseQuery) -> StoreResult<Vec<ExerciseEntry>> {
        self.exercise_reads.fetch_add(1, Ordering::SeqCst);
        self.inner.find_exercises(query).await
    }
}
