//! Application state.

use std::sync::Arc;

use exercise_store::ExerciseStore;

use crate::config::Config;
use crate::services::{ExerciseLog, LogQueryEngine, UserDirectory};

/// Shared application state.
pub struct AppState<S: ExerciseStore> {
    /// Server configuration.
    pub config: Config,
    /// User and exercise store.
    pub store: S,
}

impl<S: ExerciseStore> AppState<S> {
    /// Creates new application state.
    pub fn new(config: Config, store: S) -> Self {
        Self { config, store }
    }

    /// Returns the user directory over this state's store.
    pub fn users(&self) -> UserDirectory<'_, S> {
        UserDirectory::new(&self.store)
    }

    /// Returns the exercise log over this state's store.
    pub fn exercises(&self) -> ExerciseLog<'_, S> {
        ExerciseLog::new(&self.store)
    }

    /// Returns the log query engine over this state's store.
    pub fn logs(&self) -> LogQueryEngine<'_, S> {
        LogQueryEngine::new(&self.store)
    }
}

/// Type alias for shared state.
pub type SharedState<S> = Arc<AppState<S>>;

/// Creates shared state from config and store.
pub fn create_shared_state<S: ExerciseStore>(config: Config, store: S) -> SharedState<S> {
    Arc::new(AppState::new(config, store))
}
