//! Exercise Tracker Server
//!
//! Tracks users and the exercises they log, and answers filtered, bounded
//! queries over a user's exercise history.

pub mod api;
pub mod config;
pub mod error;
pub mod services;
pub mod state;
pub mod validation;

use std::sync::Arc;

use axum::Router;
use exercise_store::ExerciseStore;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::state::{AppState, create_shared_state};

/// Creates the application router with all routes configured.
pub fn create_app<S: ExerciseStore + 'static>(state: Arc<AppState<S>>) -> Router {
    api::create_router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Creates the application state with the given configuration and store.
pub fn create_state<S: ExerciseStore>(config: Config, store: S) -> Arc<AppState<S>> {
    create_shared_state(config, store)
}

/// Initializes tracing with the given log level.
pub fn init_tracing(log_level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
