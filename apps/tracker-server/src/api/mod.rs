//! API endpoints.

pub mod exercises;
pub mod extract;
pub mod logs;
pub mod users;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use exercise_store::ExerciseStore;

use crate::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router<S: ExerciseStore + 'static>() -> Router<Arc<AppState<S>>> {
    Router::new()
        // User endpoints
        .route("/api/users", get(users::list_users::<S>).post(users::create_user::<S>))
        // Exercise endpoints
        .route("/api/users/:id/exercises", post(exercises::add_exercise::<S>))
        .route("/api/users/:id/logs", get(logs::get_log::<S>))
        // Health check
        .route("/health", get(health_check))
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
