//! User API endpoints.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};
use entities::User;
use exercise_store::ExerciseStore;
use tracker_protocol::{requests::CreateUserRequest, responses::UserResponse};

use crate::api::extract::FormOrJson;
use crate::error::ServerResult;
use crate::state::AppState;
use crate::validation::validate_username;

/// Converts entity User to its wire form.
fn entity_to_response(user: &User) -> UserResponse {
    UserResponse {
        username: user.username.clone(),
        id: user.id.to_string(),
    }
}

/// Lists all users.
pub async fn list_users<S: ExerciseStore>(
    State(state): State<Arc<AppState<S>>>,
) -> ServerResult<Json<Vec<UserResponse>>> {
    let users = state.users().list_users().await?;

    Ok(Json(users.iter().map(entity_to_response).collect()))
}

/// Registers a user.
pub async fn create_user<S: ExerciseStore>(
    State(state): State<Arc<AppState<S>>>,
    FormOrJson(request): FormOrJson<CreateUserRequest>,
) -> ServerResult<(StatusCode, Json<UserResponse>)> {
    let username = validate_username(request.username.as_deref())?;

    let user = state.users().create_user(&username).await?;

    Ok((StatusCode::CREATED, Json(entity_to_response(&user))))
}
