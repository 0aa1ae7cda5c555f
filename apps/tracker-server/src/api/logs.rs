//! Exercise log API endpoints.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use exercise_store::ExerciseStore;
use tracker_protocol::{requests::LogQuery, responses::LogResponse};

use crate::error::{ServerError, ServerResult};
use crate::state::AppState;
use crate::validation::validate_object_id;

/// Returns a user's exercise log, optionally bounded by `from`/`to` and
/// capped by `limit`.
pub async fn get_log<S: ExerciseStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
    query: Result<Query<LogQuery>, QueryRejection>,
) -> ServerResult<Json<LogResponse>> {
    let user_id = validate_object_id(&id)?;
    let Query(query) = query.map_err(|e| ServerError::InvalidBody(e.body_text()))?;

    let response = state.logs().get_log(user_id, &query).await?;

    Ok(Json(response))
}
