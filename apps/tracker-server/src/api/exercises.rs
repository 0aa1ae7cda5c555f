//! Exercise API endpoints.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use exercise_store::ExerciseStore;
use tracker_protocol::{requests::AddExerciseRequest, responses::ExerciseResponse};

use crate::api::extract::FormOrJson;
use crate::error::{ServerError, ServerResult};
use crate::services::ExerciseFields;
use crate::state::AppState;
use crate::validation::validate_object_id;

/// Appends an exercise to a user's log.
///
/// The ID is checked before the body is decoded, and every field is
/// validated before the store is touched; the user lookup comes last.
pub async fn add_exercise<S: ExerciseStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
    body: Result<FormOrJson<AddExerciseRequest>, ServerError>,
) -> ServerResult<(StatusCode, Json<ExerciseResponse>)> {
    let user_id = validate_object_id(&id)?;
    let FormOrJson(request) = body?;
    let fields = ExerciseFields::validate(&request, Utc::now().date_naive())?;

    let response = state.exercises().add_entry(user_id, fields).await?;

    Ok((StatusCode::CREATED, Json(response)))
}
