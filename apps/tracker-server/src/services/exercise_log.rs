//! Appending exercise entries.

use chrono::NaiveDate;
use entities::ObjectId;
use exercise_store::{ExerciseStore, NewExercise};
use tracker_protocol::{
    format_calendar_date, requests::AddExerciseRequest, responses::ExerciseResponse,
};

use crate::error::ServerResult;
use crate::services::UserDirectory;
use crate::validation::{ValidationError, validate_date, validate_description, validate_duration};

/// Validated fields of a new exercise entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseFields {
    /// What was done.
    pub description: String,
    /// Duration in minutes.
    pub duration: u32,
    /// Calendar day, `today` when the request gave none.
    pub date: NaiveDate,
}

impl ExerciseFields {
    /// Validates the body of an add-exercise request.
    pub fn validate(
        request: &AddExerciseRequest,
        today: NaiveDate,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            description: validate_description(request.description.as_deref())?,
            duration: validate_duration(request.duration.as_deref())?,
            date: validate_date(request.date.as_deref(), today)?,
        })
    }
}

/// Appends exercise entries to existing users' logs.
pub struct ExerciseLog<'a, S: ExerciseStore> {
    store: &'a S,
    users: UserDirectory<'a, S>,
}

impl<'a, S: ExerciseStore> ExerciseLog<'a, S> {
    /// Creates an exercise log over `store`.
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            users: UserDirectory::new(store),
        }
    }

    /// Appends an entry for `user_id` and returns it denormalized with its
    /// owner. The user must exist; it is not re-checked later.
    pub async fn add_entry(
        &self,
        user_id: ObjectId,
        fields: ExerciseFields,
    ) -> ServerResult<ExerciseResponse> {
        let user = self.users.get_user(user_id).await?;

        let entry = self
            .store
            .create_exercise(NewExercise {
                user_id: user.id,
                description: fields.description,
                duration: fields.duration,
                date: fields.date,
            })
            .await?;

        tracing::info!(
            user_id = %user.id,
            exercise_id = %entry.id,
            duration = entry.duration,
            "Exercise logged"
        );

        Ok(ExerciseResponse {
            id: user.id.to_string(),
            username: user.username,
            date: format_calendar_date(entry.date),
            duration: entry.duration,
            description: entry.description,
        })
    }
}
