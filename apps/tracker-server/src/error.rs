//! Server error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use entities::ObjectId;
use exercise_store::StoreError;
use tracker_protocol::{ErrorCode, ErrorResponse};

use crate::validation::ValidationError;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The request body or query string could not be decoded.
    #[error("Invalid request: {0}")]
    InvalidBody(String),

    /// A request field failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A well-formed user ID matched no user.
    #[error("User not found: {0}")]
    UserNotFound(ObjectId),

    /// The store failed or rejected an operation.
    #[error("Persistence error: {0}")]
    Persistence(#[from] StoreError),
}

impl ServerError {
    /// Returns the HTTP status and machine code for this error.
    pub fn status_and_code(&self) -> (StatusCode, ErrorCode) {
        match self {
            ServerError::InvalidBody(_) => (StatusCode::BAD_REQUEST, ErrorCode::InvalidBody),
            ServerError::Validation(err) => match err {
                ValidationError::MissingField(_) => {
                    (StatusCode::BAD_REQUEST, ErrorCode::MissingField)
                }
                ValidationError::InvalidIdFormat(_) => {
                    (StatusCode::FORBIDDEN, ErrorCode::InvalidIdFormat)
                }
                ValidationError::InvalidDuration(_) => {
                    (StatusCode::BAD_REQUEST, ErrorCode::InvalidDuration)
                }
                ValidationError::InvalidDate(_) => {
                    (StatusCode::BAD_REQUEST, ErrorCode::InvalidDate)
                }
                ValidationError::InvalidLimit(_) => {
                    (StatusCode::BAD_REQUEST, ErrorCode::InvalidLimit)
                }
            },
            ServerError::UserNotFound(_) => (StatusCode::NOT_FOUND, ErrorCode::UserNotFound),
            ServerError::Persistence(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::PersistenceError)
            }
        }
    }

    fn to_error_response(&self, code: ErrorCode) -> ErrorResponse {
        match self {
            ServerError::InvalidBody(msg) => {
                ErrorResponse::new(code, "Invalid request").with_details(msg.clone())
            }
            ServerError::Validation(err) => ErrorResponse::new(code, err.to_string()),
            ServerError::UserNotFound(_) => ErrorResponse::new(code, "User Not Found"),
            ServerError::Persistence(err) => {
                ErrorResponse::new(code, "Something went wrong").with_details(err.to_string())
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, status = %status, "Request rejected");
        }

        (status, Json(self.to_error_response(code))).into_response()
    }
}

/// Result type alias for server operations.
pub type ServerResult<T> = Result<T, ServerError>;
