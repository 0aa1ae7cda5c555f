//! Error payloads.

use serde::{Deserialize, Serialize};

/// Machine-readable error codes carried in every error payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request body could not be decoded
    InvalidBody,
    /// A required field was absent or empty
    MissingField,
    /// An identifier does not have the identifier syntax
    InvalidIdFormat,
    /// A well-formed identifier matched no user
    UserNotFound,
    /// Duration was not a positive whole number
    InvalidDuration,
    /// A date could not be parsed
    InvalidDate,
    /// A limit was not a non-negative integer
    InvalidLimit,
    /// The store rejected or failed an operation
    PersistenceError,
}

/// Body of every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable message.
    pub error: String,
    /// Machine-readable code.
    pub code: ErrorCode,
    /// Diagnostic detail, present for store failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    /// Creates an error payload without details.
    pub fn new(code: ErrorCode, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code,
            details: None,
        }
    }

    /// Attaches diagnostic detail.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}
