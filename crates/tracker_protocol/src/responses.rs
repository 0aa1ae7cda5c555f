//! Response types.

use serde::{Deserialize, Serialize};

// ============================================================================
// User Responses
// ============================================================================

/// A user as returned by `GET /api/users` and `POST /api/users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub username: String,
    pub id: String,
}

// ============================================================================
// Exercise Responses
// ============================================================================

/// Response of `POST /api/users/{id}/exercises`: the new entry denormalized
/// with its owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseResponse {
    /// Owning user's identifier.
    pub id: String,
    pub username: String,
    pub date: String,
    pub duration: u32,
    pub description: String,
}

/// One entry of a log response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub description: String,
    pub duration: u32,
    pub date: String,
}

/// Response of `GET /api/users/{id}/logs`.
///
/// `from` and `to` are omitted entirely when the corresponding filter was
/// not supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogResponse {
    pub id: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    pub count: usize,
    pub log: Vec<LogEntry>,
}
