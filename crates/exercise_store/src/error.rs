//! Exercise store error types.

use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Duplicate entity.
    #[error("{entity_type} already exists: {id}")]
    AlreadyExists {
        entity_type: &'static str,
        id: String,
    },

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored row could not be turned back into an entity.
    #[error("Corrupt {entity_type} record: {reason}")]
    Corrupt {
        entity_type: &'static str,
        reason: String,
    },

    /// Other error.
    #[error("{0}")]
    Other(String),
}

impl StoreError {
    /// Creates an already exists error.
    pub fn already_exists(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::AlreadyExists {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a corrupt record error.
    pub fn corrupt(entity_type: &'static str, reason: impl Into<String>) -> Self {
        Self::Corrupt {
            entity_type,
            reason: reason.into(),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
