//! User-related entity definitions.

use serde::{Deserialize, Serialize};

use crate::ObjectId;

/// A registered user. Users are never updated or removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier.
    pub id: ObjectId,
    /// Username as supplied at registration.
    pub username: String,
}

impl User {
    /// Creates a new user with a fresh identifier.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            id: ObjectId::new(),
            username: username.into(),
        }
    }
}
