//! Exercise log entry definitions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ObjectId;

/// One exercise a user performed on a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseEntry {
    /// Unique identifier.
    pub id: ObjectId,
    /// Owning user. Checked to exist when the entry is created.
    pub user_id: ObjectId,
    /// What was done.
    pub description: String,
    /// Duration in minutes.
    pub duration: u32,
    /// Calendar day the exercise happened on.
    pub date: NaiveDate,
}

impl ExerciseEntry {
    /// Creates a new entry for `user_id` with a fresh identifier.
    pub fn new(
        user_id: ObjectId,
        description: impl Into<String>,
        duration: u32,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: ObjectId::new(),
            user_id,
            description: description.into(),
            duration,
            date,
        }
    }

    /// Returns true if the entry's date lies within the inclusive bounds.
    /// A missing bound does not constrain that side.
    pub fn within(&self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> bool {
        from.is_none_or(|from| self.date >= from) && to.is_none_or(|to| self.date <= to)
    }
}
