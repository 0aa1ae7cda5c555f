//! Filtered, bounded retrieval of a user's exercise log.

use chrono::NaiveDate;
use entities::{ExerciseEntry, ObjectId, User};
use exercise_store::{ExerciseQuery, ExerciseStore};
use tracker_protocol::{
    format_calendar_date,
    requests::LogQuery,
    responses::{LogEntry, LogResponse},
};

use crate::error::ServerResult;
use crate::services::UserDirectory;
use crate::validation::{ValidationError, validate_limit, validate_optional_date};

/// Validated log filters. Every field is optional and independent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogFilters {
    /// Inclusive lower date bound.
    pub from: Option<NaiveDate>,
    /// Inclusive upper date bound.
    pub to: Option<NaiveDate>,
    /// Maximum number of entries.
    pub limit: Option<u32>,
}

impl LogFilters {
    /// Validates a log query string.
    pub fn validate(query: &LogQuery) -> Result<Self, ValidationError> {
        Ok(Self {
            from: validate_optional_date(query.from.as_deref())?,
            to: validate_optional_date(query.to.as_deref())?,
            limit: validate_limit(query.limit.as_deref())?,
        })
    }

    /// Builds the store query selecting `user_id`'s entries under these
    /// filters.
    pub fn to_query(&self, user_id: ObjectId) -> ExerciseQuery {
        let mut query = ExerciseQuery::for_user(user_id);
        if let Some(from) = self.from {
            query = query.with_from(from);
        }
        if let Some(to) = self.to {
            query = query.with_to(to);
        }
        if let Some(limit) = self.limit {
            query = query.with_limit(limit);
        }
        query
    }
}

fn to_log_entry(entry: ExerciseEntry) -> LogEntry {
    LogEntry {
        description: entry.description,
        duration: entry.duration,
        date: format_calendar_date(entry.date),
    }
}

/// Answers log queries over a user's exercise history.
pub struct LogQueryEngine<'a, S: ExerciseStore> {
    store: &'a S,
    users: UserDirectory<'a, S>,
}

impl<'a, S: ExerciseStore> LogQueryEngine<'a, S> {
    /// Creates a query engine over `store`.
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            users: UserDirectory::new(store),
        }
    }

    /// Resolves the user, then validates `query` and runs it.
    ///
    /// Filters are only validated once the user is known to exist, so an
    /// unknown user is reported even when the filters are also invalid.
    pub async fn get_log(&self, user_id: ObjectId, query: &LogQuery) -> ServerResult<LogResponse> {
        let user = self.users.get_user(user_id).await?;
        let filters = LogFilters::validate(query)?;
        self.query_log(user, filters).await
    }

    /// Runs validated filters against a resolved user's entries and shapes
    /// the response. Entries keep store insertion order; no sort is applied
    /// before the limit.
    pub async fn query_log(&self, user: User, filters: LogFilters) -> ServerResult<LogResponse> {
        let entries = self.store.find_exercises(&filters.to_query(user.id)).await?;
        let log: Vec<LogEntry> = entries.into_iter().map(to_log_entry).collect();

        tracing::debug!(user_id = %user.id, count = log.len(), "Exercise log queried");

        Ok(LogResponse {
            id: user.id.to_string(),
            username: user.username,
            from: filters.from.map(format_calendar_date),
            to: filters.to.map(format_calendar_date),
            count: log.len(),
            log,
        })
    }
}
