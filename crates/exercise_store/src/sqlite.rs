//! SQLite exercise store implementation.

use std::str::FromStr;

use async_trait::async_trait;
use chrono::NaiveDate;
use entities::{ExerciseEntry, ObjectId, User};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    QueryBuilder, Sqlite, SqlitePool,
};

use crate::{ExerciseQuery, ExerciseStore, NewExercise, StoreError, StoreResult};

const SCHEMA: [&str; 3] = [
    "CREATE TABLE IF NOT EXISTS users (
        seq INTEGER PRIMARY KEY AUTOINCREMENT,
        id TEXT NOT NULL UNIQUE,
        username TEXT NOT NULL CHECK (username <> '')
    )",
    "CREATE TABLE IF NOT EXISTS exercises (
        seq INTEGER PRIMARY KEY AUTOINCREMENT,
        id TEXT NOT NULL UNIQUE,
        user_id TEXT NOT NULL REFERENCES users (id),
        description TEXT NOT NULL CHECK (description <> ''),
        duration INTEGER NOT NULL CHECK (duration > 0),
        date TEXT NOT NULL
    )",
    "CREATE INDEX IF NOT EXISTS exercises_user_date ON exercises (user_id, date)",
];

type UserRow = (String, String);
type ExerciseRow = (String, String, String, i64, NaiveDate);

/// SQLite-backed exercise store.
///
/// The `seq` column records insertion order, which is the order every
/// listing is returned in.
#[derive(Debug, Clone)]
pub struct SqliteExerciseStore {
    pool: SqlitePool,
}

impl SqliteExerciseStore {
    /// Connects to `url` (e.g. `sqlite:tracker.db` or `sqlite::memory:`),
    /// creating the database file and schema if needed.
    pub async fn connect(url: &str) -> StoreResult<Self> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        // An in-memory database lives only as long as its connection.
        let in_memory = url.contains(":memory:") || url.contains("mode=memory");
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };

        let pool = pool_options.connect_with(options).await?;
        Self::from_pool(pool).await
    }

    /// Wraps an existing pool, creating the schema if needed.
    pub async fn from_pool(pool: SqlitePool) -> StoreResult<Self> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(&pool).await?;
        }
        tracing::debug!("SQLite exercise store schema ready");
        Ok(Self { pool })
    }
}

fn map_insert_error(entity_type: &'static str, id: ObjectId, err: sqlx::Error) -> StoreError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            StoreError::already_exists(entity_type, id.to_string())
        }
        _ => StoreError::Database(err),
    }
}

fn parse_id(entity_type: &'static str, raw: &str) -> StoreResult<ObjectId> {
    raw.parse()
        .map_err(|e: entities::ParseObjectIdError| StoreError::corrupt(entity_type, e.to_string()))
}

fn user_from_row((id, username): UserRow) -> StoreResult<User> {
    Ok(User {
        id: parse_id("User", &id)?,
        username,
    })
}

fn exercise_from_row(
    (id, user_id, description, duration, date): ExerciseRow,
) -> StoreResult<ExerciseEntry> {
    let duration = u32::try_from(duration).map_err(|_| {
        StoreError::corrupt("ExerciseEntry", format!("duration out of range: {duration}"))
    })?;

    Ok(ExerciseEntry {
        id: parse_id("ExerciseEntry", &id)?,
        user_id: parse_id("ExerciseEntry", &user_id)?,
        description,
        duration,
        date,
    })
}

#[async_trait]
impl ExerciseStore for SqliteExerciseStore {
    // =========================================================================
    // User operations
    // =========================================================================

    async fn create_user(&self, username: &str) -> StoreResult<User> {
        let user = User::new(username);
        sqlx::query("INSERT INTO users (id, username) VALUES (?, ?)")
            .bind(user.id.to_string())
            .bind(&user.username)
            .execute(&self.pool)
            .await
            .map_err(|e| map_insert_error("User", user.id, e))?;
        Ok(user)
    }

    async fn list_users(&self) -> StoreResult<Vec<User>> {
        let rows: Vec<UserRow> = sqlx::query_as("SELECT id, username FROM users ORDER BY seq")
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter().map(user_from_row).collect()
    }

    async fn get_user(&self, id: ObjectId) -> StoreResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as("SELECT id, username FROM users WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;
        row.map(user_from_row).transpose()
    }

    // =========================================================================
    // Exercise operations
    // =========================================================================

    async fn create_exercise(&self, exercise: NewExercise) -> StoreResult<ExerciseEntry> {
        let entry = ExerciseEntry::new(
            exercise.user_id,
            exercise.description,
            exercise.duration,
            exercise.date,
        );
        sqlx::query(
            "INSERT INTO exercises (id, user_id, description, duration, date) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(entry.id.to_string())
        .bind(entry.user_id.to_string())
        .bind(&entry.description)
        .bind(i64::from(entry.duration))
        .bind(entry.date)
        .execute(&self.pool)
        .await
        .map_err(|e| map_insert_error("ExerciseEntry", entry.id, e))?;
        Ok(entry)
    }

    async fn find_exercises(&self, query: &ExerciseQuery) -> StoreResult<Vec<ExerciseEntry>> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(
            "SELECT id, user_id, description, duration, date FROM exercises WHERE user_id = ",
        );
        builder.push_bind(query.user_id.to_string());
        if let Some(from) = query.from {
            builder.push(" AND date >= ").push_bind(from);
        }
        if let Some(to) = query.to {
            builder.push(" AND date <= ").push_bind(to);
        }
        builder.push(" ORDER BY seq");
        if let Some(limit) = query.limit {
            builder.push(" LIMIT ").push_bind(i64::from(limit));
        }

        let rows: Vec<ExerciseRow> = builder.build_query_as().fetch_all(&self.pool).await?;
        rows.into_iter().map(exercise_from_row).collect()
    }
}
