//! Shared helpers for router tests.

#![allow(dead_code)]

use std::sync::{
    Arc,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use entities::{ExerciseEntry, ObjectId, User};
use exercise_store::{
    ExerciseQuery, ExerciseStore, MemoryExerciseStore, NewExercise, StoreError, StoreResult,
};
use serde_json::Value;
use tower::ServiceExt;
use tracker_server::{config::Config, create_app, create_state};

/// Memory store that counts user lookups and can be switched to fail
/// every write.
#[derive(Debug, Default, Clone)]
pub struct CountingStore {
    inner: MemoryExerciseStore,
    fail_writes: Arc<AtomicBool>,
    user_lookups: Arc<AtomicUsize>,
}

impl CountingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    pub fn user_lookups(&self) -> usize {
        self.user_lookups.load(Ordering::SeqCst)
    }

    fn check_write(&self) -> StoreResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Other("store unavailable".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ExerciseStore for CountingStore {
    async fn create_user(&self, username: &str) -> StoreResult<User> {
        self.check_write()?;
        self.inner.create_user(username).await
    }

    async fn list_users(&self) -> StoreResult<Vec<User>> {
        self.inner.list_users().await
    }

    async fn get_user(&self, id: ObjectId) -> StoreResult<Option<User>> {
        self.user_lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.get_user(id).await
    }

    async fn create_exercise(&self, exercise: NewExercise) -> StoreResult<ExerciseEntry> {
        self.check_write()?;
        self.inner.create_exercise(exercise).await
    }

    async fn find_exercises(&self, query: &ExerciseQuery) -> StoreResult<Vec<ExerciseEntry>> {
        self.inner.find_exercises(query).await
    }
}

/// Configuration for tests; never read from the environment.
pub fn test_config() -> Config {
    Config::from_lookup(|_| None).expect("default config")
}

/// Builds the full application over `store`.
pub fn app<S: ExerciseStore + 'static>(store: S) -> Router {
    create_app(create_state(test_config(), store))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

pub fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_owned()))
        .expect("request")
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

/// Sends `request` and decodes the JSON response body (`Null` if empty or
/// not JSON).
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

/// Registers `username` and returns its id.
pub async fn create_user(app: &Router, username: &str) -> String {
    let (status, body) = send(app, post_form("/api/users", &format!("username={username}"))).await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["id"].as_str().expect("id").to_string()
}

/// Logs an exercise via a form post and asserts it was accepted.
pub async fn add_exercise(app: &Router, user_id: &str, form: &str) -> Value {
    let (status, body) = send(
        app,
        post_form(&format!("/api/users/{user_id}/exercises"), form),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body
}
