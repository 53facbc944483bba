#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration as StdDuration;

use axum::body::Body;
use axum::Router;
use chrono::{Duration, Utc};
use http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use tower::ServiceExt;

use polls::models::{Choice, Question};
use polls::state::AppState;
use polls::{db, poll, routes, templates};

/// Fresh in-memory database with the schema applied.
///
/// A single connection that never expires, since every SQLite memory
/// connection is its own database.
pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("valid sqlite url")
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .expect("open in-memory database");
    db::migrate(&pool).await.expect("apply migrations");
    pool
}

/// On-disk database served by several connections, so statements from
/// different requests really do run side by side.
pub struct FilePool {
    pub pool: SqlitePool,
    path: PathBuf,
}

impl FilePool {
    pub async fn open(name: &str) -> Self {
        let path = std::env::temp_dir().join(format!("polls-{}-{}.db", name, std::process::id()));
        remove_database_files(&path);

        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(StdDuration::from_secs(10));
        let pool = SqlitePoolOptions::new()
            .max_connections(4)
            .connect_with(options)
            .await
            .expect("open file database");
        db::migrate(&pool).await.expect("apply migrations");

        Self { pool, path }
    }

    pub async fn close(self) {
        self.pool.close().await;
        remove_database_files(&self.path);
    }
}

fn remove_database_files(path: &Path) {
    for suffix in ["", "-wal", "-shm"] {
        let mut file = path.as_os_str().to_owned();
        file.push(suffix);
        let _ = std::fs::remove_file(file);
    }
}

pub fn app(pool: SqlitePool) -> Router {
    let templates = templates::load().expect("load templates");
    routes::create_routes(AppState::new(pool, templates))
}

/// Question published `days` from now; negative values are in the past.
pub async fn create_question(pool: &SqlitePool, text: &str, days: i64) -> Question {
    poll::create_question(pool, text, Utc::now() + Duration::days(days))
        .await
        .expect("insert question")
}

pub async fn add_choice(pool: &SqlitePool, question: &Question, text: &str) -> Choice {
    poll::add_choice(pool, question.id, text)
        .await
        .expect("insert choice")
}

pub async fn votes_of(pool: &SqlitePool, question: &Question) -> Vec<i64> {
    poll::choices_for(pool, question.id)
        .await
        .expect("load choices")
        .into_iter()
        .map(|choice| choice.votes)
        .collect()
}

pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: String,
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("build request");
    send(app, request).await
}

pub async fn post_form(app: &Router, uri: &str, form: &str) -> TestResponse {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .expect("build request");
    send(app, request).await
}

/// POST with an arbitrary body; `content_type` of `None` sends no header at all.
pub async fn post_raw(
    app: &Router,
    uri: &str,
    content_type: Option<&str>,
    body: &str,
) -> TestResponse {
    let mut builder = Request::builder().method("POST").uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    let request = builder
        .body(Body::from(body.to_string()))
        .expect("build request");
    send(app, request).await
}

async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();

    TestResponse {
        status,
        location,
        body: String::from_utf8_lossy(&bytes).into_owned(),
    }
}
