#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use sqlx::SqlitePool;
use tempfile::TempDir;

use quizbox::auth::CredentialVerifier;
use quizbox::config::{Config, StudentFilter};

pub const API_KEY: &str = "test-api-key";

/// A running test server instance backed by its own SQLite file.
pub struct TestApp {
    pub addr: SocketAddr,
    pub pool: SqlitePool,
    pub client: Client,
    pub dir: TempDir,
}

pub struct TestOptions {
    pub student_filter: StudentFilter,
    pub max_body_size: usize,
    pub verifier: Option<Arc<dyn CredentialVerifier>>,
}

impl Default for TestOptions {
    fn default() -> Self {
        Self {
            student_filter: StudentFilter::Strict,
            max_body_size: 1_048_576,
            verifier: None,
        }
    }
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// POST /submit with the given key (or none), return (body, status).
    pub async fn submit_with_key(&self, key: Option<&str>, body: &Value) -> (Value, StatusCode) {
        let mut req = self.client.post(self.url("/submit")).json(body);
        if let Some(key) = key {
            req = req.header("x-api-key", key);
        }
        let resp = req.send().await.expect("submit request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Submit with the valid key and assert success.
    pub async fn submit(&self, student_id: &str, answers: Value) {
        let (body, status) = self
            .submit_with_key(
                Some(API_KEY),
                &json!({ "student_id": student_id, "answers": answers }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "submit failed: {body}");
        assert_eq!(body, json!({ "status": "ok" }));
    }

    /// GET a path with the given key (or none), return (body, status).
    pub async fn get_with_key(&self, path: &str, key: Option<&str>) -> (Value, StatusCode) {
        let mut req = self.client.get(self.url(path));
        if let Some(key) = key {
            req = req.header("x-api-key", key);
        }
        let resp = req.send().await.expect("get request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// GET a listing with the valid key and return its `submissions` array.
    pub async fn list(&self, path: &str) -> Vec<Value> {
        let (body, status) = self.get_with_key(path, Some(API_KEY)).await;
        assert_eq!(status, StatusCode::OK, "list failed: {body}");
        body["submissions"]
            .as_array()
            .expect("submissions should be an array")
            .clone()
    }

    pub async fn row_count(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM submissions")
            .fetch_one(&self.pool)
            .await
            .unwrap()
    }

    /// Insert a row directly, bypassing the service clock.
    pub async fn insert_raw(&self, student_id: &str, timestamp: Option<&str>, answers: &str) {
        sqlx::query("INSERT INTO submissions (student_id, timestamp, answers) VALUES (?, ?, ?)")
            .bind(student_id)
            .bind(timestamp)
            .bind(answers)
            .execute(&self.pool)
            .await
            .unwrap();
    }
}

pub fn test_config(dir: &TempDir, options: &TestOptions) -> Config {
    Config {
        api_key: API_KEY.to_string(),
        database_path: dir.path().join("submissions.db"),
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        max_body_size: options.max_body_size,
        student_filter: options.student_filter,
        log_level: "warn".to_string(),
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(TestOptions::default()).await
}

/// Spawn a test app on a fresh SQLite file in a temporary directory.
pub async fn spawn_app_with(options: TestOptions) -> TestApp {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = test_config(&dir, &options);

    let pool = quizbox::db::connect(&config.database_path)
        .await
        .expect("Failed to open test database");

    quizbox::db::init_schema(&pool)
        .await
        .expect("Failed to initialise schema");

    let app = match options.verifier {
        Some(verifier) => quizbox::build_app_with_verifier(pool.clone(), config, verifier),
        None => quizbox::build_app(pool.clone(), config),
    };

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    TestApp {
        addr,
        pool,
        client: Client::new(),
        dir,
    }
}

/// Close the pool before the temporary directory is removed.
pub async fn cleanup(app: TestApp) {
    app.pool.close().await;
    drop(app.dir);
}
