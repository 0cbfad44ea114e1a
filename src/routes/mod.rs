pub mod submissions;

use axum::Json;
use axum::extract::FromRequest;
use axum::routing::{get, post};
use axum::Router;

use crate::error::AppError;
use crate::state::SharedState;

/// JSON body whose rejections render through `AppError`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route("/submit", post(submissions::submit))
        .route("/submissions", get(submissions::list))
        .route("/submissions/{student_id}", get(submissions::list_by_student))
}

pub fn public_routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
}

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Hello from FastAPI!" }))
}

async fn health() -> &'static str {
    "ok"
}
