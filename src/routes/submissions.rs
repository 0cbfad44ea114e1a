use axum::extract::{Path, State};
use axum::Json;
use serde_json::{Value, json};

use crate::auth::ApiKey;
use crate::clock;
use crate::config::StudentFilter;
use crate::db;
use crate::db::submissions::RECENT_LIMIT;
use crate::error::AppError;
use crate::models::NewSubmission;
use crate::routes::ApiJson;
use crate::state::SharedState;

pub async fn submit(
    _key: ApiKey,
    State(state): State<SharedState>,
    ApiJson(payload): ApiJson<NewSubmission>,
) -> Result<Json<Value>, AppError> {
    let timestamp = clock::render(&clock::now_eastern());
    let answers = serde_json::to_string(&payload.answers)?;

    let id = db::submissions::create(&state.pool, &payload.student_id, &timestamp, &answers).await?;

    tracing::info!(id, student_id = %payload.student_id, "Submission stored");

    Ok(Json(json!({ "status": "ok" })))
}

pub async fn list(
    _key: ApiKey,
    State(state): State<SharedState>,
) -> Result<Json<Value>, AppError> {
    let submissions = db::submissions::list_recent(&state.pool, RECENT_LIMIT).await?;
    Ok(Json(json!({ "submissions": submissions })))
}

pub async fn list_by_student(
    _key: ApiKey,
    State(state): State<SharedState>,
    Path(student_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let submissions = match state.config.student_filter {
        StudentFilter::Strict => {
            db::submissions::list_recent_for_student(&state.pool, &student_id, RECENT_LIMIT).await?
        }
        StudentFilter::Legacy => db::submissions::list_recent(&state.pool, RECENT_LIMIT).await?,
    };
    Ok(Json(json!({ "submissions": submissions })))
}
