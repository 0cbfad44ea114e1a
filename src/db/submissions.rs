use sqlx::SqlitePool;

use crate::models::Submission;

/// Most rows any listing returns.
pub const RECENT_LIMIT: i64 = 20;

/// Rows with a readable timestamp come first, newest instant first; rows with
/// a null (or unreadable) timestamp follow. `id` breaks ties.
const RECENT_ORDER: &str =
    "ORDER BY julianday(timestamp) IS NULL, julianday(timestamp) DESC, id DESC";

/// Insert one row and commit before returning its id.
pub async fn create(
    pool: &SqlitePool,
    student_id: &str,
    timestamp: &str,
    answers: &str,
) -> Result<i64, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO submissions (student_id, timestamp, answers)
         VALUES (?, ?, ?) RETURNING id",
    )
    .bind(student_id)
    .bind(timestamp)
    .bind(answers)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(id)
}

pub async fn list_recent(pool: &SqlitePool, limit: i64) -> Result<Vec<Submission>, sqlx::Error> {
    sqlx::query_as::<_, Submission>(&format!(
        "SELECT id, student_id, CAST(timestamp AS TEXT) AS timestamp, answers FROM submissions
         {RECENT_ORDER} LIMIT ?"
    ))
    .bind(limit)
    .fetch_all(pool)
    .await
}

pub async fn list_recent_for_student(
    pool: &SqlitePool,
    student_id: &str,
    limit: i64,
) -> Result<Vec<Submission>, sqlx::Error> {
    sqlx::query_as::<_, Submission>(&format!(
        "SELECT id, student_id, CAST(timestamp AS TEXT) AS timestamp, answers FROM submissions
         WHERE student_id = ?
         {RECENT_ORDER} LIMIT ?"
    ))
    .bind(student_id)
    .bind(limit)
    .fetch_all(pool)
    .await
}
