use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Question identifier to free-form answer.
pub type Answers = Map<String, Value>;

/// A stored submission row. `answers` is kept as JSON text in the table and
/// decoded back into a map on read. `timestamp` is returned exactly as stored.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Submission {
    pub id: i64,
    pub student_id: String,
    pub timestamp: Option<String>,
    #[sqlx(json)]
    pub answers: Answers,
}

/// Body of `POST /submit`. The timestamp is never taken from the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct NewSubmission {
    pub student_id: String,
    pub answers: Answers,
}
