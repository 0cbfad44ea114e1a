use std::net::IpAddr;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub database_path: PathBuf,
    pub host: IpAddr,
    pub port: u16,
    pub max_body_size: usize,
    pub student_filter: StudentFilter,
    pub log_level: String,
}

/// How `GET /submissions/{student_id}` scopes its results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentFilter {
    /// Only rows whose `student_id` matches the path.
    Strict,
    /// Most recent rows across all students, ignoring the path value.
    /// Kept for consumers written against the unfiltered deployment.
    Legacy,
}

impl StudentFilter {
    pub fn parse(value: &str) -> Result<Self, String> {
        match value.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(StudentFilter::Strict),
            "legacy" => Ok(StudentFilter::Legacy),
            other => Err(format!(
                "Invalid QUIZBOX_STUDENT_FILTER '{other}': expected 'strict' or 'legacy'"
            )),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let api_key = env_required("QUIZBOX_API_KEY")?;
        if api_key.is_empty() {
            return Err("QUIZBOX_API_KEY must not be empty".to_string());
        }

        let database_path = PathBuf::from(env_or("QUIZBOX_DATABASE_PATH", "submissions.db"));

        let host: IpAddr = env_or("QUIZBOX_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid QUIZBOX_HOST: {e}"))?;

        let port: u16 = env_or("QUIZBOX_PORT", "8000")
            .parse()
            .map_err(|e| format!("Invalid QUIZBOX_PORT: {e}"))?;

        let max_body_size: usize = env_or("QUIZBOX_MAX_BODY_SIZE", "1048576")
            .parse()
            .map_err(|e| format!("Invalid QUIZBOX_MAX_BODY_SIZE: {e}"))?;

        let student_filter = StudentFilter::parse(&env_or("QUIZBOX_STUDENT_FILTER", "strict"))?;

        let log_level = env_or("QUIZBOX_LOG_LEVEL", "info");

        Ok(Config {
            api_key,
            database_path,
            host,
            port,
            max_body_size,
            student_filter,
            log_level,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
