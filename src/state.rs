use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::CredentialVerifier;
use crate::config::Config;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub pool: SqlitePool,
    pub config: Config,
    pub verifier: Arc<dyn CredentialVerifier>,
}
