use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::state::SharedState;

pub const API_KEY_HEADER: &str = "x-api-key";

/// Proof that the request carried an accepted `x-api-key`. Runs before the
/// body is read, so a rejected caller never reaches storage.
#[derive(Debug, Clone, Copy)]
pub struct ApiKey;

impl FromRequestParts<SharedState> for ApiKey {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedState,
    ) -> Result<Self, Self::Rejection> {
        let presented = parts.headers.get(API_KEY_HEADER).map(|v| v.as_bytes());

        if state.verifier.verify(presented) {
            return Ok(ApiKey);
        }

        tracing::warn!(
            path = %parts.uri.path(),
            header_present = presented.is_some(),
            "Rejected request with invalid API key"
        );
        Err(AppError::Unauthorized("Invalid or missing API key".to_string()))
    }
}
