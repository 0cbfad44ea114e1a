pub mod extractor;
pub mod verifier;

pub use extractor::ApiKey;
pub use verifier::{CredentialVerifier, SharedSecret};
