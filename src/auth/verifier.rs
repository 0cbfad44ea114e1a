use subtle::ConstantTimeEq;

/// Decides whether a presented credential grants access. Handlers only see
/// the outcome, so the scheme behind it can change without touching them.
pub trait CredentialVerifier: Send + Sync {
    /// `presented` is `None` when the caller sent no credential at all.
    fn verify(&self, presented: Option<&[u8]>) -> bool;
}

/// A single static key shared by every client.
pub struct SharedSecret {
    secret: Vec<u8>,
}

impl SharedSecret {
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl CredentialVerifier for SharedSecret {
    fn verify(&self, presented: Option<&[u8]>) -> bool {
        match presented {
            Some(candidate) => candidate.ct_eq(self.secret.as_slice()).into(),
            None => false,
        }
    }
}
