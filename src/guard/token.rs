//! Bearer token verification.
//!
//! Tokens nominally come from an external identity provider. The guard asks a
//! [`TokenVerifier`] for an accept/reject decision; [`StaticTokenVerifier`]
//! accepts exactly one configured value.

use secrecy::{ExposeSecret, SecretString};
use std::fmt;
use tracing::debug;

/// Accept/reject decision for a presented bearer token.
pub trait TokenVerifier: Send + Sync {
    /// Must not panic; a missing token is a normal rejection.
    fn verify(&self, token: Option<&str>) -> bool;
}

impl<F> TokenVerifier for F
where
    F: Fn(Option<&str>) -> bool + Send + Sync,
{
    fn verify(&self, token: Option<&str>) -> bool {
        self(token)
    }
}

/// Verifier that accepts only the configured token.
#[derive(Clone)]
pub struct StaticTokenVerifier {
    valid_token: SecretString,
}

impl StaticTokenVerifier {
    #[must_use]
    pub fn new(valid_token: SecretString) -> Self {
        Self { valid_token }
    }

    /// True when a non-empty token is configured.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.valid_token.expose_secret().is_empty()
    }
}

impl TokenVerifier for StaticTokenVerifier {
    fn verify(&self, token: Option<&str>) -> bool {
        let Some(token) = token else {
            debug!("no token presented");
            return false;
        };
        if token.is_empty() || !self.is_configured() {
            return false;
        }
        token == self.valid_token.expose_secret()
    }
}

impl fmt::Debug for StaticTokenVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticTokenVerifier")
            .field("valid_token", &"***")
            .finish()
    }
}
