use secrecy::SecretString;
use std::sync::Arc;

use crate::guard::{AuthGuard, Session, StaticTokenVerifier};

/// Settings shared by every subcommand.
#[derive(Clone)]
pub struct GlobalArgs {
    pub valid_token: SecretString,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(valid_token: SecretString) -> Self {
        Self { valid_token }
    }

    /// Build a guard over `session` that accepts the configured token.
    #[must_use]
    pub fn guard(&self, session: Session) -> AuthGuard {
        AuthGuard::new(
            Arc::new(session),
            Arc::new(StaticTokenVerifier::new(self.valid_token.clone())),
        )
    }
}

impl std::fmt::Debug for GlobalArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlobalArgs")
            .field("valid_token", &"***")
            .finish()
    }
}
