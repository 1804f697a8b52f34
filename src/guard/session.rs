//! Process-scoped holder of the signed-in user.
//!
//! Login and logout flows write here; the guard only reads. Values are stored
//! verbatim, including malformed ones, so callers can inspect what a broken
//! login flow left behind. JSON `null` means no user.

use serde_json::Value;
use std::sync::{PoisonError, RwLock};
use tracing::debug;

use super::user::UserRecord;

#[derive(Debug, Default)]
pub struct Session {
    current_user: RwLock<Option<Value>>,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Session that starts out holding `user`.
    #[must_use]
    pub fn with_user(user: impl Into<Value>) -> Self {
        Self {
            current_user: RwLock::new(present(user.into())),
        }
    }

    /// Snapshot of the stored user, unvalidated.
    #[must_use]
    pub fn current_user(&self) -> Option<Value> {
        self.current_user
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Store any value as the current user, replacing what was there.
    /// Storing `null` clears the session.
    pub fn set_current_user(&self, user: impl Into<Value>) {
        let user = present(user.into());
        *self
            .current_user
            .write()
            .unwrap_or_else(PoisonError::into_inner) = user;
    }

    pub fn sign_in(&self, user: &UserRecord) {
        debug!(uid = %user.uid, "session signed in");
        self.set_current_user(user);
    }

    /// Clear the session, returning the previous user.
    pub fn sign_out(&self) -> Option<Value> {
        let previous = self
            .current_user
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if previous.is_some() {
            debug!("session signed out");
        }
        previous
    }
}

fn present(user: Value) -> Option<Value> {
    match user {
        Value::Null => None,
        user => Some(user),
    }
}
