//! Session authentication guard.
//!
//! Flow Overview: a login collaborator stores the user on a [`Session`]; the
//! [`AuthGuard`] reads it back on every check, validates it as a
//! [`UserRecord`], and gates wrapped operations on the result. None of the
//! guard operations fail: malformed session data means "not authenticated".

pub mod session;
pub mod token;
pub mod user;

use serde_json::Value;
use std::{fmt, sync::Arc};
use tracing::debug;

pub use self::session::Session;
pub use self::token::{StaticTokenVerifier, TokenVerifier};
pub use self::user::{InvalidUser, UserRecord};

/// Authentication predicates and the protective wrapper over one session.
#[derive(Clone)]
pub struct AuthGuard {
    session: Arc<Session>,
    verifier: Arc<dyn TokenVerifier>,
}

impl AuthGuard {
    #[must_use]
    pub fn new(session: Arc<Session>, verifier: Arc<dyn TokenVerifier>) -> Self {
        Self { session, verifier }
    }

    #[must_use]
    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    /// True iff the session holds a valid user.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.authenticated_user().is_some()
    }

    /// The stored user exactly as the session holds it, valid or not.
    ///
    /// Use [`AuthGuard::is_authenticated`] to decide whether it can be trusted.
    #[must_use]
    pub fn current_user(&self) -> Option<Value> {
        self.session.current_user()
    }

    /// The stored user, if it is a valid [`UserRecord`].
    #[must_use]
    pub fn authenticated_user(&self) -> Option<UserRecord> {
        let value = self.session.current_user()?;
        match UserRecord::try_from(&value) {
            Ok(user) => Some(user),
            Err(err) => {
                debug!("session user rejected: {err}");
                None
            }
        }
    }

    /// Why the stored user was rejected. `None` when the session is empty or
    /// the user is valid.
    #[must_use]
    pub fn rejection(&self) -> Option<InvalidUser> {
        let value = self.session.current_user()?;
        UserRecord::try_from(&value).err()
    }

    #[must_use]
    pub fn verify_token(&self, token: Option<&str>) -> bool {
        self.verifier.verify(token)
    }

    /// Run `operation` only if the session is authenticated right now.
    #[must_use = "`None` means the operation was skipped"]
    pub fn if_authenticated<R, F>(&self, operation: F) -> Option<R>
    where
        F: FnOnce() -> R,
    {
        if self.is_authenticated() {
            Some(operation())
        } else {
            debug!("operation skipped: not authenticated");
            None
        }
    }

    /// Wrap `operation` so every call is gated on the session state at call time.
    #[must_use]
    pub fn require_authentication<F>(&self, operation: F) -> Guarded<F> {
        Guarded {
            guard: self.clone(),
            operation,
        }
    }
}

impl fmt::Debug for AuthGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthGuard")
            .field("session", &self.session)
            .field("verifier", &"***")
            .finish()
    }
}

/// Operation wrapped by [`AuthGuard::require_authentication`].
///
/// Arguments go through as a single value: `()` for none, a tuple for several
/// positional arguments, a struct for named or defaulted ones. Whatever the
/// operation returns, `Err` values included, comes back inside `Some`.
#[derive(Clone, Debug)]
pub struct Guarded<F> {
    guard: AuthGuard,
    operation: F,
}

impl<F> Guarded<F> {
    #[must_use = "`None` means the operation was skipped"]
    pub fn call<A, R>(&self, args: A) -> Option<R>
    where
        F: Fn(A) -> R,
    {
        self.guard.if_authenticated(|| (self.operation)(args))
    }

    #[must_use = "`None` means the operation was skipped"]
    pub fn invoke<R>(&self) -> Option<R>
    where
        F: Fn() -> R,
    {
        self.guard.if_authenticated(|| (self.operation)())
    }

    #[must_use]
    pub fn guard(&self) -> &AuthGuard {
        &self.guard
    }

    /// Unwrap the operation, dropping the gate.
    pub fn into_inner(self) -> F {
        self.operation
    }
}
