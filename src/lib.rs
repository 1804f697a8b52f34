//! # Authguard
//!
//! `authguard` answers one question for the rest of a process: is somebody
//! signed in right now? It owns no login flow. A collaborator (an OAuth
//! callback, a test, the CLI) stores the signed-in user on a [`Session`], and
//! the [`AuthGuard`] observes it.
//!
//! ## Session state
//!
//! The session keeps the raw user value exactly as it was stored. The guard
//! validates it on every read: only a JSON object with a non-empty scalar `uid`
//! counts as authenticated. Anything else (a bare string, `{}`, a missing `uid`)
//! degrades to "not authenticated" and never panics.
//!
//! ## Gated operations
//!
//! [`AuthGuard::require_authentication`] wraps any closure. The wrapper checks
//! the session each time it is called, so one wrapped operation follows logins
//! and logouts that happen between calls.
//!
//! ## Tokens
//!
//! Bearer tokens go through a [`TokenVerifier`]. The shipped
//! [`StaticTokenVerifier`] accepts one configured value.

pub mod cli;
pub mod guard;

pub use guard::{
    AuthGuard, Guarded, InvalidUser, Session, StaticTokenVerifier, TokenVerifier, UserRecord,
};

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};
