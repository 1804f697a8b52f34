use crate::cli::globals::GlobalArgs;
use crate::guard::{Session, UserRecord};
use anyhow::Result;
use serde::Serialize;
use serde_json::Value;
use tracing::{info, instrument};

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub user: Option<Value>,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Report {
    pub authenticated: bool,
    pub current_user: Option<Value>,
    pub uid: Option<String>,
    pub reason: Option<String>,
}

#[must_use]
pub fn report(args: Args) -> Report {
    let session = args.user.map_or_else(Session::new, Session::with_user);
    let guard = args.globals.guard(session);

    // One snapshot, so uid and reason describe the same value.
    let current_user = guard.current_user();
    let (uid, reason) = match current_user.as_ref().map(UserRecord::try_from) {
        Some(Ok(user)) => (Some(user.uid), None),
        Some(Err(reason)) => (None, Some(reason.to_string())),
        None => (None, None),
    };
    Report {
        authenticated: uid.is_some(),
        current_user,
        uid,
        reason,
    }
}

/// Execute the check-session action.
/// # Errors
/// Returns an error if the report cannot be serialized.
#[instrument(skip_all)]
pub fn execute(args: Args) -> Result<bool> {
    let report = report(args);
    info!(authenticated = report.authenticated, "session checked");

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(report.authenticated)
}
