use crate::cli::globals::GlobalArgs;
use crate::guard::Session;
use anyhow::Result;
use secrecy::ExposeSecret;
use serde::Serialize;
use std::fmt;
use tracing::{info, instrument, warn};

pub struct Args {
    pub globals: GlobalArgs,
    pub token: Option<String>,
}

impl fmt::Debug for Args {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Args")
            .field("globals", &self.globals)
            .field("token", &self.token.as_ref().map(|_| "***"))
            .finish()
    }
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Report {
    pub token_present: bool,
    pub valid: bool,
}

#[must_use]
pub fn report(args: &Args) -> Report {
    let guard = args.globals.guard(Session::new());
    Report {
        token_present: args.token.is_some(),
        valid: guard.verify_token(args.token.as_deref()),
    }
}

/// Execute the verify-token action.
/// # Errors
/// Returns an error if the report cannot be serialized.
#[instrument(skip_all)]
pub fn execute(args: Args) -> Result<bool> {
    if args.globals.valid_token.expose_secret().is_empty() {
        warn!("no valid token configured, every token will be rejected");
    }

    let report = report(&args);
    info!(valid = report.valid, "token checked");

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(report.valid)
}
