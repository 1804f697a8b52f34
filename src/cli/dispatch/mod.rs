//! Command-line argument dispatch.
//!
//! Maps validated CLI arguments to the action the binary executes.

use crate::cli::actions::{Action, check_session, verify_token};
use crate::cli::commands::{session, token};
use crate::cli::globals::GlobalArgs;
use anyhow::{Result, anyhow};

/// Map validated CLI matches to an action.
///
/// # Errors
/// Returns an error if the subcommand is unknown or its input cannot be loaded.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let globals = GlobalArgs::new(token::Options::parse(matches).valid_token);

    match matches.subcommand() {
        Some((token::SUBCOMMAND, sub_m)) => Ok(Action::VerifyToken(verify_token::Args {
            globals,
            token: sub_m.get_one::<String>(token::ARG_TOKEN).cloned(),
        })),
        Some((session::SUBCOMMAND, sub_m)) => {
            let options = session::Options::parse(sub_m)?;
            Ok(Action::CheckSession(check_session::Args {
                globals,
                user: options.user,
            }))
        }
        Some((name, _)) => Err(anyhow!("unknown subcommand: {name}")),
        None => Err(anyhow!("missing subcommand")),
    }
}
