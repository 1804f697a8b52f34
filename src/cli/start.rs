use crate::cli::{actions::Action, commands, dispatch, telemetry};
use anyhow::Result;

/// Parse the command line, install logging and resolve the action to run.
///
/// # Errors
///
/// Returns an error if logging cannot be installed or the action's input cannot be loaded
pub fn start() -> Result<Action> {
    let matches = commands::new().get_matches();

    let logging = commands::logging::Options::parse(&matches);
    telemetry::init(logging.level, logging.format)?;

    dispatch::handler(&matches)
}
