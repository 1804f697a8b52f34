use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};
use serde_json::Value;
use std::fs;

pub const ARG_USER: &str = "user";
pub const ARG_USER_FILE: &str = "user-file";
pub const SUBCOMMAND: &str = "check-session";

#[must_use]
pub fn subcommand() -> Command {
    Command::new(SUBCOMMAND)
        .about("Report whether a session holding the given user is authenticated")
        .arg(
            Arg::new(ARG_USER)
                .long("user")
                .help("Current user as JSON, stored on the session verbatim")
                .conflicts_with(ARG_USER_FILE),
        )
        .arg(
            Arg::new(ARG_USER_FILE)
                .long("user-file")
                .help("Path to a JSON file holding the current user"),
        )
}

#[derive(Debug)]
pub struct Options {
    pub user: Option<Value>,
}

impl Options {
    /// Load the session user. Neither flag means an empty session.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or the input is not JSON.
    pub fn parse(matches: &ArgMatches) -> Result<Self> {
        let user = if let Some(raw) = matches.get_one::<String>(ARG_USER) {
            Some(serde_json::from_str(raw).context("--user is not valid JSON")?)
        } else if let Some(path) = matches.get_one::<String>(ARG_USER_FILE) {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read user file: {path}"))?;
            Some(
                serde_json::from_str(&raw)
                    .with_context(|| format!("user file is not valid JSON: {path}"))?,
            )
        } else {
            None
        };

        Ok(Self { user })
    }
}
