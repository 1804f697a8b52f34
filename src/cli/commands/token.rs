use clap::{Arg, ArgMatches, Command};
use secrecy::SecretString;

pub const ARG_VALID_TOKEN: &str = "valid-token";
pub const ARG_TOKEN: &str = "token";
pub const SUBCOMMAND: &str = "verify-token";

#[must_use]
pub fn with_args(command: Command) -> Command {
    command.arg(
        Arg::new(ARG_VALID_TOKEN)
            .long("valid-token")
            .help("Bearer token accepted by the verifier")
            .env("AUTHGUARD_VALID_TOKEN")
            .hide_env_values(true)
            .global(true),
    )
}

#[must_use]
pub fn subcommand() -> Command {
    Command::new(SUBCOMMAND)
        .about("Check a bearer token against the configured value")
        .arg(
            Arg::new(ARG_TOKEN)
                .help("Token to verify; when omitted no token is presented"),
        )
}

#[derive(Debug)]
pub struct Options {
    pub valid_token: SecretString,
}

impl Options {
    /// Read the configured token. Missing means nothing is accepted.
    #[must_use]
    pub fn parse(matches: &ArgMatches) -> Self {
        let valid_token = matches
            .get_one::<String>(ARG_VALID_TOKEN)
            .map(|token| SecretString::from(token.clone()))
            .unwrap_or_default();
        Self { valid_token }
    }
}
