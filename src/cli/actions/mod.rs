pub mod check_session;
pub mod verify_token;

use anyhow::Result;

#[derive(Debug)]
pub enum Action {
    VerifyToken(verify_token::Args),
    CheckSession(check_session::Args),
}

impl Action {
    /// Execute the action, printing its report to stdout.
    ///
    /// Returns whether the check passed.
    ///
    /// # Errors
    /// Returns an error if the report cannot be serialized.
    pub fn execute(self) -> Result<bool> {
        match self {
            Self::VerifyToken(args) => verify_token::execute(args),
            Self::CheckSession(args) => check_session::execute(args),
        }
    }
}
