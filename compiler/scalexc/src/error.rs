//! Driver errors.
//!
//! Lexical problems in the input are not errors here: they are reported as
//! diagnostics and only change the exit status. `CliError` covers the cases
//! where the driver itself cannot do its job.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot read `{}`: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    #[error("unknown option `{0}`")]
    UnknownOption(String),

    #[error("invalid value `{value}` for `{option}` (expected {expected})")]
    InvalidValue {
        option: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("missing {0}")]
    MissingArgument(&'static str),

    #[error("unknown error code `{0}`")]
    UnknownErrorCode(String),

    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),
}

impl CliError {
    /// Errors caused by how the command line was written.
    ///
    /// `main` follows these with the usage text.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            CliError::UnknownCommand(_)
                | CliError::UnknownOption(_)
                | CliError::InvalidValue { .. }
                | CliError::MissingArgument(_)
        )
    }
}
