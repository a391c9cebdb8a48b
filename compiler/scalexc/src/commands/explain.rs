//! The `explain` command: display documentation for an error code.

use std::io::Write;

use scalex_diagnostic::{ErrorCode, ErrorDocs};

use super::{write_all, Status};
use crate::CliError;

/// Print the documentation for `code_str` (case-insensitive, e.g. `e0001`).
pub fn explain_error(code_str: &str, out: &mut impl Write) -> Result<Status, CliError> {
    let code = code_str
        .parse::<ErrorCode>()
        .map_err(|()| CliError::UnknownErrorCode(code_str.to_owned()))?;

    write_all(out, ErrorDocs::get(code))?;
    Ok(Status::Success)
}
