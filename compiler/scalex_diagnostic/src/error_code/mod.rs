//! Error codes for lexical diagnostics.
//!
//! Each code is a stable identifier (e.g. `E0002`) used for `scalex explain`
//! lookups and documentation.

use std::fmt;

/// Error codes for all diagnostics.
///
/// Format: `E####`. The `E0xxx` range belongs to the lexer.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Block comment opened with `/*` but never closed
    E0001,
    /// Character that starts no token
    E0002,
}

impl ErrorCode {
    /// All error code variants, for exhaustive testing.
    pub const ALL: &[ErrorCode] = &[ErrorCode::E0001, ErrorCode::E0002];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
        }
    }

    /// One-line summary of the error.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unterminated block comment",
            ErrorCode::E0002 => "unrecognized character",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E0002"`.
///
/// Case-insensitive. Derived from [`ErrorCode::ALL`] and [`ErrorCode::as_str()`].
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
