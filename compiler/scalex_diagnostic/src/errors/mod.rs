//! Embedded error documentation for `scalex explain`.
//!
//! Each error code has a markdown file in this directory that explains the
//! error, shows an example, and describes the fix. The files are embedded at
//! compile time.

use crate::ErrorCode;

/// Registry of embedded error documentation.
pub struct ErrorDocs;

impl ErrorDocs {
    /// Get the documentation for an error code.
    ///
    /// Every code is documented; a new `ErrorCode` variant fails to compile
    /// here until its markdown file exists.
    pub fn get(code: ErrorCode) -> &'static str {
        match code {
            ErrorCode::E0001 => include_str!("E0001.md"),
            ErrorCode::E0002 => include_str!("E0002.md"),
        }
    }
}

#[cfg(test)]
mod tests;
