//! Diagnostic system for lexical error reporting.
//!
//! - Error codes for searchability
//! - Clear messages (what went wrong)
//! - Primary span (where it went wrong)
//! - Suggestions (how to fix)
//!
//! Rendering lives in [`emitter`]; byte offsets become line/column pairs
//! through [`span_utils::LineOffsetTable`].

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label, Severity, Substitution, Suggestion};
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
