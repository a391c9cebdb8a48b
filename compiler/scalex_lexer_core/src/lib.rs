//! Low-level scanner for Scalex source text.
//!
//! This crate turns bytes into `(RawTag, len)` pairs and nothing more. It has
//! no dependency on the rest of the compiler, so tools that only need token
//! boundaries (highlighters, formatters, benchmarks) can use it directly.
//!
//! - [`SourceBuffer`] copies the source into a sentinel-terminated buffer.
//! - [`Cursor`] walks that buffer without bounds checks on the hot path.
//! - [`RawScanner`] dispatches on the current byte and yields [`RawToken`]s.
//! - [`operators`] holds the ordered operator rule table.
//!
//! Keyword resolution and error reporting live in `scalex_lexer`.

mod cursor;
pub mod operators;
mod raw_scanner;
mod source_buffer;
mod tag;

pub use cursor::Cursor;
pub use operators::{longest_match, OperatorRule, OPERATOR_RULES};
pub use raw_scanner::{is_ident_continue, tokenize, RawScanner};
pub use source_buffer::SourceBuffer;
pub use tag::{RawTag, RawToken};
