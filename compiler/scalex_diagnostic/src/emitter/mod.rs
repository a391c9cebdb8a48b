//! Diagnostic Emitters
//!
//! Provides different output formats for diagnostics:
//! - Terminal: Colored, human-readable output with source snippets
//! - JSON: Machine-readable output for tooling
//!
//! Each emitter implements the `DiagnosticEmitter` trait. Attaching a
//! [`SourceContext`] lets an emitter resolve byte spans to file positions.

mod json;
mod terminal;

pub use json::JsonEmitter;
pub use terminal::{ColorMode, TerminalEmitter};

use std::fmt::Write;

use scalex_ir::Span;

use crate::span_utils::LineOffsetTable;
use crate::Diagnostic;

/// Returns a trailing comma for JSON list serialization.
///
/// Returns `","` when `index` is not the last element, `""` otherwise.
pub(crate) fn trailing_comma(index: usize, total: usize) -> &'static str {
    if index + 1 < total {
        ","
    } else {
        ""
    }
}

/// Trait for emitting diagnostics in various formats.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Emit multiple diagnostics.
    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            self.emit(diag);
        }
    }

    /// Flush any buffered output.
    fn flush(&mut self);

    /// Emit a closing summary of the error count.
    fn emit_summary(&mut self, error_count: usize);
}

/// The file a batch of diagnostics refers to.
#[derive(Clone, Debug)]
pub struct SourceContext<'s> {
    pub path: &'s str,
    pub text: &'s str,
    lines: LineOffsetTable,
}

/// Where a span lands in its file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Located<'s> {
    pub line: u32,
    pub column: u32,
    /// The first line the span touches, without its terminator.
    pub line_text: &'s str,
    /// Characters of the span on that line; at least 1.
    pub width: usize,
}

impl<'s> SourceContext<'s> {
    pub fn new(path: &'s str, text: &'s str) -> Self {
        SourceContext {
            path,
            text,
            lines: LineOffsetTable::build(text),
        }
    }

    /// 1-based `(line, column)` of a byte offset.
    pub fn line_col(&self, offset: u32) -> (u32, u32) {
        self.lines.offset_to_line_col(self.text, offset)
    }

    pub(crate) fn locate(&self, span: Span) -> Located<'s> {
        let (line, column) = self.line_col(span.start);
        let line_text = self.lines.line_text(self.text, line).unwrap_or_default();
        let line_end = self
            .lines
            .line_start_offset(line)
            .map_or(self.text.len(), |start| start as usize + line_text.len());
        let end = (span.end as usize).min(line_end);
        let width = self
            .text
            .get(span.start as usize..end)
            .map_or(0, |s| s.chars().count())
            .max(1);
        Located {
            line,
            column,
            line_text,
            width,
        }
    }
}

/// Escape a string for embedding in a JSON string literal.
pub fn escape_json(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(result, "\\u{:04x}", c as u32);
            }
            c => result.push(c),
        }
    }
    result
}
