//! Hand-written raw scanner producing `(RawTag, len)` pairs.
//!
//! The scanner operates on a sentinel-terminated [`Cursor`] and produces
//! [`RawToken`] values with zero heap allocation. It does not resolve
//! keywords or parse numeric values; those are deferred to the cooking layer.
//!
//! # Design
//!
//! Main dispatch covers all 256 byte values. Each arm calls a focused method
//! that advances the cursor and returns `RawToken { tag, len }`. The sentinel
//! byte (`0x00`) dispatches to `eof()`, which tells a real end of input apart
//! from an interior NUL. Every call consumes at least one byte unless it
//! returns [`RawTag::Eof`], so scanning always terminates.

use crate::cursor::Cursor;
use crate::operators;
use crate::tag::{RawTag, RawToken};

/// Pure, allocation-free scanner.
///
/// Produces one token at a time as a `(tag, length)` pair.
/// Error conditions are encoded as `RawTag` variants, not as `Result::Err`.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> RawScanner<'a> {
    /// Create a new scanner from a cursor.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    /// Current byte offset of the scanner.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` when the source is exhausted.
    /// Subsequent calls after EOF continue to return `Eof`.
    #[inline]
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        match self.cursor.current() {
            0 => self.eof(start),
            b' ' | b'\t' | b'\n' | b'\r' => self.whitespace(start),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(start),
            b'0'..=b'9' => self.integer(start),
            b'/' => self.slash_or_comment(start),
            b'(' => self.single(start, RawTag::LeftParen),
            b')' => self.single(start, RawTag::RightParen),
            b'[' => self.single(start, RawTag::LeftBracket),
            b']' => self.single(start, RawTag::RightBracket),
            b'{' => self.single(start, RawTag::LeftBrace),
            b'}' => self.single(start, RawTag::RightBrace),
            b if operators::is_operator_start(b) => self.operator(start),
            _ => self.invalid_char(start),
        }
    }

    // === EOF ===

    fn eof(&mut self, start: u32) -> RawToken {
        if self.cursor.is_eof() {
            RawToken {
                tag: RawTag::Eof,
                len: 0,
            }
        } else {
            // Interior NUL: part of the source, starts no token.
            self.invalid_char(start)
        }
    }

    // === Trivia ===

    #[inline]
    fn whitespace(&mut self, start: u32) -> RawToken {
        self.cursor.eat_whitespace();
        self.finish(start, RawTag::Whitespace)
    }

    fn slash_or_comment(&mut self, start: u32) -> RawToken {
        match self.cursor.peek() {
            b'/' => {
                self.cursor.advance_n(2);
                self.cursor.eat_until_line_end_or_eof();
                self.finish(start, RawTag::LineComment)
            }
            b'*' => {
                self.cursor.advance_n(2);
                let tag = if self.cursor.eat_block_comment_body() {
                    RawTag::BlockComment
                } else {
                    RawTag::UnterminatedBlockComment
                };
                self.finish(start, tag)
            }
            _ => self.single(start, RawTag::Slash),
        }
    }

    // === Identifiers & Literals ===

    fn identifier(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // first byte already validated
        self.cursor.eat_while(is_ident_continue);
        self.finish(start, RawTag::Ident)
    }

    fn integer(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        self.cursor.eat_while(|b| b.is_ascii_digit());
        self.finish(start, RawTag::Int)
    }

    // === Operators ===

    #[allow(
        clippy::cast_possible_truncation,
        reason = "operator spellings are at most two bytes"
    )]
    fn operator(&mut self, start: u32) -> RawToken {
        match operators::longest_match(self.cursor.rest()) {
            Some(rule) => {
                self.cursor.advance_n(rule.spelling.len() as u32);
                self.finish(start, rule.tag)
            }
            None => self.invalid_char(start),
        }
    }

    fn single(&mut self, start: u32, tag: RawTag) -> RawToken {
        self.cursor.advance();
        self.finish(start, tag)
    }

    // === Errors ===

    fn invalid_char(&mut self, start: u32) -> RawToken {
        self.cursor.advance_char();
        self.finish(start, RawTag::InvalidChar)
    }

    #[inline]
    fn finish(&self, start: u32, tag: RawTag) -> RawToken {
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }
}

impl Iterator for RawScanner<'_> {
    type Item = RawToken;

    fn next(&mut self) -> Option<RawToken> {
        let tok = self.next_token();
        if tok.tag == RawTag::Eof {
            None
        } else {
            Some(tok)
        }
    }
}

/// 256-byte lookup table for identifier continuation bytes.
/// `true` for a-z, A-Z, 0-9, and underscore.
/// The sentinel byte (0x00) maps to `false`, terminating scan loops.
#[allow(
    clippy::cast_possible_truncation,
    reason = "i ranges over 0..256, every value fits in u8"
)]
static IS_IDENT_CONTINUE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(
            i as u8,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_'
        );
        i += 1;
    }
    table
};

/// Returns `true` if `b` is a valid identifier continuation byte.
#[inline]
pub fn is_ident_continue(b: u8) -> bool {
    IS_IDENT_CONTINUE_TABLE[b as usize]
}

/// Convenience function: scan a source string and collect all raw tokens.
///
/// Returns every token except the final `Eof`.
/// For streaming access, construct a `SourceBuffer` + `RawScanner` directly.
pub fn tokenize(source: &str) -> Vec<RawToken> {
    let buf = crate::SourceBuffer::new(source);
    RawScanner::new(buf.cursor()).collect()
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
