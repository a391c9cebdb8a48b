//! Per-token whitespace and metadata flags.
//!
//! The canonical [`TokenFlags`] type lives in `scalex_ir`. This module
//! computes it: [`FlagTracker`] watches the token stream and summarizes the
//! trivia seen since the last significant token.

pub use scalex_ir::TokenFlags;
use scalex_ir::{Token, TokenKind};

/// Accumulates trivia between significant tokens.
#[derive(Clone, Debug)]
pub struct FlagTracker {
    /// Trivia bits seen since the last significant token.
    pending: u8,
    /// No significant token has been seen yet.
    at_file_start: bool,
}

impl Default for FlagTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl FlagTracker {
    pub fn new() -> Self {
        Self {
            pending: 0,
            at_file_start: true,
        }
    }

    /// Flags for `token`, then fold `token` into the tracked state.
    ///
    /// Trivia tokens receive the flags of the trivia before them as well, so
    /// the returned vector stays parallel to the full token stream.
    pub fn observe(&mut self, token: &Token<'_>) -> TokenFlags {
        let mut flags = TokenFlags::from_bits(self.pending);
        if self.pending == 0 && !self.at_file_start {
            flags.set(TokenFlags::ADJACENT);
        }
        if self.at_file_start || self.pending & TokenFlags::NEWLINE_BEFORE != 0 {
            flags.set(TokenFlags::LINE_START);
        }
        if token.kind.is_error() {
            flags.set(TokenFlags::HAS_ERROR);
        }

        match token.kind {
            TokenKind::Whitespace => {
                if token.text.contains([' ', '\t']) {
                    self.pending |= TokenFlags::SPACE_BEFORE;
                }
                if token.text.contains(['\n', '\r']) {
                    self.pending |= TokenFlags::NEWLINE_BEFORE;
                }
            }
            TokenKind::Comment => {
                self.pending |= TokenFlags::COMMENT_BEFORE;
                if token.text.contains(['\n', '\r']) {
                    self.pending |= TokenFlags::NEWLINE_BEFORE;
                }
            }
            _ => {
                self.pending = 0;
                self.at_file_start = false;
            }
        }
        flags
    }
}
