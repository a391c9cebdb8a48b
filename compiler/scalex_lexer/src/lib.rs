//! Tokenizer for Scalex source text.
//!
//! Two entry points share one pipeline:
//!
//! ```text
//! &str -> SourceBuffer -> RawScanner -> TokenCooker -> Token
//! ```
//!
//! - [`Lexer`] is lazy: call [`Lexer::next_token`] or iterate it.
//! - [`tokenize`] is eager: it collects every token, the per-token
//!   [`TokenFlags`], and the errors into a [`LexOutput`].
//!
//! The stream is lossless. Whitespace and comments are tokens, every byte of
//! the source belongs to exactly one token, and malformed input becomes an
//! `Invalid` token paired with a [`LexError`]. Lexing never fails.

mod cooker;
pub mod keywords;
mod lex_error;
mod token_flags;
mod unicode_confusables;

use scalex_ir::{Span, Token, TokenKind};
use scalex_lexer_core::{RawScanner, SourceBuffer};

use crate::cooker::TokenCooker;

pub use lex_error::{LexError, LexErrorKind, LexReplacement, LexSuggestion};
pub use token_flags::{FlagTracker, TokenFlags};

/// Lazy tokenizer over one source text.
///
/// Owns a sentinel-terminated copy of the source for scanning and borrows
/// the original text so tokens can hand out `&'src str` slices. The scan
/// position only moves forward; once `EndOfInput` is produced, every later
/// call produces it again.
pub struct Lexer<'src> {
    source: &'src str,
    buffer: SourceBuffer,
    pos: u32,
    cooker: TokenCooker<'src>,
    /// Set once the iterator has yielded `EndOfInput`.
    finished: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            buffer: SourceBuffer::new(source),
            pos: 0,
            cooker: TokenCooker::new(source),
            finished: false,
        }
    }

    /// Scan and classify the next token.
    pub fn next_token(&mut self) -> Token<'src> {
        let mut scanner = RawScanner::new(self.buffer.cursor_at(self.pos));
        let raw = scanner.next_token();
        let span = Span::with_len(self.pos, raw.len);
        self.pos = span.end;

        let kind = self.cooker.cook(raw.tag, span);
        let text = self.source.get(span.to_range()).unwrap_or_default();
        Token::new(kind, span, text)
    }

    /// Current byte offset.
    pub fn position(&self) -> u32 {
        self.pos
    }

    /// Errors found so far, in source order.
    pub fn errors(&self) -> &[LexError] {
        self.cooker.errors()
    }

    /// Consume the lexer, returning every error found so far.
    pub fn into_errors(self) -> Vec<LexError> {
        self.cooker.into_errors()
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    /// Yields every token including the final `EndOfInput`, then `None`.
    fn next(&mut self) -> Option<Token<'src>> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.kind == TokenKind::EndOfInput {
            self.finished = true;
        }
        Some(token)
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

/// Eagerly tokenized source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexOutput<'src> {
    /// Every token in source order, ending with `EndOfInput`.
    pub tokens: Vec<Token<'src>>,
    /// Flags parallel to `tokens`.
    pub flags: Vec<TokenFlags>,
    /// Errors in source order. Each matches exactly one `Invalid` token.
    pub errors: Vec<LexError>,
}

impl<'src> LexOutput<'src> {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Concatenated token text. Always equal to the lexed source.
    pub fn reconstruct(&self) -> String {
        let len = self.tokens.last().map_or(0, |t| t.end() as usize);
        let mut out = String::with_capacity(len);
        for token in &self.tokens {
            out.push_str(token.text);
        }
        out
    }

    /// Non-trivia tokens with their flags.
    pub fn significant(&self) -> impl Iterator<Item = (Token<'src>, TokenFlags)> + '_ {
        self.tokens
            .iter()
            .zip(&self.flags)
            .filter(|(t, _)| !t.is_trivia())
            .map(|(&t, &f)| (t, f))
    }
}

/// Tokenize `source` in one pass.
///
/// Always terminates and always covers the whole input; errors are returned
/// alongside the tokens rather than stopping the scan.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(
        bytes = source.len(),
        tokens = tracing::field::Empty,
        errors = tracing::field::Empty
    )
)]
pub fn tokenize(source: &str) -> LexOutput<'_> {
    let mut lexer = Lexer::new(source);
    let mut tracker = FlagTracker::new();
    // Rough estimate: one token per four bytes.
    let mut tokens = Vec::with_capacity(source.len() / 4 + 1);
    let mut flags = Vec::with_capacity(source.len() / 4 + 1);

    for token in &mut lexer {
        flags.push(tracker.observe(&token));
        tokens.push(token);
    }

    let errors = lexer.into_errors();
    let span = tracing::Span::current();
    span.record("tokens", tokens.len());
    span.record("errors", errors.len());
    tracing::debug!(tokens = tokens.len(), errors = errors.len(), "tokenized");

    LexOutput {
        tokens,
        flags,
        errors,
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
