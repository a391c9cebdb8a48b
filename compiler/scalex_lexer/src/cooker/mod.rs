//! Token cooking layer.
//!
//! Transforms `(RawTag, len)` pairs from the raw scanner into `TokenKind`
//! values, resolving keywords and recording errors.
//!
//! ```text
//! source -> RawScanner -> (RawTag, len) -> TokenCooker -> TokenKind
//! ```
//!
//! - **Operators/delimiters**: direct 1:1 mapping
//! - **Identifiers**: keyword lookup
//! - **Trivia**: whitespace and both comment styles map to their kinds
//! - **Errors**: push a `LexError`, return `TokenKind::Invalid`

use scalex_ir::{Span, TokenKind};
use scalex_lexer_core::RawTag;

use crate::keywords;
use crate::lex_error::LexError;

/// Cooks raw tokens into `TokenKind` values.
///
/// Each `cook()` call is independent; errors accumulate for the whole source.
pub(crate) struct TokenCooker<'src> {
    source: &'src str,
    errors: Vec<LexError>,
}

impl<'src> TokenCooker<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        Self {
            source,
            errors: Vec::new(),
        }
    }

    pub(crate) fn errors(&self) -> &[LexError] {
        &self.errors
    }

    pub(crate) fn into_errors(self) -> Vec<LexError> {
        self.errors
    }

    /// Cook a single raw token covering `span` into a `TokenKind`.
    #[inline]
    pub(crate) fn cook(&mut self, tag: RawTag, span: Span) -> TokenKind {
        match tag {
            RawTag::Ident => {
                let text = self.text(span);
                keywords::lookup(text).unwrap_or(TokenKind::Identifier)
            }
            RawTag::Int => TokenKind::IntegerLiteral,

            RawTag::Plus => TokenKind::Plus,
            RawTag::Minus => TokenKind::Minus,
            RawTag::Star => TokenKind::Star,
            RawTag::Slash => TokenKind::Div,
            RawTag::Equal => TokenKind::Assign,
            RawTag::EqualEqual => TokenKind::Equal,
            RawTag::BangEqual => TokenKind::NotEqual,
            RawTag::Less => TokenKind::Less,
            RawTag::LessEqual => TokenKind::LessOrEqual,
            RawTag::Greater => TokenKind::Greater,
            RawTag::GreaterEqual => TokenKind::GreaterOrEqual,

            RawTag::LeftParen => TokenKind::LParen,
            RawTag::RightParen => TokenKind::RParen,
            RawTag::LeftBracket => TokenKind::LBracket,
            RawTag::RightBracket => TokenKind::RBracket,
            RawTag::LeftBrace => TokenKind::LBrace,
            RawTag::RightBrace => TokenKind::RBrace,

            RawTag::Whitespace => TokenKind::Whitespace,
            RawTag::LineComment | RawTag::BlockComment => TokenKind::Comment,

            RawTag::InvalidChar => {
                let ch = self.text(span).chars().next().unwrap_or('\u{FFFD}');
                self.push_error(LexError::unrecognized_character(span, ch));
                TokenKind::Invalid
            }
            RawTag::UnterminatedBlockComment => {
                self.push_error(LexError::unterminated_comment(span));
                TokenKind::Invalid
            }

            RawTag::Eof => TokenKind::EndOfInput,
        }
    }

    #[inline]
    fn text(&self, span: Span) -> &'src str {
        self.source.get(span.to_range()).unwrap_or_default()
    }

    #[cold]
    fn push_error(&mut self, error: LexError) {
        tracing::trace!(span = %error.span, kind = ?error.kind, "lexical error");
        self.errors.push(error);
    }
}
