//! Tokens: a kind, a span, and the source text they cover.

mod flags;
mod kind;

pub use flags::TokenFlags;
pub use kind::{TokenCategory, TokenKind};

use crate::Span;

/// Which comment syntax a `Comment` token uses.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum CommentStyle {
    /// `// ...` to end of line.
    Line,
    /// `/* ... */`
    Block,
}

/// A classified slice of the source.
///
/// `text` always equals `&source[span.to_range()]`; concatenating the text
/// of every token in a stream reproduces the source.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub span: Span,
    pub text: &'src str,
}

impl<'src> Token<'src> {
    #[inline]
    pub const fn new(kind: TokenKind, span: Span, text: &'src str) -> Self {
        Token { kind, span, text }
    }

    #[inline]
    pub const fn start(&self) -> u32 {
        self.span.start
    }

    #[inline]
    pub const fn end(&self) -> u32 {
        self.span.end
    }

    /// Length in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.span.len()
    }

    /// Only `EndOfInput` is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    #[inline]
    pub const fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }

    /// Comment syntax of a `Comment` token; `None` for other kinds.
    pub fn comment_style(&self) -> Option<CommentStyle> {
        if self.kind != TokenKind::Comment {
            return None;
        }
        if self.text.starts_with("//") {
            Some(CommentStyle::Line)
        } else {
            Some(CommentStyle::Block)
        }
    }

    /// Value of an `IntegerLiteral`.
    ///
    /// `None` for other kinds, and for literals that overflow `u64`.
    pub fn integer_value(&self) -> Option<u64> {
        if self.kind != TokenKind::IntegerLiteral {
            return None;
        }
        self.text.parse().ok()
    }
}

#[cfg(test)]
mod tests;
