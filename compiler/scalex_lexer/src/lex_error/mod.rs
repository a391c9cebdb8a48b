//! Lexer error types.
//!
//! Errors carry three things:
//! - WHERE: `span` locating the error in source
//! - WHAT: `kind` describing what went wrong
//! - HOW: `suggestions` providing actionable fixes
//!
//! The lexer never stops on an error. Each error is paired with an
//! `Invalid` token over the same span, and scanning resumes after it.

use scalex_ir::Span;

use crate::unicode_confusables;

/// A lexer error with enough context for diagnostic rendering.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind}")]
pub struct LexError {
    /// WHERE the error occurred.
    pub span: Span,
    /// WHAT went wrong.
    pub kind: LexErrorKind,
    /// HOW to fix (actionable suggestions, most likely first).
    pub suggestions: Vec<LexSuggestion>,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// `/*` with no matching `*/` before end of input.
    #[error("unterminated block comment")]
    UnterminatedComment,
    /// A character that starts no token.
    #[error("unrecognized character `{}`", .ch.escape_debug())]
    UnrecognizedCharacter { ch: char },
}

/// Suggestion for fixing a lexical error.
///
/// Rendering in `scalexc` maps these to diagnostic suggestions.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexSuggestion {
    /// Human-readable message describing the fix.
    pub message: String,
    /// Concrete text replacement for auto-fix, if applicable.
    pub replacement: Option<LexReplacement>,
    /// Priority (lower = more likely relevant). 0 = most likely.
    pub priority: u8,
}

/// A concrete text replacement for an auto-fix.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexReplacement {
    /// The span to replace. Empty for insertions.
    pub span: Span,
    /// The replacement text.
    pub text: String,
}

impl LexSuggestion {
    /// Create a text-only suggestion (no code replacement).
    pub fn text(message: impl Into<String>, priority: u8) -> Self {
        Self {
            message: message.into(),
            replacement: None,
            priority,
        }
    }

    /// Create a suggestion with a removal (replace span with empty string).
    pub fn removal(message: impl Into<String>, span: Span, priority: u8) -> Self {
        Self::replace(message, span, "", priority)
    }

    /// Create a suggestion with a replacement.
    pub fn replace(
        message: impl Into<String>,
        span: Span,
        text: impl Into<String>,
        priority: u8,
    ) -> Self {
        Self {
            message: message.into(),
            replacement: Some(LexReplacement {
                span,
                text: text.into(),
            }),
            priority,
        }
    }
}

impl LexError {
    /// Create an unterminated block comment error.
    ///
    /// `span` starts at the opening `/*` and runs to end of input.
    #[cold]
    pub fn unterminated_comment(span: Span) -> Self {
        Self {
            span,
            kind: LexErrorKind::UnterminatedComment,
            suggestions: vec![LexSuggestion::replace(
                "close the comment with `*/`",
                Span::point(span.end),
                "*/",
                0,
            )],
        }
    }

    /// Create an unrecognized character error.
    #[cold]
    pub fn unrecognized_character(span: Span, ch: char) -> Self {
        let mut suggestions = Vec::new();
        if let Some((replacement, name)) = unicode_confusables::lookup(ch) {
            let message = if replacement.is_empty() {
                format!("remove the invisible {name}")
            } else {
                format!("{name} looks like `{replacement}`; use the ASCII `{replacement}`")
            };
            suggestions.push(LexSuggestion::replace(message, span, replacement, 0));
        } else if ch == '!' {
            suggestions.push(LexSuggestion::text(
                "`!` is only valid as part of `!=`",
                0,
            ));
        }
        suggestions.push(LexSuggestion::removal(
            "remove this character",
            span,
            1,
        ));
        Self {
            span,
            kind: LexErrorKind::UnrecognizedCharacter { ch },
            suggestions,
        }
    }
}
