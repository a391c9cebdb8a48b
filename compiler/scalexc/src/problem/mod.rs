//! Lex-time problem rendering.
//!
//! Turns a [`LexError`] into a [`Diagnostic`] with an error code, message,
//! label, and the lexer's suggestions ordered most likely first.

use scalex_diagnostic::{Diagnostic, ErrorCode, Suggestion};
use scalex_ir::Span;
use scalex_lexer::{LexError, LexErrorKind, LexSuggestion};

/// Render a `LexError` into a `Diagnostic`.
#[cold]
pub fn render_lex_error(err: &LexError) -> Diagnostic {
    let span = err.span;
    let mut diag = match &err.kind {
        LexErrorKind::UnterminatedComment => Diagnostic::error(ErrorCode::E0001)
            .with_message(ErrorCode::E0001.description())
            .with_label(span, "comment is never closed")
            .with_secondary_label(Span::point(span.end), "input ends here")
            .with_note("block comments end at the first `*/` and do not nest"),

        LexErrorKind::UnrecognizedCharacter { ch } => {
            let label = if ch.is_ascii_graphic() {
                "not part of any token".to_owned()
            } else {
                format!("U+{:04X} is not part of any token", u32::from(*ch))
            };
            Diagnostic::error(ErrorCode::E0002)
                .with_message(err.to_string())
                .with_label(span, label)
        }
    };

    let mut suggestions: Vec<&LexSuggestion> = err.suggestions.iter().collect();
    suggestions.sort_by_key(|s| s.priority);
    for suggestion in suggestions {
        diag = diag.with_suggestion(convert_suggestion(suggestion));
    }
    diag
}

fn convert_suggestion(suggestion: &LexSuggestion) -> Suggestion {
    match &suggestion.replacement {
        Some(r) => Suggestion::replace(
            suggestion.message.clone(),
            r.span,
            r.text.clone(),
            suggestion.priority,
        ),
        None => Suggestion::text(suggestion.message.clone(), suggestion.priority),
    }
}
