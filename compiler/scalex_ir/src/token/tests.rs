use std::collections::HashSet;

use pretty_assertions::assert_eq;

use super::*;

// === TokenKind catalog ===

#[test]
fn all_lists_every_kind_once() {
    let unique: HashSet<_> = TokenKind::ALL.iter().collect();
    assert_eq!(unique.len(), TokenKind::ALL.len());
    assert_eq!(TokenKind::ALL.len(), 61);
}

#[test]
fn all_is_in_declaration_order() {
    for pair in TokenKind::ALL.windows(2) {
        assert!(pair[0] < pair[1], "{:?} listed before {:?}", pair[0], pair[1]);
    }
}

#[test]
fn keywords_are_exactly_keyword_category() {
    let from_all: Vec<TokenKind> = TokenKind::ALL
        .iter()
        .copied()
        .filter(|k| k.is_keyword())
        .collect();
    assert_eq!(from_all, TokenKind::KEYWORDS.to_vec());
    assert_eq!(TokenKind::KEYWORDS.len(), 38);
}

#[test]
fn keyword_lexemes_are_lowercase_ascii() {
    for kind in TokenKind::KEYWORDS {
        let text = kind.lexeme().unwrap_or_default();
        assert!(!text.is_empty(), "{kind:?} has no lexeme");
        assert!(text.bytes().all(|b| b.is_ascii_lowercase()), "{text}");
    }
}

#[test]
fn names_are_unique() {
    let names: HashSet<_> = TokenKind::ALL.iter().map(|k| k.name()).collect();
    assert_eq!(names.len(), TokenKind::ALL.len());
}

#[test]
fn names_match_debug_output() {
    for kind in TokenKind::ALL {
        assert_eq!(kind.name(), format!("{kind:?}"));
    }
}

#[test]
fn variable_text_kinds_have_no_lexeme() {
    for kind in [
        TokenKind::Identifier,
        TokenKind::IntegerLiteral,
        TokenKind::Comment,
        TokenKind::Whitespace,
        TokenKind::Invalid,
        TokenKind::EndOfInput,
    ] {
        assert_eq!(kind.lexeme(), None);
    }
}

#[test]
fn categories() {
    assert_eq!(TokenKind::LBrace.category(), TokenCategory::Delimiter);
    assert_eq!(TokenKind::LessOrEqual.category(), TokenCategory::Comparison);
    assert_eq!(TokenKind::Assign.category(), TokenCategory::Operator);
    assert_eq!(TokenKind::Div.category(), TokenCategory::Operator);
    assert_eq!(TokenKind::Yield.category(), TokenCategory::Keyword);
    assert_eq!(TokenKind::Identifier.category(), TokenCategory::Identifier);
    assert_eq!(TokenKind::IntegerLiteral.category(), TokenCategory::Literal);
    assert_eq!(TokenKind::Comment.category(), TokenCategory::Trivia);
    assert_eq!(TokenKind::Invalid.category(), TokenCategory::Error);
    assert_eq!(TokenKind::EndOfInput.category(), TokenCategory::EndOfInput);
}

#[test]
fn predicates() {
    assert!(TokenKind::Whitespace.is_trivia());
    assert!(TokenKind::Comment.is_trivia());
    assert!(!TokenKind::Invalid.is_trivia());
    assert!(TokenKind::Invalid.is_error());
    assert!(!TokenKind::Identifier.is_keyword());
    assert!(TokenKind::With.is_keyword());
}

#[test]
fn display_prefers_lexeme() {
    assert_eq!(TokenKind::GreaterOrEqual.to_string(), ">=");
    assert_eq!(TokenKind::Class.to_string(), "class");
    assert_eq!(TokenKind::Identifier.to_string(), "Identifier");
}

// === TokenFlags ===

#[test]
fn flags_set_and_query() {
    let mut flags = TokenFlags::EMPTY;
    assert_eq!(flags.bits(), 0);
    flags.set(TokenFlags::SPACE_BEFORE);
    flags.set(TokenFlags::LINE_START);
    assert!(flags.has_space_before());
    assert!(flags.is_line_start());
    assert!(!flags.has_newline_before());
    assert!(!flags.is_adjacent());
    assert_eq!(TokenFlags::from_bits(flags.bits()), flags);
}

#[test]
fn flag_bits_are_distinct() {
    let bits = [
        TokenFlags::SPACE_BEFORE,
        TokenFlags::NEWLINE_BEFORE,
        TokenFlags::COMMENT_BEFORE,
        TokenFlags::LINE_START,
        TokenFlags::HAS_ERROR,
        TokenFlags::ADJACENT,
    ];
    let combined = bits.iter().fold(0u8, |acc, b| {
        assert_eq!(acc & b, 0);
        acc | b
    });
    assert_eq!(combined.count_ones(), 6);
}

#[test]
fn flag_names_in_bit_order() {
    let flags = TokenFlags::from_bits(TokenFlags::HAS_ERROR | TokenFlags::NEWLINE_BEFORE);
    assert_eq!(flags.names().collect::<Vec<_>>(), vec!["newline", "error"]);
    assert_eq!(TokenFlags::EMPTY.names().count(), 0);
}

// === Token ===

#[test]
fn token_accessors() {
    let tok = Token::new(TokenKind::Identifier, Span::new(4, 7), "foo");
    assert_eq!(tok.start(), 4);
    assert_eq!(tok.end(), 7);
    assert_eq!(tok.len(), 3);
    assert!(!tok.is_empty());
    assert!(!tok.is_trivia());
}

#[test]
fn comment_style_from_text() {
    let line = Token::new(TokenKind::Comment, Span::new(0, 4), "// x");
    let block = Token::new(TokenKind::Comment, Span::new(0, 7), "/* x */");
    let ident = Token::new(TokenKind::Identifier, Span::new(0, 1), "x");
    assert_eq!(line.comment_style(), Some(CommentStyle::Line));
    assert_eq!(block.comment_style(), Some(CommentStyle::Block));
    assert_eq!(ident.comment_style(), None);
}

#[test]
fn integer_value() {
    let small = Token::new(TokenKind::IntegerLiteral, Span::new(0, 3), "042");
    assert_eq!(small.integer_value(), Some(42));

    let max = Token::new(TokenKind::IntegerLiteral, Span::new(0, 20), "18446744073709551615");
    assert_eq!(max.integer_value(), Some(u64::MAX));

    let overflow = Token::new(TokenKind::IntegerLiteral, Span::new(0, 20), "18446744073709551616");
    assert_eq!(overflow.integer_value(), None);

    let ident = Token::new(TokenKind::Identifier, Span::new(0, 2), "42");
    assert_eq!(ident.integer_value(), None);
}
