//! Reserved-word resolution.
//!
//! The raw scanner reports every identifier-shaped run as `RawTag::Ident`;
//! the cooker asks [`lookup`] whether the run is a reserved word. Matching is
//! exact and case-sensitive, so `Class` and `classical` stay identifiers.
//!
//! Keywords are 2-9 bytes long and start with a lowercase ASCII letter. The
//! lookup rejects anything else before comparing, then matches against only
//! the keywords of the identifier's length.

use scalex_ir::TokenKind;

/// Every reserved word and its kind, sorted by spelling.
pub static KEYWORDS: [(&str, TokenKind); 38] = [
    ("abstract", TokenKind::Abstract),
    ("case", TokenKind::Case),
    ("catch", TokenKind::Catch),
    ("class", TokenKind::Class),
    ("def", TokenKind::Def),
    ("do", TokenKind::Do),
    ("else", TokenKind::Else),
    ("extends", TokenKind::Extends),
    ("false", TokenKind::False),
    ("final", TokenKind::Final),
    ("finally", TokenKind::Finally),
    ("for", TokenKind::For),
    ("if", TokenKind::If),
    ("implicit", TokenKind::Implicit),
    ("import", TokenKind::Import),
    ("match", TokenKind::Match),
    ("new", TokenKind::New),
    ("null", TokenKind::Null),
    ("object", TokenKind::Object),
    ("override", TokenKind::Override),
    ("package", TokenKind::Package),
    ("private", TokenKind::Private),
    ("protected", TokenKind::Protected),
    ("requires", TokenKind::Requires),
    ("return", TokenKind::Return),
    ("sealed", TokenKind::Sealed),
    ("super", TokenKind::Super),
    ("this", TokenKind::This),
    ("throw", TokenKind::Throw),
    ("trait", TokenKind::Trait),
    ("true", TokenKind::True),
    ("try", TokenKind::Try),
    ("type", TokenKind::Type),
    ("val", TokenKind::Val),
    ("var", TokenKind::Var),
    ("while", TokenKind::While),
    ("with", TokenKind::With),
    ("yield", TokenKind::Yield),
];

/// Look up a reserved keyword by text.
///
/// Returns the keyword's `TokenKind`, or `None` for an ordinary identifier.
#[inline]
pub fn lookup(text: &str) -> Option<TokenKind> {
    let bytes = text.as_bytes();
    let len = bytes.len();

    // Guard: all keywords are 2-9 chars and start with a lowercase letter
    if !(2..=9).contains(&len) || !bytes[0].is_ascii_lowercase() {
        return None;
    }

    match len {
        2 => match text {
            "do" => Some(TokenKind::Do),
            "if" => Some(TokenKind::If),
            _ => None,
        },
        3 => match text {
            "def" => Some(TokenKind::Def),
            "for" => Some(TokenKind::For),
            "new" => Some(TokenKind::New),
            "try" => Some(TokenKind::Try),
            "val" => Some(TokenKind::Val),
            "var" => Some(TokenKind::Var),
            _ => None,
        },
        4 => match text {
            "case" => Some(TokenKind::Case),
            "else" => Some(TokenKind::Else),
            "null" => Some(TokenKind::Null),
            "this" => Some(TokenKind::This),
            "true" => Some(TokenKind::True),
            "type" => Some(TokenKind::Type),
            "with" => Some(TokenKind::With),
            _ => None,
        },
        5 => match text {
            "catch" => Some(TokenKind::Catch),
            "class" => Some(TokenKind::Class),
            "false" => Some(TokenKind::False),
            "final" => Some(TokenKind::Final),
            "match" => Some(TokenKind::Match),
            "super" => Some(TokenKind::Super),
            "throw" => Some(TokenKind::Throw),
            "trait" => Some(TokenKind::Trait),
            "while" => Some(TokenKind::While),
            "yield" => Some(TokenKind::Yield),
            _ => None,
        },
        6 => match text {
            "import" => Some(TokenKind::Import),
            "object" => Some(TokenKind::Object),
            "return" => Some(TokenKind::Return),
            "sealed" => Some(TokenKind::Sealed),
            _ => None,
        },
        7 => match text {
            "extends" => Some(TokenKind::Extends),
            "finally" => Some(TokenKind::Finally),
            "package" => Some(TokenKind::Package),
            "private" => Some(TokenKind::Private),
            _ => None,
        },
        8 => match text {
            "abstract" => Some(TokenKind::Abstract),
            "implicit" => Some(TokenKind::Implicit),
            "override" => Some(TokenKind::Override),
            "requires" => Some(TokenKind::Requires),
            _ => None,
        },
        9 => match text {
            "protected" => Some(TokenKind::Protected),
            _ => None,
        },
        _ => None,
    }
}

/// Check whether `text` is a reserved word.
#[inline]
pub fn is_keyword(text: &str) -> bool {
    lookup(text).is_some()
}

/// Iterate the keyword table in spelling order.
pub fn keywords() -> impl Iterator<Item = (&'static str, TokenKind)> {
    KEYWORDS.iter().copied()
}
