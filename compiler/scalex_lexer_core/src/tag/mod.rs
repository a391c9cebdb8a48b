//! Raw token tags produced by the scanner.
//!
//! Tags carry no keyword information: every identifier-shaped run is
//! [`RawTag::Ident`], and the cooking layer resolves reserved words.
//! Discriminants are grouped into ranges by token family.

/// Kind of a raw token.
///
/// `#[repr(u8)]` keeps the tag to one byte; [`RawToken`] is therefore 8 bytes.
///
/// | Range | Group |
/// |-------|-------|
/// | 0-15 | identifiers and literals |
/// | 32-79 | operators |
/// | 80-111 | delimiters |
/// | 112-127 | trivia |
/// | 240-254 | errors |
/// | 255 | end of input |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RawTag {
    // Identifiers & Literals
    /// `[A-Za-z_][A-Za-z0-9_]*`, keyword or not.
    Ident = 0,
    /// `[0-9]+`
    Int = 1,

    // Operators
    /// `+`
    Plus = 32,
    /// `-`
    Minus = 33,
    /// `*`
    Star = 34,
    /// `/`
    Slash = 35,
    /// `=`
    Equal = 36,
    /// `==`
    EqualEqual = 37,
    /// `!=`
    BangEqual = 38,
    /// `<`
    Less = 39,
    /// `<=`
    LessEqual = 40,
    /// `>`
    Greater = 41,
    /// `>=`
    GreaterEqual = 42,

    // Delimiters
    /// `(`
    LeftParen = 80,
    /// `)`
    RightParen = 81,
    /// `[`
    LeftBracket = 82,
    /// `]`
    RightBracket = 83,
    /// `{`
    LeftBrace = 84,
    /// `}`
    RightBrace = 85,

    // Trivia
    /// Maximal run of space, tab, `\n`, `\r`.
    Whitespace = 112,
    /// `//` up to, not including, the line terminator.
    LineComment = 113,
    /// `/* ... */`, closed at the first `*/`.
    BlockComment = 114,

    // Errors
    /// One character that starts no token (including an interior NUL).
    InvalidChar = 240,
    /// `/*` with no closing `*/`; covers the rest of the input.
    UnterminatedBlockComment = 241,

    // Control
    /// End of input. Always zero-length.
    Eof = 255,
}

impl RawTag {
    /// Fixed source spelling, or `None` for variable-length tags.
    pub fn lexeme(self) -> Option<&'static str> {
        match self {
            Self::Plus => Some("+"),
            Self::Minus => Some("-"),
            Self::Star => Some("*"),
            Self::Slash => Some("/"),
            Self::Equal => Some("="),
            Self::EqualEqual => Some("=="),
            Self::BangEqual => Some("!="),
            Self::Less => Some("<"),
            Self::LessEqual => Some("<="),
            Self::Greater => Some(">"),
            Self::GreaterEqual => Some(">="),
            Self::LeftParen => Some("("),
            Self::RightParen => Some(")"),
            Self::LeftBracket => Some("["),
            Self::RightBracket => Some("]"),
            Self::LeftBrace => Some("{"),
            Self::RightBrace => Some("}"),
            Self::Ident
            | Self::Int
            | Self::Whitespace
            | Self::LineComment
            | Self::BlockComment
            | Self::InvalidChar
            | Self::UnterminatedBlockComment
            | Self::Eof => None,
        }
    }
}

/// A raw token: tag plus byte length. Position is implicit (running sum).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}

const _: () = assert!(std::mem::size_of::<RawToken>() == 8);
