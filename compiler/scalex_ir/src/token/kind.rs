//! The closed catalog of token kinds.

use std::fmt;

/// Every kind of token the lexer can produce.
///
/// Kinds are plain one-byte values; the text of a token lives in
/// [`Token::text`](crate::Token::text), not in the kind.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    // Delimiters
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,

    // Comparison
    Equal,
    NotEqual,
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,

    // Arithmetic & assignment
    Assign,
    Plus,
    Minus,
    Star,
    Div,

    // Keywords
    Abstract,
    Case,
    Catch,
    Class,
    Def,
    Do,
    Else,
    Extends,
    False,
    Final,
    Finally,
    For,
    If,
    Implicit,
    Import,
    Match,
    New,
    Null,
    Object,
    Override,
    Package,
    Private,
    Protected,
    Requires,
    Return,
    Sealed,
    Super,
    This,
    Throw,
    Trait,
    Try,
    True,
    Type,
    Val,
    Var,
    While,
    With,
    Yield,

    /// `[A-Za-z_][A-Za-z0-9_]*` that is not a keyword.
    Identifier,
    /// `[0-9]+`
    IntegerLiteral,
    /// `// ...` or `/* ... */`
    Comment,
    /// Maximal run of space, tab, `\n`, `\r`.
    Whitespace,
    /// Input that starts no token, or an unterminated block comment.
    Invalid,
    /// Zero-width terminator at the end of the source.
    EndOfInput,
}

/// Coarse grouping of token kinds, used by renderers.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TokenCategory {
    Delimiter,
    Comparison,
    Operator,
    Keyword,
    Identifier,
    Literal,
    Trivia,
    Error,
    EndOfInput,
}

impl TokenKind {
    /// Every reserved-word kind, in declaration order.
    pub const KEYWORDS: &'static [TokenKind] = &[
        TokenKind::Abstract,
        TokenKind::Case,
        TokenKind::Catch,
        TokenKind::Class,
        TokenKind::Def,
        TokenKind::Do,
        TokenKind::Else,
        TokenKind::Extends,
        TokenKind::False,
        TokenKind::Final,
        TokenKind::Finally,
        TokenKind::For,
        TokenKind::If,
        TokenKind::Implicit,
        TokenKind::Import,
        TokenKind::Match,
        TokenKind::New,
        TokenKind::Null,
        TokenKind::Object,
        TokenKind::Override,
        TokenKind::Package,
        TokenKind::Private,
        TokenKind::Protected,
        TokenKind::Requires,
        TokenKind::Return,
        TokenKind::Sealed,
        TokenKind::Super,
        TokenKind::This,
        TokenKind::Throw,
        TokenKind::Trait,
        TokenKind::Try,
        TokenKind::True,
        TokenKind::Type,
        TokenKind::Val,
        TokenKind::Var,
        TokenKind::While,
        TokenKind::With,
        TokenKind::Yield,
    ];

    /// Every kind, in declaration order.
    pub const ALL: &'static [TokenKind] = &[
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::LBracket,
        TokenKind::RBracket,
        TokenKind::LBrace,
        TokenKind::RBrace,
        TokenKind::Equal,
        TokenKind::NotEqual,
        TokenKind::Less,
        TokenKind::LessOrEqual,
        TokenKind::Greater,
        TokenKind::GreaterOrEqual,
        TokenKind::Assign,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Star,
        TokenKind::Div,
        TokenKind::Abstract,
        TokenKind::Case,
        TokenKind::Catch,
        TokenKind::Class,
        TokenKind::Def,
        TokenKind::Do,
        TokenKind::Else,
        TokenKind::Extends,
        TokenKind::False,
        TokenKind::Final,
        TokenKind::Finally,
        TokenKind::For,
        TokenKind::If,
        TokenKind::Implicit,
        TokenKind::Import,
        TokenKind::Match,
        TokenKind::New,
        TokenKind::Null,
        TokenKind::Object,
        TokenKind::Override,
        TokenKind::Package,
        TokenKind::Private,
        TokenKind::Protected,
        TokenKind::Requires,
        TokenKind::Return,
        TokenKind::Sealed,
        TokenKind::Super,
        TokenKind::This,
        TokenKind::Throw,
        TokenKind::Trait,
        TokenKind::Try,
        TokenKind::True,
        TokenKind::Type,
        TokenKind::Val,
        TokenKind::Var,
        TokenKind::While,
        TokenKind::With,
        TokenKind::Yield,
        TokenKind::Identifier,
        TokenKind::IntegerLiteral,
        TokenKind::Comment,
        TokenKind::Whitespace,
        TokenKind::Invalid,
        TokenKind::EndOfInput,
    ];

    /// Stable name of the variant, used in text and JSON output.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::LParen => "LParen",
            TokenKind::RParen => "RParen",
            TokenKind::LBracket => "LBracket",
            TokenKind::RBracket => "RBracket",
            TokenKind::LBrace => "LBrace",
            TokenKind::RBrace => "RBrace",
            TokenKind::Equal => "Equal",
            TokenKind::NotEqual => "NotEqual",
            TokenKind::Less => "Less",
            TokenKind::LessOrEqual => "LessOrEqual",
            TokenKind::Greater => "Greater",
            TokenKind::GreaterOrEqual => "GreaterOrEqual",
            TokenKind::Assign => "Assign",
            TokenKind::Plus => "Plus",
            TokenKind::Minus => "Minus",
            TokenKind::Star => "Star",
            TokenKind::Div => "Div",
            TokenKind::Abstract => "Abstract",
            TokenKind::Case => "Case",
            TokenKind::Catch => "Catch",
            TokenKind::Class => "Class",
            TokenKind::Def => "Def",
            TokenKind::Do => "Do",
            TokenKind::Else => "Else",
            TokenKind::Extends => "Extends",
            TokenKind::False => "False",
            TokenKind::Final => "Final",
            TokenKind::Finally => "Finally",
            TokenKind::For => "For",
            TokenKind::If => "If",
            TokenKind::Implicit => "Implicit",
            TokenKind::Import => "Import",
            TokenKind::Match => "Match",
            TokenKind::New => "New",
            TokenKind::Null => "Null",
            TokenKind::Object => "Object",
            TokenKind::Override => "Override",
            TokenKind::Package => "Package",
            TokenKind::Private => "Private",
            TokenKind::Protected => "Protected",
            TokenKind::Requires => "Requires",
            TokenKind::Return => "Return",
            TokenKind::Sealed => "Sealed",
            TokenKind::Super => "Super",
            TokenKind::This => "This",
            TokenKind::Throw => "Throw",
            TokenKind::Trait => "Trait",
            TokenKind::Try => "Try",
            TokenKind::True => "True",
            TokenKind::Type => "Type",
            TokenKind::Val => "Val",
            TokenKind::Var => "Var",
            TokenKind::While => "While",
            TokenKind::With => "With",
            TokenKind::Yield => "Yield",
            TokenKind::Identifier => "Identifier",
            TokenKind::IntegerLiteral => "IntegerLiteral",
            TokenKind::Comment => "Comment",
            TokenKind::Whitespace => "Whitespace",
            TokenKind::Invalid => "Invalid",
            TokenKind::EndOfInput => "EndOfInput",
        }
    }

    /// Fixed source spelling, or `None` for kinds whose text varies.
    pub const fn lexeme(self) -> Option<&'static str> {
        let text = match self {
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Equal => "==",
            TokenKind::NotEqual => "!=",
            TokenKind::Less => "<",
            TokenKind::LessOrEqual => "<=",
            TokenKind::Greater => ">",
            TokenKind::GreaterOrEqual => ">=",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Div => "/",
            TokenKind::Abstract => "abstract",
            TokenKind::Case => "case",
            TokenKind::Catch => "catch",
            TokenKind::Class => "class",
            TokenKind::Def => "def",
            TokenKind::Do => "do",
            TokenKind::Else => "else",
            TokenKind::Extends => "extends",
            TokenKind::False => "false",
            TokenKind::Final => "final",
            TokenKind::Finally => "finally",
            TokenKind::For => "for",
            TokenKind::If => "if",
            TokenKind::Implicit => "implicit",
            TokenKind::Import => "import",
            TokenKind::Match => "match",
            TokenKind::New => "new",
            TokenKind::Null => "null",
            TokenKind::Object => "object",
            TokenKind::Override => "override",
            TokenKind::Package => "package",
            TokenKind::Private => "private",
            TokenKind::Protected => "protected",
            TokenKind::Requires => "requires",
            TokenKind::Return => "return",
            TokenKind::Sealed => "sealed",
            TokenKind::Super => "super",
            TokenKind::This => "this",
            TokenKind::Throw => "throw",
            TokenKind::Trait => "trait",
            TokenKind::Try => "try",
            TokenKind::True => "true",
            TokenKind::Type => "type",
            TokenKind::Val => "val",
            TokenKind::Var => "var",
            TokenKind::While => "while",
            TokenKind::With => "with",
            TokenKind::Yield => "yield",
            TokenKind::Identifier
            | TokenKind::IntegerLiteral
            | TokenKind::Comment
            | TokenKind::Whitespace
            | TokenKind::Invalid
            | TokenKind::EndOfInput => return None,
        };
        Some(text)
    }

    /// Coarse grouping of this kind.
    pub const fn category(self) -> TokenCategory {
        match self {
            TokenKind::LParen
            | TokenKind::RParen
            | TokenKind::LBracket
            | TokenKind::RBracket
            | TokenKind::LBrace
            | TokenKind::RBrace => TokenCategory::Delimiter,
            TokenKind::Equal
            | TokenKind::NotEqual
            | TokenKind::Less
            | TokenKind::LessOrEqual
            | TokenKind::Greater
            | TokenKind::GreaterOrEqual => TokenCategory::Comparison,
            TokenKind::Assign
            | TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Star
            | TokenKind::Div => TokenCategory::Operator,
            TokenKind::Identifier => TokenCategory::Identifier,
            TokenKind::IntegerLiteral => TokenCategory::Literal,
            TokenKind::Comment | TokenKind::Whitespace => TokenCategory::Trivia,
            TokenKind::Invalid => TokenCategory::Error,
            TokenKind::EndOfInput => TokenCategory::EndOfInput,
            _ => TokenCategory::Keyword,
        }
    }

    /// Check if this is a reserved keyword.
    #[inline]
    pub const fn is_keyword(self) -> bool {
        matches!(self.category(), TokenCategory::Keyword)
    }

    /// Check if this is whitespace or a comment.
    #[inline]
    pub const fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Comment | TokenKind::Whitespace)
    }

    /// Check if this kind marks malformed input.
    #[inline]
    pub const fn is_error(self) -> bool {
        matches!(self, TokenKind::Invalid)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.lexeme().unwrap_or(self.name()))
    }
}

crate::static_assert_size!(TokenKind, 1);
