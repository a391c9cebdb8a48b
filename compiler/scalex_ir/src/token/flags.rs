//! Per-token layout context.

/// Per-token metadata flags, computed from the trivia that precedes a token.
///
/// These let a consumer that skips whitespace and comments still tell
/// `a-b` from `a - b`, or find where a line starts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct TokenFlags(u8);

impl TokenFlags {
    /// Spaces or tabs preceded this token.
    pub const SPACE_BEFORE: u8 = 1 << 0;
    /// A line terminator preceded this token.
    pub const NEWLINE_BEFORE: u8 = 1 << 1;
    /// A comment preceded this token.
    pub const COMMENT_BEFORE: u8 = 1 << 2;
    /// First non-trivia token on its line.
    pub const LINE_START: u8 = 1 << 3;
    /// The lexer reported an error for this token.
    pub const HAS_ERROR: u8 = 1 << 4;
    /// No trivia separates this token from the previous one.
    pub const ADJACENT: u8 = 1 << 5;

    /// Empty flags (no bits set).
    pub const EMPTY: Self = TokenFlags(0);

    /// Create flags from raw bits.
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        TokenFlags(bits)
    }

    /// Get the raw bits.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Check if a specific flag is set.
    #[inline]
    pub const fn contains(self, flag: u8) -> bool {
        self.0 & flag != 0
    }

    /// Set a flag.
    #[inline]
    pub fn set(&mut self, flag: u8) {
        self.0 |= flag;
    }

    #[inline]
    pub const fn has_space_before(self) -> bool {
        self.contains(Self::SPACE_BEFORE)
    }

    #[inline]
    pub const fn has_newline_before(self) -> bool {
        self.contains(Self::NEWLINE_BEFORE)
    }

    #[inline]
    pub const fn has_comment_before(self) -> bool {
        self.contains(Self::COMMENT_BEFORE)
    }

    #[inline]
    pub const fn is_line_start(self) -> bool {
        self.contains(Self::LINE_START)
    }

    #[inline]
    pub const fn has_error(self) -> bool {
        self.contains(Self::HAS_ERROR)
    }

    #[inline]
    pub const fn is_adjacent(self) -> bool {
        self.contains(Self::ADJACENT)
    }

    /// Short names of the set flags, in bit order.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        const NAMES: [(u8, &str); 6] = [
            (TokenFlags::SPACE_BEFORE, "space"),
            (TokenFlags::NEWLINE_BEFORE, "newline"),
            (TokenFlags::COMMENT_BEFORE, "comment"),
            (TokenFlags::LINE_START, "line-start"),
            (TokenFlags::HAS_ERROR, "error"),
            (TokenFlags::ADJACENT, "adjacent"),
        ];
        NAMES
            .into_iter()
            .filter(move |&(bit, _)| self.contains(bit))
            .map(|(_, name)| name)
    }
}

crate::static_assert_size!(TokenFlags, 1);
