//! Scalex IR - shared lexical vocabulary.
//!
//! This crate holds the types every other layer agrees on:
//! - [`Span`] for source locations
//! - [`TokenKind`], the closed catalog of token kinds
//! - [`Token`], a classified slice of the source
//! - [`TokenFlags`], per-token layout context
//!
//! Every type is a small `Copy` value; nothing here allocates.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-copied types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod span;
mod token;

pub use span::{Span, SpanError};
pub use token::{CommentStyle, Token, TokenCategory, TokenFlags, TokenKind};
