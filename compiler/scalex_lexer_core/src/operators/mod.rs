//! Ordered operator rule table.
//!
//! Each rule pairs a spelling with the [`RawTag`] it produces. Rules sharing a
//! leading byte are contiguous and ordered longest-first, so the first rule
//! whose spelling prefixes the input is the maximal munch. A spelling with no
//! rule (a lone `!`) yields no match and the scanner reports it as invalid.
//!
//! A new operator goes in front of every existing rule that is a prefix of
//! it; `rules_are_not_shadowed` in the tests enforces this.

use crate::tag::RawTag;

/// One entry of the operator table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OperatorRule {
    pub spelling: &'static str,
    pub tag: RawTag,
}

const fn rule(spelling: &'static str, tag: RawTag) -> OperatorRule {
    OperatorRule { spelling, tag }
}

/// All operator rules, grouped by leading byte, longest-first within a group.
pub static OPERATOR_RULES: &[OperatorRule] = &[
    rule("==", RawTag::EqualEqual),
    rule("=", RawTag::Equal),
    rule("!=", RawTag::BangEqual),
    rule("<=", RawTag::LessEqual),
    rule("<", RawTag::Less),
    rule(">=", RawTag::GreaterEqual),
    rule(">", RawTag::Greater),
    rule("+", RawTag::Plus),
    rule("-", RawTag::Minus),
    rule("*", RawTag::Star),
];

/// Returns `true` if `byte` can start an operator.
#[inline]
pub fn is_operator_start(byte: u8) -> bool {
    matches!(byte, b'=' | b'!' | b'<' | b'>' | b'+' | b'-' | b'*')
}

/// The contiguous group of rules whose spelling starts with `lead`.
fn group(lead: u8) -> &'static [OperatorRule] {
    let Some(first) = OPERATOR_RULES
        .iter()
        .position(|r| r.spelling.as_bytes()[0] == lead)
    else {
        return &[];
    };
    let len = OPERATOR_RULES[first..]
        .iter()
        .take_while(|r| r.spelling.as_bytes()[0] == lead)
        .count();
    &OPERATOR_RULES[first..first + len]
}

/// Longest operator rule that prefixes `input`, if any.
///
/// `input` is the unscanned remainder of the source.
pub fn longest_match(input: &[u8]) -> Option<&'static OperatorRule> {
    let &lead = input.first()?;
    group(lead)
        .iter()
        .find(|r| input.starts_with(r.spelling.as_bytes()))
}

#[cfg(test)]
mod tests;
