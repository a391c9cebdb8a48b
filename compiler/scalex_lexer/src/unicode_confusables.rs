//! Unicode confusable character detection.
//!
//! Maps characters that look like Scalex punctuation to the ASCII spelling
//! the author most likely meant. Source is ASCII-only outside comments; this
//! table only improves the "unrecognized character" message.

/// `(found, suggested, unicode_name)`, sorted by codepoint for binary search.
///
/// An empty suggestion means the character is invisible and should be removed.
const UNICODE_CONFUSABLES: &[(char, &str, &str)] = &[
    ('\u{00D7}', "*", "Multiplication Sign"),
    ('\u{200B}', "", "Zero Width Space"),
    ('\u{200C}', "", "Zero Width Non-Joiner"),
    ('\u{200D}', "", "Zero Width Joiner"),
    ('\u{2010}', "-", "Hyphen"),
    ('\u{2011}', "-", "Non-Breaking Hyphen"),
    ('\u{2012}', "-", "Figure Dash"),
    ('\u{2013}', "-", "En Dash"),
    ('\u{2014}', "-", "Em Dash"),
    ('\u{2044}', "/", "Fraction Slash"),
    ('\u{2212}', "-", "Minus Sign"),
    ('\u{2215}', "/", "Division Slash"),
    ('\u{2217}', "*", "Asterisk Operator"),
    ('\u{2260}', "!=", "Not Equal To"),
    ('\u{2264}', "<=", "Less-Than or Equal To"),
    ('\u{2265}', ">=", "Greater-Than or Equal To"),
    ('\u{2329}', "<", "Left-Pointing Angle Bracket"),
    ('\u{232A}', ">", "Right-Pointing Angle Bracket"),
    ('\u{2768}', "(", "Medium Left Parenthesis Ornament"),
    ('\u{2769}', ")", "Medium Right Parenthesis Ornament"),
    ('\u{FEFF}', "", "Zero Width No-Break Space (BOM)"),
    ('\u{FF08}', "(", "Fullwidth Left Parenthesis"),
    ('\u{FF09}', ")", "Fullwidth Right Parenthesis"),
    ('\u{FF0A}', "*", "Fullwidth Asterisk"),
    ('\u{FF0B}', "+", "Fullwidth Plus Sign"),
    ('\u{FF0D}', "-", "Fullwidth Hyphen-Minus"),
    ('\u{FF0F}', "/", "Fullwidth Solidus"),
    ('\u{FF1C}', "<", "Fullwidth Less-Than Sign"),
    ('\u{FF1D}', "=", "Fullwidth Equals Sign"),
    ('\u{FF1E}', ">", "Fullwidth Greater-Than Sign"),
    ('\u{FF3B}', "[", "Fullwidth Left Square Bracket"),
    ('\u{FF3D}', "]", "Fullwidth Right Square Bracket"),
    ('\u{FF3F}', "_", "Fullwidth Low Line"),
    ('\u{FF5B}', "{", "Fullwidth Left Curly Bracket"),
    ('\u{FF5D}', "}", "Fullwidth Right Curly Bracket"),
];

/// Look up a confusable: `Some((ascii_spelling, unicode_name))`.
pub(crate) fn lookup(ch: char) -> Option<(&'static str, &'static str)> {
    UNICODE_CONFUSABLES
        .binary_search_by_key(&ch, |&(c, _, _)| c)
        .ok()
        .map(|i| (UNICODE_CONFUSABLES[i].1, UNICODE_CONFUSABLES[i].2))
}
