use super::*;

// === Table Invariants ===

#[test]
fn rules_are_not_shadowed() {
    for (i, later) in OPERATOR_RULES.iter().enumerate() {
        for earlier in &OPERATOR_RULES[..i] {
            assert!(
                !later.spelling.starts_with(earlier.spelling),
                "rule {:?} is shadowed by earlier rule {:?}",
                later.spelling,
                earlier.spelling
            );
        }
    }
}

#[test]
fn rules_grouped_by_leading_byte() {
    let mut seen: Vec<u8> = Vec::new();
    let mut prev: Option<u8> = None;
    for r in OPERATOR_RULES {
        let lead = r.spelling.as_bytes()[0];
        if prev != Some(lead) {
            assert!(
                !seen.contains(&lead),
                "rules starting with {:?} are not contiguous",
                lead as char
            );
            seen.push(lead);
        }
        prev = Some(lead);
    }
}

#[test]
fn spellings_are_unique() {
    for (i, a) in OPERATOR_RULES.iter().enumerate() {
        for b in &OPERATOR_RULES[i + 1..] {
            assert_ne!(a.spelling, b.spelling);
        }
    }
}

#[test]
fn every_rule_starts_with_operator_byte() {
    for r in OPERATOR_RULES {
        assert!(is_operator_start(r.spelling.as_bytes()[0]), "{r:?}");
    }
}

#[test]
fn operator_start_bytes_are_exactly_rule_leads() {
    for byte in 0..=u8::MAX {
        let leads_a_rule = OPERATOR_RULES.iter().any(|r| r.spelling.as_bytes()[0] == byte);
        assert_eq!(is_operator_start(byte), leads_a_rule, "byte {byte:#04x}");
    }
}

#[test]
fn rule_tags_agree_with_lexemes() {
    for r in OPERATOR_RULES {
        assert_eq!(r.tag.lexeme(), Some(r.spelling));
    }
}

// === Maximal Munch ===

#[test]
fn longest_match_prefers_two_byte_operators() {
    assert_eq!(longest_match(b"<=x").map(|r| r.tag), Some(RawTag::LessEqual));
    assert_eq!(longest_match(b">=").map(|r| r.tag), Some(RawTag::GreaterEqual));
    assert_eq!(longest_match(b"==").map(|r| r.tag), Some(RawTag::EqualEqual));
    assert_eq!(longest_match(b"!=").map(|r| r.tag), Some(RawTag::BangEqual));
}

#[test]
fn longest_match_falls_back_to_single_byte() {
    assert_eq!(longest_match(b"< ").map(|r| r.tag), Some(RawTag::Less));
    assert_eq!(longest_match(b">").map(|r| r.tag), Some(RawTag::Greater));
    assert_eq!(longest_match(b"=a").map(|r| r.tag), Some(RawTag::Equal));
    assert_eq!(longest_match(b"+=").map(|r| r.tag), Some(RawTag::Plus));
}

#[test]
fn triple_equal_munches_two_then_one() {
    let first = longest_match(b"===");
    assert_eq!(first.map(|r| r.tag), Some(RawTag::EqualEqual));
    assert_eq!(longest_match(b"=").map(|r| r.tag), Some(RawTag::Equal));
}

#[test]
fn lone_bang_has_no_rule() {
    assert_eq!(longest_match(b"!"), None);
    assert_eq!(longest_match(b"!x"), None);
}

#[test]
fn non_operator_input_has_no_rule() {
    assert_eq!(longest_match(b""), None);
    assert_eq!(longest_match(b"a"), None);
    assert_eq!(longest_match(b"/"), None);
}
