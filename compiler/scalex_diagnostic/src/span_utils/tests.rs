use super::*;

#[test]
fn test_line_from_offset_multiple_lines() {
    let table = LineOffsetTable::build("line1\nline2\nline3");
    assert_eq!(table.line_from_offset(0), 1); // 'l' of line1
    assert_eq!(table.line_from_offset(5), 1); // '\n' after line1
    assert_eq!(table.line_from_offset(6), 2); // 'l' of line2
    assert_eq!(table.line_from_offset(11), 2);
    assert_eq!(table.line_from_offset(12), 3);
    assert_eq!(table.line_start_offset(4), None);
}

#[test]
fn test_offset_to_line_col() {
    let source = "abc\ndefgh\nij";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
    assert_eq!(table.offset_to_line_col(source, 2), (1, 3));
    assert_eq!(table.offset_to_line_col(source, 4), (2, 1));
    assert_eq!(table.offset_to_line_col(source, 7), (2, 4));
    assert_eq!(table.offset_to_line_col(source, 10), (3, 1));
}

#[test]
fn test_offset_to_line_col_empty() {
    let table = LineOffsetTable::build("");
    assert_eq!(table.offset_to_line_col("", 0), (1, 1));
    assert_eq!(table.line_start_offset(2), None);
}

#[test]
fn test_offset_to_line_col_unicode() {
    let source = "αβγ\nδε";
    let table = LineOffsetTable::build(source);
    // Greek letters are 2 bytes each
    assert_eq!(table.offset_to_line_col(source, 2), (1, 2));
    assert_eq!(table.offset_to_line_col(source, 4), (1, 3));
    assert_eq!(table.offset_to_line_col(source, 7), (2, 1));
    assert_eq!(table.offset_to_line_col(source, 9), (2, 2));
}

#[test]
fn test_offset_past_end_clamps() {
    let source = "ab";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.offset_to_line_col(source, 2), (1, 3));
    assert_eq!(table.offset_to_line_col(source, 99), (1, 3));
}

#[test]
fn test_offset_at_trailing_newline() {
    let source = "ab\n";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.offset_to_line_col(source, 3), (2, 1));
    assert_eq!(table.line_text(source, 2), Some(""));
}

#[test]
fn test_line_start_offset() {
    let table = LineOffsetTable::build("a\nbc\nd");
    assert_eq!(table.line_start_offset(0), None);
    assert_eq!(table.line_start_offset(1), Some(0));
    assert_eq!(table.line_start_offset(2), Some(2));
    assert_eq!(table.line_start_offset(3), Some(5));
    assert_eq!(table.line_start_offset(4), None);
}

#[test]
fn test_line_text_trims_terminators() {
    let source = "first\r\nsecond\nthird";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_text(source, 1), Some("first"));
    assert_eq!(table.line_text(source, 2), Some("second"));
    assert_eq!(table.line_text(source, 3), Some("third"));
    assert_eq!(table.line_text(source, 4), None);
}

#[test]
fn test_carriage_return_line_endings() {
    let source = "a\rb\r\nc\n\rd";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_start_offset(5), Some(8));
    assert_eq!(table.line_start_offset(6), None);
    assert_eq!(table.offset_to_line_col(source, 2), (2, 1)); // b
    assert_eq!(table.offset_to_line_col(source, 4), (2, 3)); // `\n` of `\r\n`
    assert_eq!(table.offset_to_line_col(source, 5), (3, 1)); // c
    assert_eq!(table.offset_to_line_col(source, 8), (5, 1)); // d
    assert_eq!(table.line_text(source, 1), Some("a"));
    assert_eq!(table.line_text(source, 2), Some("b"));
    assert_eq!(table.line_text(source, 4), Some(""));
}
