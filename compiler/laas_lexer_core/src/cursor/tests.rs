use super::*;
use pretty_assertions::assert_eq;

fn cursor(source: &str) -> Cursor<'_> {
    Cursor::new(source, 4)
}

// === Basic Navigation ===

#[test]
fn starts_at_origin() {
    let cursor = cursor("abc");
    assert_eq!(cursor.position(), Position::START);
    assert_eq!(cursor.current(), b'a');
}

#[test]
fn bump_moves_forward() {
    let mut cursor = cursor("abc");
    cursor.bump();
    assert_eq!(cursor.current(), b'b');
    assert_eq!(
        cursor.position(),
        Position {
            offset: 1,
            line: 1,
            column: 2
        }
    );
}

#[test]
fn bump_through_entire_source() {
    let mut cursor = cursor("hi");
    cursor.bump();
    cursor.bump();
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
}

#[test]
fn bump_at_eof_is_noop() {
    let mut cursor = cursor("x");
    cursor.bump();
    let at_end = cursor.position();
    cursor.bump();
    cursor.bump();
    assert_eq!(cursor.position(), at_end);
}

#[test]
fn is_eof_on_empty_source() {
    assert!(cursor("").is_eof());
}

#[test]
fn interior_null_is_not_eof() {
    let mut cursor = cursor("a\0b");
    cursor.bump();
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
}

// === Peek ===

#[test]
fn peek_returns_next_byte() {
    assert_eq!(cursor("abc").peek(), b'b');
}

#[test]
fn peek_near_end_returns_zero() {
    let mut cursor = cursor("ab");
    cursor.bump();
    assert_eq!(cursor.peek(), 0);
}

// === Line/Column Accounting ===

#[test]
fn tab_advances_four_columns() {
    let mut cursor = cursor("\tx");
    cursor.bump();
    assert_eq!(cursor.position().column, 5);
    assert_eq!(cursor.current(), b'x');
}

#[test]
fn custom_tab_width() {
    let mut cursor = Cursor::new("\t\tx", 8);
    cursor.bump();
    cursor.bump();
    assert_eq!(cursor.position().column, 17);
}

#[test]
fn newline_resets_column_and_increments_line() {
    let mut cursor = cursor("ab\ncd");
    cursor.eat_while(|b| b != b'\n');
    assert_eq!(cursor.position().column, 3);
    cursor.bump();
    assert_eq!(
        cursor.position(),
        Position {
            offset: 3,
            line: 2,
            column: 1
        }
    );
}

#[test]
fn multibyte_char_counts_one_column() {
    // 'é' is two bytes
    let mut cursor = cursor("\u{e9}x");
    cursor.bump();
    cursor.bump();
    assert_eq!(cursor.current(), b'x');
    assert_eq!(cursor.position().column, 2);
}

#[test]
fn advance_n_matches_repeated_bump() {
    let source = "ab\tc\nde\n\tfg\u{e9}h";
    for n in 0..=u32::try_from(source.len()).unwrap_or(0) {
        let mut bulk = cursor(source);
        bulk.advance_n(n);
        let mut stepped = cursor(source);
        for _ in 0..n {
            stepped.bump();
        }
        assert_eq!(bulk.position(), stepped.position(), "n = {n}");
    }
}

#[test]
fn advance_n_clamps_at_eof() {
    let mut cursor = cursor("abc");
    cursor.advance_n(100);
    assert!(cursor.is_eof());
    assert_eq!(cursor.offset(), 3);
}

// === Whitespace ===

#[test]
fn eat_whitespace_skips_space_tab_cr() {
    let mut cursor = cursor(" \t\r x");
    cursor.eat_whitespace();
    assert_eq!(cursor.current(), b'x');
    assert_eq!(cursor.position().column, 8);
}

#[test]
fn eat_whitespace_stops_at_newline() {
    let mut cursor = cursor("  \nx");
    cursor.eat_whitespace();
    assert_eq!(cursor.current(), b'\n');
}

#[test]
fn eat_whitespace_stops_at_eof() {
    let mut cursor = cursor("     ");
    cursor.eat_whitespace();
    assert!(cursor.is_eof());
}

// === String Delimiters ===

#[test]
fn skip_to_string_delim_finds_quote() {
    let mut cursor = cursor("abc\"rest");
    assert_eq!(cursor.skip_to_string_delim(), b'"');
    assert_eq!(cursor.offset(), 3);
}

#[test]
fn skip_to_string_delim_finds_backslash_first() {
    let mut cursor = cursor("a\\\"b\"");
    assert_eq!(cursor.skip_to_string_delim(), b'\\');
    assert_eq!(cursor.offset(), 1);
}

#[test]
fn skip_to_string_delim_tracks_lines() {
    let mut cursor = cursor("one\ntwo\n  \"");
    assert_eq!(cursor.skip_to_string_delim(), b'"');
    assert_eq!(cursor.position().line, 3);
    assert_eq!(cursor.position().column, 3);
}

#[test]
fn skip_to_string_delim_eof() {
    let mut cursor = cursor("no closing quote");
    assert_eq!(cursor.skip_to_string_delim(), 0);
    assert!(cursor.is_eof());
}

// === Slicing ===

#[test]
fn slice_extracts_substring() {
    let cursor = cursor("hello world");
    assert_eq!(cursor.slice(0, 5), "hello");
    assert_eq!(cursor.slice(6, 11), "world");
    assert_eq!(cursor.slice(2, 2), "");
}

#[test]
fn slice_from_extracts_to_current() {
    let mut cursor = cursor("abcdef");
    cursor.advance_n(3);
    assert_eq!(cursor.slice_from(0), "abc");
    assert_eq!(cursor.slice_from(1), "bc");
}

#[test]
fn slice_borrows_from_source() {
    let source = String::from("borrowed");
    let cursor = Cursor::new(&source, 4);
    let text = cursor.slice(0, 3);
    assert_eq!(text.as_ptr(), source.as_ptr());
}

#[test]
fn current_char_decodes_multibyte() {
    let cursor = cursor("\u{1F600}x");
    assert_eq!(cursor.current_char(), Some('\u{1F600}'));
}

// === Line Lookup ===

#[test]
fn line_at_returns_enclosing_line() {
    let cursor = cursor("first\nsecond line\r\nthird");
    assert_eq!(cursor.line_at(0), (0, "first"));
    assert_eq!(cursor.line_at(9), (6, "second line"));
    assert_eq!(cursor.line_at(20), (19, "third"));
}

#[test]
fn line_at_end_of_source() {
    let cursor = cursor("a\nbc");
    assert_eq!(cursor.line_at(4), (2, "bc"));
}
