use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_cursor_navigation() {
    let mut cursor = Cursor::new("ab");
    assert_eq!(cursor.current(), b'a');
    assert_eq!(cursor.peek(), b'b');

    cursor.advance();
    assert_eq!(cursor.current(), b'b');
    assert_eq!(cursor.peek(), 0);
    assert!(!cursor.is_eof());

    cursor.advance();
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
}

#[test]
fn test_advance_at_eof_is_noop() {
    let mut cursor = Cursor::new("");
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.pos(), 0);
    assert!(cursor.is_eof());
}

#[test]
fn test_interior_nul_is_not_eof() {
    let cursor = Cursor::new("\0x");
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
}

#[test]
fn test_eat_whitespace() {
    let mut cursor = Cursor::new(" \t\r\n Team");
    cursor.eat_whitespace();
    assert_eq!(cursor.pos(), 5);
    assert_eq!(cursor.current(), b'T');
}

#[test]
fn test_eat_while_and_slice() {
    let mut cursor = Cursor::new("1234-");
    cursor.eat_while(|b| b.is_ascii_digit());
    assert_eq!(cursor.slice_from(0), "1234");
    assert_eq!(cursor.current(), b'-');
}

#[test]
fn test_advance_char_multibyte() {
    let mut cursor = Cursor::new("é;");
    assert_eq!(cursor.advance_char(), Some('é'));
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.current(), b';');
}

#[test]
fn test_name_bytes() {
    assert!(is_name_byte(b'a'));
    assert!(is_name_byte(b'Z'));
    assert!(is_name_byte(b'_'));
    assert!(!is_name_byte(b'1'));
    assert!(!is_name_byte(b' '));
    assert!(!is_name_byte(b'-'));
}
