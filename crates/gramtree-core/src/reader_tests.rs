use super::*;

#[test]
fn peek_is_idempotent_and_side_effect_free() {
    let reader = CodeReader::new("hello");
    assert_eq!(reader.peek(0), Some('h'));
    assert_eq!(reader.peek(0), Some('h'));
    assert_eq!(reader.position(), 0);
}

#[test]
fn peek_past_end_is_none() {
    let reader = CodeReader::new("hi");
    assert_eq!(reader.peek(5), None);
}

#[test]
fn is_at_str_matches_at_offset() {
    let reader = CodeReader::new("foobar");
    assert!(reader.is_at_str("bar", 3));
    assert!(!reader.is_at_str("bar", 2));
}

#[test]
fn advance_updates_position_line_column() {
    let mut reader = CodeReader::new("ab\ncd");
    reader.advance(3).unwrap();
    assert_eq!(reader.position(), 3);
    assert_eq!(reader.line(), 2);
    assert_eq!(reader.column(), 1);
}

#[test]
fn advance_past_end_fails() {
    let mut reader = CodeReader::new("ab");
    let err = reader.advance(5).unwrap_err();
    assert_eq!(
        err,
        ReaderError::AdvancePastEnd {
            position: 0,
            amount: 5,
            len: 2
        }
    );
}

#[test]
fn read_span_consumes_and_returns_span() {
    let mut reader = CodeReader::new("hello world");
    let span = reader.read_span(5).unwrap();
    assert_eq!(span, Span { start: 0, length: 5 });
    assert_eq!(reader.position(), 5);
}

#[test]
fn read_string_consumes() {
    let mut reader = CodeReader::new("hello");
    assert_eq!(reader.read_string(5).unwrap(), "hello");
}

#[test]
fn read_to_end_consumes_remainder() {
    let mut reader = CodeReader::new("abc");
    reader.advance(1).unwrap();
    assert_eq!(reader.read_to_end(), "bc");
    assert!(reader.at_end());
}

#[test]
fn read_line_prefers_crlf_over_lf_or_cr() {
    let mut reader = CodeReader::new("a\r\nb\nc\rd");
    assert_eq!(reader.read_line(), Some("a".to_string()));
    assert_eq!(reader.read_line(), Some("b".to_string()));
    assert_eq!(reader.read_line(), Some("c".to_string()));
    assert_eq!(reader.read_line(), Some("d".to_string()));
    assert_eq!(reader.read_line(), None);
}

#[test]
fn find_char_and_find_str() {
    let reader = CodeReader::new("hello world");
    assert_eq!(reader.find_char('w'), Some(6));
    assert_eq!(reader.find_str("world"), Some(6));
    assert_eq!(reader.find_str("xyz"), None);
}

#[test]
fn restore_returns_to_saved_position() {
    let mut reader = CodeReader::new("ab\ncd");
    reader.advance(3).unwrap();
    let saved = reader.current_position();
    reader.advance(1).unwrap();
    reader.restore(saved).unwrap();
    assert_eq!(reader.position(), 3);
    assert_eq!(reader.line(), 2);
}

#[test]
fn restore_past_end_fails() {
    let mut reader = CodeReader::new("ab");
    let bogus = ReaderPosition {
        position: 10,
        line: 1,
        column: 1,
    };
    assert!(reader.restore(bogus).is_err());
}
