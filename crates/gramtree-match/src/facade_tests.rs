use gramtree_core::{CodeReader, GrammarNode};

use super::*;

#[test]
fn simple_match_advances_reader_on_success() {
    let mut reader = CodeReader::new("abc");
    let node = GrammarNode::string_terminal("ab").unwrap();
    let result = GrammarTreeInterpreter::simple_match(&mut reader, &node).unwrap();
    assert!(result.is_match);
    assert_eq!(result.length, 2);
    assert_eq!(reader.position(), 2);
}

#[test]
fn simple_match_does_not_advance_reader_on_failure() {
    let mut reader = CodeReader::new("xyz");
    let node = GrammarNode::string_terminal("ab").unwrap();
    let result = GrammarTreeInterpreter::simple_match(&mut reader, &node).unwrap();
    assert!(!result.is_match);
    assert_eq!(reader.position(), 0);
}

#[test]
fn simple_match_starts_at_current_reader_position() {
    let mut reader = CodeReader::new("xab");
    reader.advance(1).unwrap();
    let node = GrammarNode::string_terminal("ab").unwrap();
    let result = GrammarTreeInterpreter::simple_match(&mut reader, &node).unwrap();
    assert!(result.is_match);
    assert_eq!(reader.position(), 3);
}

#[test]
fn span_match_reports_absolute_span() {
    let mut reader = CodeReader::new("xab");
    reader.advance(1).unwrap();
    let node = GrammarNode::string_terminal("ab").unwrap();
    let result = GrammarTreeInterpreter::span_match(&mut reader, &node).unwrap();
    assert_eq!(result.span, Some(gramtree_core::Span { start: 1, length: 2 }));
}

#[test]
fn span_match_is_none_on_failure() {
    let mut reader = CodeReader::new("xyz");
    let node = GrammarNode::string_terminal("ab").unwrap();
    let result = GrammarTreeInterpreter::span_match(&mut reader, &node).unwrap();
    assert_eq!(result.span, None);
}

#[test]
fn string_match_reports_matched_text() {
    let mut reader = CodeReader::new("hello world");
    let node = GrammarNode::string_terminal("hello").unwrap();
    let result = GrammarTreeInterpreter::string_match(&mut reader, &node).unwrap();
    assert_eq!(result.string.as_deref(), Some("hello"));
    assert_eq!(reader.position(), 5);
}

#[test]
fn string_match_is_none_on_failure() {
    let mut reader = CodeReader::new("hello");
    let node = GrammarNode::string_terminal("bye").unwrap();
    let result = GrammarTreeInterpreter::string_match(&mut reader, &node).unwrap();
    assert_eq!(result.string, None);
    assert_eq!(reader.position(), 0);
}

#[test]
fn simple_match_propagates_captures() {
    let mut reader = CodeReader::new("ab");
    let node = GrammarNode::named_capture(
        "x",
        std::sync::Arc::new(GrammarNode::CharacterTerminal('a')),
    );
    let node = GrammarNode::Sequence(vec![
        std::sync::Arc::new(node),
        std::sync::Arc::new(GrammarNode::CharacterTerminal('b')),
    ]);
    let result = GrammarTreeInterpreter::simple_match(&mut reader, &node).unwrap();
    assert!(result.is_match);
    assert_eq!(
        result.captures.get("x"),
        Some(gramtree_core::Capture::new(0, 1))
    );
}

#[test]
fn simple_match_propagates_engine_error() {
    let mut reader = CodeReader::new("aaa");
    let node = GrammarNode::Repetition {
        inner: std::sync::Arc::new(GrammarNode::CharacterTerminal('a')),
        range: gramtree_core::RepetitionRange { min: 0, max: None },
        is_lazy: true,
    };
    let err = GrammarTreeInterpreter::simple_match(&mut reader, &node).unwrap_err();
    assert_eq!(err, EngineError::UnsupportedLazyRepetition);
}
