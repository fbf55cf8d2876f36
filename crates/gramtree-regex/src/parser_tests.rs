use super::*;
use gramtree_core::RepetitionRange;

fn p(pattern: &str) -> Arc<GrammarNode> {
    parse(pattern).unwrap_or_else(|e| panic!("expected {pattern:?} to parse, got {e:?}"))
}

fn fail(pattern: &str) -> RegexParseError {
    parse(pattern).expect_err("expected a parse error")
}

#[test]
fn literal_char() {
    assert_eq!(*p("a"), GrammarNode::CharacterTerminal('a'));
}

#[test]
fn backslash_n_escape_is_newline() {
    assert_eq!(*p("\\n"), GrammarNode::CharacterTerminal('\n'));
}

#[test]
fn hex_escape() {
    assert_eq!(*p("\\x0A"), GrammarNode::CharacterTerminal('\u{0A}'));
}

#[test]
fn bracket_set_of_literals() {
    let tree = p("[abc]");
    match tree.as_ref() {
        GrammarNode::CharacterSet { chars, nodes } => {
            assert_eq!(chars, &BTreeSet::from(['a', 'b', 'c']));
            assert!(nodes.is_empty());
        }
        other => panic!("expected CharacterSet, got {other:?}"),
    }
}

#[test]
fn bracket_range() {
    let tree = p("[a-z]");
    match tree.as_ref() {
        GrammarNode::CharacterSet { chars, nodes } => {
            assert!(chars.is_empty());
            assert_eq!(nodes.len(), 1);
            assert_eq!(
                *nodes[0],
                GrammarNode::CharacterRange(CharRange::new('a', 'z').unwrap())
            );
        }
        other => panic!("expected CharacterSet, got {other:?}"),
    }
}

#[test]
fn negated_set_with_digit_and_whitespace_escapes() {
    let tree = p("[^\\d\\s]");
    match tree.as_ref() {
        GrammarNode::NegatedCharacterSet { chars, nodes } => {
            assert!(chars.is_empty());
            assert_eq!(nodes.len(), 2);
        }
        other => panic!("expected NegatedCharacterSet, got {other:?}"),
    }
}

#[test]
fn leading_bracket_literal() {
    let tree = p("[]]");
    match tree.as_ref() {
        GrammarNode::CharacterSet { chars, nodes } => {
            assert_eq!(chars, &BTreeSet::from([']']));
            assert!(nodes.is_empty());
        }
        other => panic!("expected CharacterSet, got {other:?}"),
    }
}

#[test]
fn lookaheads() {
    match p("(?=a)").as_ref() {
        GrammarNode::Lookahead(inner) => assert_eq!(**inner, GrammarNode::CharacterTerminal('a')),
        other => panic!("expected Lookahead, got {other:?}"),
    }
    match p("(?!a)").as_ref() {
        GrammarNode::NegativeLookahead(inner) => {
            assert_eq!(**inner, GrammarNode::CharacterTerminal('a'))
        }
        other => panic!("expected NegativeLookahead, got {other:?}"),
    }
}

#[test]
fn named_capture() {
    match p("(?<name>a)").as_ref() {
        GrammarNode::NamedCapture { name, inner } => {
            assert_eq!(&**name, "name");
            assert_eq!(**inner, GrammarNode::CharacterTerminal('a'));
        }
        other => panic!("expected NamedCapture, got {other:?}"),
    }
}

#[test]
fn numbered_capture_starts_at_one() {
    match p("(a)").as_ref() {
        GrammarNode::NumberedCapture { position, inner } => {
            assert_eq!(*position, 1);
            assert_eq!(**inner, GrammarNode::CharacterTerminal('a'));
        }
        other => panic!("expected NumberedCapture, got {other:?}"),
    }
}

#[test]
fn numbered_captures_count_opening_parens_in_source_order() {
    match p("(a)(b)").as_ref() {
        GrammarNode::Sequence(nodes) => {
            match nodes[0].as_ref() {
                GrammarNode::NumberedCapture { position, .. } => assert_eq!(*position, 1),
                other => panic!("expected NumberedCapture, got {other:?}"),
            }
            match nodes[1].as_ref() {
                GrammarNode::NumberedCapture { position, .. } => assert_eq!(*position, 2),
                other => panic!("expected NumberedCapture, got {other:?}"),
            }
        }
        other => panic!("expected Sequence, got {other:?}"),
    }
}

#[test]
fn named_backreference() {
    assert_eq!(*p("\\k<x>"), GrammarNode::NamedBackreference(Arc::from("x")));
}

#[test]
fn numbered_backreference_accepts_three_digits() {
    assert_eq!(*p("\\100"), GrammarNode::NumberedBackreference(100));
}

#[test]
fn quantifiers() {
    match p("a*").as_ref() {
        GrammarNode::Repetition { range, is_lazy, .. } => {
            assert_eq!(*range, RepetitionRange { min: 0, max: None });
            assert!(!is_lazy);
        }
        other => panic!("expected Repetition, got {other:?}"),
    }
    match p("a{2,4}").as_ref() {
        GrammarNode::Repetition { range, .. } => {
            assert_eq!(*range, RepetitionRange { min: 2, max: Some(4) });
        }
        other => panic!("expected Repetition, got {other:?}"),
    }
}

#[test]
fn lazy_quantifier_is_parsed_with_is_lazy_flag() {
    match p("a*?").as_ref() {
        GrammarNode::Repetition { is_lazy, .. } => assert!(*is_lazy),
        other => panic!("expected Repetition, got {other:?}"),
    }
}

#[test]
fn alternation_and_empty_sequence() {
    match p("a|").as_ref() {
        GrammarNode::Alternation(nodes) => {
            assert_eq!(nodes.len(), 2);
            assert_eq!(*nodes[1], GrammarNode::NegatedAlternation(vec![]));
        }
        other => panic!("expected Alternation, got {other:?}"),
    }
}

// --- failure scenarios, exact ranges and messages from the test corpus ---

#[test]
fn invalid_escape_sequence() {
    let e = fail("\\b");
    assert_eq!(e.range, 0..2);
    assert_eq!(e.message, "Invalid escape sequence.");
}

#[test]
fn unknown_unicode_category() {
    let e = fail("\\p{Unexistent}");
    assert_eq!(e.range, 0..14);
    assert_eq!(e.message, "Invalid unicode class or code block name: Unexistent.");
}

#[test]
fn unfinished_set() {
    let e = fail("[]");
    assert_eq!(e.range, 0..2);
    assert_eq!(e.message, "Unfinished set.");
}

#[test]
fn unrecognized_group_type() {
    let e = fail("(?");
    assert_eq!(e.range, 0..2);
    assert_eq!(e.message, "Unrecognized group type.");
}

#[test]
fn unfinished_lookahead() {
    let e = fail("(?=");
    assert_eq!(e.range, 0..3);
    assert_eq!(e.message, "Unfinished lookahead.");
}

#[test]
fn invalid_backreference_on_fourth_digit() {
    let e = fail("\\1000");
    assert_eq!(e.range, 0..5);
    assert_eq!(e.message, "Invalid backreference.");
}

#[test]
fn unfinished_named_backreference() {
    let e = fail("\\k<a");
    assert_eq!(e.range, 0..4);
    assert_eq!(e.message, "Expected closing '>' in named backreference.");
}

#[test]
fn stray_closing_paren_at_top_level_is_rejected() {
    let e = fail("a)");
    assert_eq!(e.range, 1..2);
    assert_eq!(e.message, "Unexpected trailing input after pattern.");
}

#[test]
fn trailing_input_after_stray_closing_paren_is_rejected() {
    let e = fail("a)b");
    assert_eq!(e.range, 1..3);
    assert_eq!(e.message, "Unexpected trailing input after pattern.");
}

#[test]
fn round_trip_weak_property() {
    for pattern in ["ab", "a|b", "a*", "(a)", "(?<x>a)", "[abc]"] {
        let tree = p(pattern);
        let rendered = gramtree_core::GrammarNodeToStringConverter::convert(&tree);
        let reparsed = p(&rendered);
        assert!(
            gramtree_core::GrammarTreeStructuralComparer::equals(&tree, &reparsed),
            "round trip failed for {pattern:?}: rendered {rendered:?}"
        );
    }
}
