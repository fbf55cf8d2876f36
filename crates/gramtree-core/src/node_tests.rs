use super::*;

#[test]
fn string_terminal_rejects_empty() {
    assert_eq!(
        GrammarNode::string_terminal("").unwrap_err(),
        NodeError::EmptyStringTerminal
    );
    assert!(GrammarNode::string_terminal("ok").is_ok());
}

#[test]
fn character_range_rejects_inverted_bounds() {
    assert_eq!(
        GrammarNode::character_range('z', 'a').unwrap_err(),
        NodeError::InvalidRange { start: 'z', end: 'a' }
    );
}

#[test]
fn sequence_and_alternation_require_at_least_one_child() {
    assert_eq!(
        GrammarNode::sequence(vec![]).unwrap_err(),
        NodeError::EmptySequence
    );
    assert_eq!(
        GrammarNode::alternation(vec![]).unwrap_err(),
        NodeError::EmptyAlternation
    );
}

#[test]
fn negated_alternation_accepts_zero_children() {
    let empty = GrammarNode::negated_alternation(vec![]);
    assert_eq!(empty, GrammarNode::NegatedAlternation(vec![]));
}

#[test]
fn repetition_bounds_are_validated() {
    let inner = Arc::new(GrammarNode::Any);
    assert_eq!(
        GrammarNode::repetition(inner.clone(), 5, Some(2), false).unwrap_err(),
        NodeError::InvalidRepetitionBounds { min: 5, max: 2 }
    );
    assert_eq!(
        GrammarNode::repetition(inner.clone(), 0, Some(0), false).unwrap_err(),
        NodeError::ZeroRepetitionMax
    );
    assert!(GrammarNode::repetition(inner, 1, None, false).is_ok());
}

#[test]
fn negate_is_involutive_for_terminals() {
    let t = GrammarNode::CharacterTerminal('a');
    let n = t.negate().unwrap();
    assert_eq!(n, GrammarNode::NegatedCharacterTerminal('a'));
    assert_eq!(n.negate().unwrap(), t);
}

#[test]
fn negate_alternation_and_lookahead() {
    let alt = GrammarNode::Alternation(vec![Arc::new(GrammarNode::Any)]);
    assert_eq!(
        alt.negate().unwrap(),
        GrammarNode::NegatedAlternation(vec![Arc::new(GrammarNode::Any)])
    );

    let look = GrammarNode::Lookahead(Arc::new(GrammarNode::Any));
    assert_eq!(
        look.negate().unwrap(),
        GrammarNode::NegativeLookahead(Arc::new(GrammarNode::Any))
    );
}

#[test]
fn negate_fails_for_non_negatable_variants() {
    let seq = GrammarNode::Sequence(vec![Arc::new(GrammarNode::Any)]);
    assert_eq!(seq.negate().unwrap_err(), NodeError::NotNegatable);
}

#[test]
fn structural_equality_is_order_sensitive() {
    let a = GrammarNode::Sequence(vec![
        Arc::new(GrammarNode::CharacterTerminal('a')),
        Arc::new(GrammarNode::CharacterTerminal('b')),
    ]);
    let b = GrammarNode::Sequence(vec![
        Arc::new(GrammarNode::CharacterTerminal('b')),
        Arc::new(GrammarNode::CharacterTerminal('a')),
    ]);
    assert_ne!(a, b);
}
