//! Visitor dispatch surface over the grammar node algebra.
//!
//! The source's double-dispatch visitor classes collapse here to a single
//! `match` per call (§9 design note): [`dispatch`] performs that match and
//! invokes the matching [`GrammarVisitor`] method, so implementors never
//! write their own `match node { ... }` over the full variant set.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::capture::numbered_key;
use crate::glossary::{CharRange, UnicodeCategory};
use crate::node::{GrammarNode, RepetitionRange};

/// One method per grammar node variant, parameterized over an
/// accumulator/context type `A` and a result type `R`.
pub trait GrammarVisitor<A, R> {
    fn visit_any(&mut self, state: A) -> R;
    fn visit_character_terminal(&mut self, value: char, state: A) -> R;
    fn visit_negated_character_terminal(&mut self, value: char, state: A) -> R;
    fn visit_string_terminal(&mut self, text: &str, state: A) -> R;
    fn visit_character_range(&mut self, range: CharRange, state: A) -> R;
    fn visit_negated_character_range(&mut self, range: CharRange, state: A) -> R;
    fn visit_character_set(&mut self, chars: &BTreeSet<char>, nodes: &[Arc<GrammarNode>], state: A) -> R;
    fn visit_negated_character_set(
        &mut self,
        chars: &BTreeSet<char>,
        nodes: &[Arc<GrammarNode>],
        state: A,
    ) -> R;
    fn visit_unicode_category_terminal(&mut self, category: UnicodeCategory, state: A) -> R;
    fn visit_negated_unicode_category_terminal(&mut self, category: UnicodeCategory, state: A) -> R;
    fn visit_sequence(&mut self, nodes: &[Arc<GrammarNode>], state: A) -> R;
    fn visit_alternation(&mut self, nodes: &[Arc<GrammarNode>], state: A) -> R;
    fn visit_negated_alternation(&mut self, nodes: &[Arc<GrammarNode>], state: A) -> R;
    fn visit_repetition(
        &mut self,
        inner: &Arc<GrammarNode>,
        range: RepetitionRange,
        is_lazy: bool,
        state: A,
    ) -> R;
    fn visit_lookahead(&mut self, inner: &Arc<GrammarNode>, state: A) -> R;
    fn visit_negative_lookahead(&mut self, inner: &Arc<GrammarNode>, state: A) -> R;
    fn visit_numbered_capture(&mut self, position: u32, inner: &Arc<GrammarNode>, state: A) -> R;
    fn visit_named_capture(&mut self, name: &str, inner: &Arc<GrammarNode>, state: A) -> R;
    fn visit_numbered_backreference(&mut self, position: u32, state: A) -> R;
    fn visit_named_backreference(&mut self, name: &str, state: A) -> R;
}

/// Dispatches `node` to the matching method of `visitor`.
pub fn dispatch<A, R>(node: &GrammarNode, visitor: &mut impl GrammarVisitor<A, R>, state: A) -> R {
    match node {
        GrammarNode::Any => visitor.visit_any(state),
        GrammarNode::CharacterTerminal(c) => visitor.visit_character_terminal(*c, state),
        GrammarNode::NegatedCharacterTerminal(c) => {
            visitor.visit_negated_character_terminal(*c, state)
        }
        GrammarNode::StringTerminal(s) => visitor.visit_string_terminal(s, state),
        GrammarNode::CharacterRange(r) => visitor.visit_character_range(*r, state),
        GrammarNode::NegatedCharacterRange(r) => visitor.visit_negated_character_range(*r, state),
        GrammarNode::CharacterSet { chars, nodes } => {
            visitor.visit_character_set(chars, nodes, state)
        }
        GrammarNode::NegatedCharacterSet { chars, nodes } => {
            visitor.visit_negated_character_set(chars, nodes, state)
        }
        GrammarNode::UnicodeCategoryTerminal(cat) => {
            visitor.visit_unicode_category_terminal(*cat, state)
        }
        GrammarNode::NegatedUnicodeCategoryTerminal(cat) => {
            visitor.visit_negated_unicode_category_terminal(*cat, state)
        }
        GrammarNode::Sequence(nodes) => visitor.visit_sequence(nodes, state),
        GrammarNode::Alternation(nodes) => visitor.visit_alternation(nodes, state),
        GrammarNode::NegatedAlternation(nodes) => visitor.visit_negated_alternation(nodes, state),
        GrammarNode::Repetition {
            inner,
            range,
            is_lazy,
        } => visitor.visit_repetition(inner, *range, *is_lazy, state),
        GrammarNode::Lookahead(inner) => visitor.visit_lookahead(inner, state),
        GrammarNode::NegativeLookahead(inner) => visitor.visit_negative_lookahead(inner, state),
        GrammarNode::NumberedCapture { position, inner } => {
            visitor.visit_numbered_capture(*position, inner, state)
        }
        GrammarNode::NamedCapture { name, inner } => {
            visitor.visit_named_capture(name, inner, state)
        }
        GrammarNode::NumberedBackreference(position) => {
            visitor.visit_numbered_backreference(*position, state)
        }
        GrammarNode::NamedBackreference(name) => visitor.visit_named_backreference(name, state),
    }
}

/// Structural-equality helper used by test assertions; `GrammarNode`
/// already derives `PartialEq` with exactly the §3 semantics (same
/// variant, pairwise-equal attributes, order-sensitive for lists), so
/// this is a thin, explicitly-named wrapper rather than a reimplementation.
pub struct GrammarTreeStructuralComparer;

impl GrammarTreeStructuralComparer {
    pub fn equals(a: &GrammarNode, b: &GrammarNode) -> bool {
        a == b
    }
}

/// Emits a regex-like textual form of a grammar tree, used in diagnostics
/// and round-trip tests.
pub struct GrammarNodeToStringConverter;

impl GrammarNodeToStringConverter {
    pub fn convert(node: &GrammarNode) -> String {
        Self::convert_inner(node, false)
    }

    fn convert_inner(node: &GrammarNode, nested: bool) -> String {
        match node {
            GrammarNode::Any => ".".to_string(),
            GrammarNode::CharacterTerminal(c) => Self::escape_literal(*c),
            GrammarNode::NegatedCharacterTerminal(c) => format!("[^{}]", Self::escape_literal(*c)),
            GrammarNode::StringTerminal(s) => s.chars().map(Self::escape_literal).collect(),
            GrammarNode::CharacterRange(r) => format!("[{}-{}]", r.start, r.end),
            GrammarNode::NegatedCharacterRange(r) => format!("[^{}-{}]", r.start, r.end),
            GrammarNode::CharacterSet { chars, nodes } => {
                format!("[{}]", Self::set_body(chars, nodes))
            }
            GrammarNode::NegatedCharacterSet { chars, nodes } => {
                format!("[^{}]", Self::set_body(chars, nodes))
            }
            GrammarNode::UnicodeCategoryTerminal(cat) => format!("\\p{{{cat:?}}}"),
            GrammarNode::NegatedUnicodeCategoryTerminal(cat) => format!("\\P{{{cat:?}}}"),
            GrammarNode::Sequence(nodes) => {
                nodes.iter().map(|n| Self::convert_inner(n, true)).collect()
            }
            GrammarNode::Alternation(nodes) => {
                let body = nodes
                    .iter()
                    .map(|n| Self::convert_inner(n, false))
                    .collect::<Vec<_>>()
                    .join("|");
                if nested {
                    format!("(?:{body})")
                } else {
                    body
                }
            }
            GrammarNode::NegatedAlternation(nodes) => {
                let body = nodes
                    .iter()
                    .map(|n| Self::convert_inner(n, false))
                    .collect::<Vec<_>>()
                    .join("|");
                format!("(?!{body})")
            }
            GrammarNode::Repetition {
                inner,
                range,
                is_lazy,
            } => {
                let quantifier = Self::quantifier(*range);
                let lazy = if *is_lazy { "?" } else { "" };
                format!("{}{quantifier}{lazy}", Self::convert_inner(inner, true))
            }
            GrammarNode::Lookahead(inner) => format!("(?={})", Self::convert_inner(inner, false)),
            GrammarNode::NegativeLookahead(inner) => {
                format!("(?!{})", Self::convert_inner(inner, false))
            }
            GrammarNode::NumberedCapture { inner, .. } => {
                format!("({})", Self::convert_inner(inner, false))
            }
            GrammarNode::NamedCapture { name, inner } => {
                format!("(?<{name}>{})", Self::convert_inner(inner, false))
            }
            GrammarNode::NumberedBackreference(position) => format!("\\{position}"),
            GrammarNode::NamedBackreference(name) => format!("\\k<{name}>"),
        }
    }

    fn set_body(chars: &BTreeSet<char>, nodes: &[Arc<GrammarNode>]) -> String {
        let mut body: String = chars.iter().copied().collect();
        for n in nodes {
            body.push_str(&Self::convert_inner(n, true));
        }
        body
    }

    fn quantifier(range: RepetitionRange) -> String {
        match (range.min, range.max) {
            (0, Some(1)) => "?".to_string(),
            (0, None) => "*".to_string(),
            (1, None) => "+".to_string(),
            (min, Some(max)) if min == max => format!("{{{min}}}"),
            (min, Some(max)) => format!("{{{min},{max}}}"),
            (min, None) => format!("{{{min},}}"),
        }
    }

    fn escape_literal(c: char) -> String {
        if "\\.^$|?*+()[]{}".contains(c) {
            format!("\\{c}")
        } else {
            c.to_string()
        }
    }
}

/// Renders the reserved numbered-capture key for use in diagnostics.
pub fn describe_numbered_capture(position: u32) -> String {
    numbered_key(position)
}

#[cfg(test)]
#[path = "visitor_tests.rs"]
mod visitor_tests;
