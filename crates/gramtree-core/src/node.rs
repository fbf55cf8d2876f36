//! The closed set of grammar node variants and their validating
//! constructors.

use std::collections::BTreeSet;
use std::sync::Arc;

use thiserror::Error;

use crate::glossary::{CharRange, UnicodeCategory};

/// Invariant violations raised when constructing a [`GrammarNode`].
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum NodeError {
    #[error("a string terminal must not be empty")]
    EmptyStringTerminal,
    #[error("a sequence must have at least one child")]
    EmptySequence,
    #[error("an alternation must have at least one child")]
    EmptyAlternation,
    #[error("invalid range: start {start:?} > end {end:?}")]
    InvalidRange { start: char, end: char },
    #[error("repetition minimum {min} exceeds maximum {max}")]
    InvalidRepetitionBounds { min: u32, max: u32 },
    #[error("repetition maximum must be at least 1, got 0")]
    ZeroRepetitionMax,
    #[error("this node variant cannot be negated")]
    NotNegatable,
}

/// Inclusive repetition bounds; `max = None` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RepetitionRange {
    pub min: u32,
    pub max: Option<u32>,
}

/// A node in a grammar tree, over the `char` alphabet.
///
/// The spec describes this algebra as generic over an abstract alphabet
/// `Char`; here it is monomorphized to `char` since every surface and
/// consumer in scope operates on Unicode scalar values, and a generic
/// parameter would buy no real flexibility while complicating every
/// signature downstream.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GrammarNode {
    Any,
    CharacterTerminal(char),
    NegatedCharacterTerminal(char),
    StringTerminal(Arc<str>),
    CharacterRange(CharRange),
    NegatedCharacterRange(CharRange),
    CharacterSet {
        chars: BTreeSet<char>,
        nodes: Vec<Arc<GrammarNode>>,
    },
    NegatedCharacterSet {
        chars: BTreeSet<char>,
        nodes: Vec<Arc<GrammarNode>>,
    },
    UnicodeCategoryTerminal(UnicodeCategory),
    NegatedUnicodeCategoryTerminal(UnicodeCategory),
    Sequence(Vec<Arc<GrammarNode>>),
    Alternation(Vec<Arc<GrammarNode>>),
    NegatedAlternation(Vec<Arc<GrammarNode>>),
    Repetition {
        inner: Arc<GrammarNode>,
        range: RepetitionRange,
        is_lazy: bool,
    },
    Lookahead(Arc<GrammarNode>),
    NegativeLookahead(Arc<GrammarNode>),
    NumberedCapture {
        position: u32,
        inner: Arc<GrammarNode>,
    },
    NamedCapture {
        name: Arc<str>,
        inner: Arc<GrammarNode>,
    },
    NumberedBackreference(u32),
    NamedBackreference(Arc<str>),
}

impl GrammarNode {
    pub fn string_terminal(text: impl Into<String>) -> Result<Self, NodeError> {
        let text = text.into();
        if text.is_empty() {
            return Err(NodeError::EmptyStringTerminal);
        }
        Ok(GrammarNode::StringTerminal(Arc::from(text)))
    }

    pub fn character_range(start: char, end: char) -> Result<Self, NodeError> {
        let range = CharRange::new(start, end).ok_or(NodeError::InvalidRange { start, end })?;
        Ok(GrammarNode::CharacterRange(range))
    }

    pub fn negated_character_range(start: char, end: char) -> Result<Self, NodeError> {
        let range = CharRange::new(start, end).ok_or(NodeError::InvalidRange { start, end })?;
        Ok(GrammarNode::NegatedCharacterRange(range))
    }

    pub fn character_set(chars: BTreeSet<char>, nodes: Vec<Arc<GrammarNode>>) -> Self {
        GrammarNode::CharacterSet { chars, nodes }
    }

    pub fn negated_character_set(chars: BTreeSet<char>, nodes: Vec<Arc<GrammarNode>>) -> Self {
        GrammarNode::NegatedCharacterSet { chars, nodes }
    }

    pub fn sequence(nodes: Vec<Arc<GrammarNode>>) -> Result<Self, NodeError> {
        if nodes.is_empty() {
            return Err(NodeError::EmptySequence);
        }
        Ok(GrammarNode::Sequence(nodes))
    }

    pub fn alternation(nodes: Vec<Arc<GrammarNode>>) -> Result<Self, NodeError> {
        if nodes.is_empty() {
            return Err(NodeError::EmptyAlternation);
        }
        Ok(GrammarNode::Alternation(nodes))
    }

    /// Negated alternations accept zero or more children (§3 invariants);
    /// with zero children this is the canonical always-succeeding,
    /// zero-width "empty" node.
    pub fn negated_alternation(nodes: Vec<Arc<GrammarNode>>) -> Self {
        GrammarNode::NegatedAlternation(nodes)
    }

    pub fn repetition(
        inner: Arc<GrammarNode>,
        min: u32,
        max: Option<u32>,
        is_lazy: bool,
    ) -> Result<Self, NodeError> {
        if let Some(max) = max {
            if max < 1 {
                return Err(NodeError::ZeroRepetitionMax);
            }
            if min > max {
                return Err(NodeError::InvalidRepetitionBounds { min, max });
            }
        }
        Ok(GrammarNode::Repetition {
            inner,
            range: RepetitionRange { min, max },
            is_lazy,
        })
    }

    pub fn numbered_capture(position: u32, inner: Arc<GrammarNode>) -> Self {
        GrammarNode::NumberedCapture { position, inner }
    }

    pub fn named_capture(name: impl Into<String>, inner: Arc<GrammarNode>) -> Self {
        GrammarNode::NamedCapture {
            name: Arc::from(name.into()),
            inner,
        }
    }

    /// Returns the canonical negation of this node, if one exists.
    pub fn negate(&self) -> Result<GrammarNode, NodeError> {
        use GrammarNode::*;
        Ok(match self {
            CharacterTerminal(c) => NegatedCharacterTerminal(*c),
            NegatedCharacterTerminal(c) => CharacterTerminal(*c),
            CharacterRange(r) => NegatedCharacterRange(*r),
            NegatedCharacterRange(r) => CharacterRange(*r),
            CharacterSet { chars, nodes } => NegatedCharacterSet {
                chars: chars.clone(),
                nodes: nodes.clone(),
            },
            NegatedCharacterSet { chars, nodes } => CharacterSet {
                chars: chars.clone(),
                nodes: nodes.clone(),
            },
            UnicodeCategoryTerminal(cat) => NegatedUnicodeCategoryTerminal(*cat),
            NegatedUnicodeCategoryTerminal(cat) => UnicodeCategoryTerminal(*cat),
            Alternation(nodes) => NegatedAlternation(nodes.clone()),
            NegatedAlternation(nodes) => Alternation(nodes.clone()),
            Lookahead(inner) => NegativeLookahead(inner.clone()),
            NegativeLookahead(inner) => Lookahead(inner.clone()),
            _ => return Err(NodeError::NotNegatable),
        })
    }
}

#[cfg(test)]
#[path = "node_tests.rs"]
mod node_tests;
