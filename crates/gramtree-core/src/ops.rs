//! Derived operators on the grammar node algebra: pure functions that the
//! regex parser (and direct users of the tree) compose grammars with.

use std::sync::Arc;

use crate::node::{GrammarNode, NodeError};

/// Concatenates `a` then `b`. If `a` is already a `Sequence`, `b` is
/// appended to it rather than nesting a new one.
pub fn then(a: Arc<GrammarNode>, b: Arc<GrammarNode>) -> Arc<GrammarNode> {
    match Arc::try_unwrap(a) {
        Ok(GrammarNode::Sequence(mut nodes)) => {
            nodes.push(b);
            Arc::new(GrammarNode::Sequence(nodes))
        }
        Ok(other) => Arc::new(GrammarNode::Sequence(vec![Arc::new(other), b])),
        Err(a) => match a.as_ref() {
            GrammarNode::Sequence(nodes) => {
                let mut nodes = nodes.clone();
                nodes.push(b);
                Arc::new(GrammarNode::Sequence(nodes))
            }
            _ => Arc::new(GrammarNode::Sequence(vec![a, b])),
        },
    }
}

/// Alternates `a` then `b`, flattening into an existing `Alternation` the
/// same way [`then`] flattens into a `Sequence`.
pub fn or(a: Arc<GrammarNode>, b: Arc<GrammarNode>) -> Arc<GrammarNode> {
    match Arc::try_unwrap(a) {
        Ok(GrammarNode::Alternation(mut nodes)) => {
            nodes.push(b);
            Arc::new(GrammarNode::Alternation(nodes))
        }
        Ok(other) => Arc::new(GrammarNode::Alternation(vec![Arc::new(other), b])),
        Err(a) => match a.as_ref() {
            GrammarNode::Alternation(nodes) => {
                let mut nodes = nodes.clone();
                nodes.push(b);
                Arc::new(GrammarNode::Alternation(nodes))
            }
            _ => Arc::new(GrammarNode::Alternation(vec![a, b])),
        },
    }
}

/// Returns the canonical negation of `node`, failing for variants that
/// have none.
pub fn negate(node: &GrammarNode) -> Result<GrammarNode, NodeError> {
    node.negate()
}

/// Builds `Repetition(node, min, max, is_lazy = false)`.
pub fn repeat(node: Arc<GrammarNode>, min: u32, max: Option<u32>) -> Result<GrammarNode, NodeError> {
    GrammarNode::repetition(node, min, max, false)
}

/// Builds `Repetition(node, 0, Some(1), is_lazy = false)`.
pub fn optional(node: Arc<GrammarNode>) -> GrammarNode {
    GrammarNode::repetition(node, 0, Some(1), false).expect("0 <= 1, max >= 1")
}

/// Builds `Repetition(node, 0, None, is_lazy = false)`.
pub fn infinite(node: Arc<GrammarNode>) -> GrammarNode {
    GrammarNode::repetition(node, 0, None, false).expect("unbounded max is always valid")
}

#[cfg(test)]
#[path = "ops_tests.rs"]
mod ops_tests;
