//! The Match Façade (§4.5, §6): the small set of entry points most callers
//! use instead of [`crate::interpreter::eval`] directly. Each one matches
//! `node` at the reader's current position and, on success, advances the
//! reader past the match.

use gramtree_core::{CaptureTable, CodeReader, GrammarNode, Span};

use crate::interpreter::{self, EngineError};
use crate::limits::{EngineLimits, StepCounter};
use crate::trace::{MatchTracer, NoopTracer};

/// Outcome of [`GrammarTreeInterpreter::simple_match`]: whether the pattern
/// matched, how many characters it consumed, and whatever it captured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleMatch {
    pub is_match: bool,
    pub length: usize,
    pub captures: CaptureTable,
}

/// Outcome of [`GrammarTreeInterpreter::span_match`]: like [`SimpleMatch`]
/// but reports the matched region as a [`Span`] rather than a bare length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanMatch {
    pub is_match: bool,
    pub span: Option<Span>,
    pub captures: CaptureTable,
}

/// Outcome of [`GrammarTreeInterpreter::string_match`]: like [`SimpleMatch`]
/// but reports the matched text directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringMatch {
    pub is_match: bool,
    pub string: Option<String>,
    pub captures: CaptureTable,
}

/// Entry point for matching a compiled grammar tree against a reader.
///
/// Every method here wraps [`interpreter::eval`] at the reader's current
/// position with a fresh, empty capture table, default (unlimited) engine
/// limits, and a [`NoopTracer`]. Use the `_with` variants to supply your
/// own capture table, limits, or tracer.
pub struct GrammarTreeInterpreter;

impl GrammarTreeInterpreter {
    pub fn simple_match(reader: &mut CodeReader, node: &GrammarNode) -> Result<SimpleMatch, EngineError> {
        Self::simple_match_with(reader, node, CaptureTable::new(), EngineLimits::unlimited())
    }

    pub fn simple_match_with(
        reader: &mut CodeReader,
        node: &GrammarNode,
        captures: CaptureTable,
        limits: EngineLimits,
    ) -> Result<SimpleMatch, EngineError> {
        Self::simple_match_traced(reader, node, captures, limits, &mut NoopTracer)
    }

    pub fn simple_match_traced(
        reader: &mut CodeReader,
        node: &GrammarNode,
        mut captures: CaptureTable,
        limits: EngineLimits,
        tracer: &mut impl MatchTracer,
    ) -> Result<SimpleMatch, EngineError> {
        let offset = reader.position();
        let mut steps = StepCounter::new(limits);
        let outcome = interpreter::eval(node, reader, offset, &mut captures, tracer, &mut steps)?;
        if outcome.is_match {
            reader
                .advance(outcome.length)
                .expect("a successful match never runs past the buffer");
        }
        Ok(SimpleMatch {
            is_match: outcome.is_match,
            length: outcome.length,
            captures,
        })
    }

    pub fn span_match(reader: &mut CodeReader, node: &GrammarNode) -> Result<SpanMatch, EngineError> {
        Self::span_match_with(reader, node, CaptureTable::new(), EngineLimits::unlimited())
    }

    pub fn span_match_with(
        reader: &mut CodeReader,
        node: &GrammarNode,
        captures: CaptureTable,
        limits: EngineLimits,
    ) -> Result<SpanMatch, EngineError> {
        let start = reader.position();
        let simple = Self::simple_match_with(reader, node, captures, limits)?;
        Ok(SpanMatch {
            is_match: simple.is_match,
            span: simple.is_match.then_some(Span {
                start,
                length: simple.length,
            }),
            captures: simple.captures,
        })
    }

    pub fn string_match(reader: &mut CodeReader, node: &GrammarNode) -> Result<StringMatch, EngineError> {
        Self::string_match_with(reader, node, CaptureTable::new(), EngineLimits::unlimited())
    }

    pub fn string_match_with(
        reader: &mut CodeReader,
        node: &GrammarNode,
        captures: CaptureTable,
        limits: EngineLimits,
    ) -> Result<StringMatch, EngineError> {
        let start = reader.position();
        let simple = Self::simple_match_with(reader, node, captures, limits)?;
        let string = simple.is_match.then(|| {
            reader.text_of(Span {
                start,
                length: simple.length,
            })
        });
        Ok(StringMatch {
            is_match: simple.is_match,
            string,
            captures: simple.captures,
        })
    }
}

#[cfg(test)]
#[path = "facade_tests.rs"]
mod facade_tests;
