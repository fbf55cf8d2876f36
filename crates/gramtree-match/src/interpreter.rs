//! The backtracking interpreter (§4.4): matches a grammar tree against a
//! [`CodeReader`] starting at a given offset, without advancing the reader.

use gramtree_core::{Capture, CaptureTable, CodeReader, GrammarNode, Span};
use thiserror::Error;

use crate::limits::StepCounter;
use crate::trace::MatchTracer;

/// Errors raised at the interpreter/façade boundary for inputs the
/// interpreter itself cannot evaluate, as distinct from an ordinary
/// `isMatch = false` outcome.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Lazy repetitions aren't supported yet.")]
    UnsupportedLazyRepetition,
    #[error("execution limit exceeded")]
    ExecutionLimitExceeded,
}

/// The result of attempting to match a single node: whether it matched,
/// and if so, how many characters it consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOutcome {
    pub is_match: bool,
    pub length: usize,
}

impl MatchOutcome {
    fn success(length: usize) -> Self {
        Self {
            is_match: true,
            length,
        }
    }

    fn failure() -> Self {
        Self {
            is_match: false,
            length: 0,
        }
    }
}

/// Matches `node` against `reader` starting at absolute `offset`,
/// accumulating into `captures`. Does not advance `reader`.
pub fn eval(
    node: &GrammarNode,
    reader: &CodeReader,
    offset: usize,
    captures: &mut CaptureTable,
    tracer: &mut impl MatchTracer,
    steps: &mut StepCounter,
) -> Result<MatchOutcome, EngineError> {
    if !steps.tick() {
        return Err(EngineError::ExecutionLimitExceeded);
    }
    tracer.on_enter(node, offset);
    let outcome = eval_inner(node, reader, offset, captures, tracer, steps)?;
    if outcome.is_match {
        tracer.on_success(node, offset, outcome.length);
    } else {
        tracer.on_failure(node, offset);
    }
    Ok(outcome)
}

fn rel(reader: &CodeReader, offset: usize) -> usize {
    offset - reader.position()
}

fn eval_inner(
    node: &GrammarNode,
    reader: &CodeReader,
    offset: usize,
    captures: &mut CaptureTable,
    tracer: &mut impl MatchTracer,
    steps: &mut StepCounter,
) -> Result<MatchOutcome, EngineError> {
    match node {
        GrammarNode::Any => Ok(match reader.peek(rel(reader, offset)) {
            Some(_) => MatchOutcome::success(1),
            None => MatchOutcome::failure(),
        }),

        GrammarNode::CharacterTerminal(c) => Ok(if reader.peek(rel(reader, offset)) == Some(*c) {
            MatchOutcome::success(1)
        } else {
            MatchOutcome::failure()
        }),

        GrammarNode::NegatedCharacterTerminal(c) => Ok(match reader.peek(rel(reader, offset)) {
            // Deliberate length-0 quirk, preserved from the source (§9 open question).
            Some(p) if p != *c => MatchOutcome::success(0),
            _ => MatchOutcome::failure(),
        }),

        GrammarNode::StringTerminal(s) => Ok(if reader.is_at_str(s, rel(reader, offset)) {
            MatchOutcome::success(s.chars().count())
        } else {
            MatchOutcome::failure()
        }),

        GrammarNode::CharacterRange(range) => Ok(match reader.peek(rel(reader, offset)) {
            Some(c) if range.contains(c) => MatchOutcome::success(1),
            _ => MatchOutcome::failure(),
        }),

        GrammarNode::NegatedCharacterRange(range) => Ok(match reader.peek(rel(reader, offset)) {
            Some(c) if !range.contains(c) => MatchOutcome::success(1),
            _ => MatchOutcome::failure(),
        }),

        GrammarNode::CharacterSet { chars, nodes } => eval_set(
            chars, nodes, reader, offset, captures, tracer, steps, false,
        ),
        GrammarNode::NegatedCharacterSet { chars, nodes } => eval_set(
            chars, nodes, reader, offset, captures, tracer, steps, true,
        ),

        GrammarNode::UnicodeCategoryTerminal(category) => {
            Ok(match reader.peek(rel(reader, offset)) {
                Some(c) if category.matches(c) => MatchOutcome::success(1),
                _ => MatchOutcome::failure(),
            })
        }
        GrammarNode::NegatedUnicodeCategoryTerminal(category) => {
            Ok(match reader.peek(rel(reader, offset)) {
                // Deliberate length-0 quirk, same rationale as NegatedCharacterTerminal.
                Some(c) if !category.matches(c) => MatchOutcome::success(0),
                _ => MatchOutcome::failure(),
            })
        }

        GrammarNode::Sequence(nodes) => {
            let mut scope = captures.clone();
            let mut local_offset = offset;
            for child in nodes {
                let outcome = eval(child, reader, local_offset, &mut scope, tracer, steps)?;
                if !outcome.is_match {
                    return Ok(MatchOutcome::failure());
                }
                local_offset += outcome.length;
            }
            *captures = scope;
            Ok(MatchOutcome::success(local_offset - offset))
        }

        GrammarNode::Alternation(nodes) => {
            for child in nodes {
                let mut trial = captures.clone();
                let outcome = eval(child, reader, offset, &mut trial, tracer, steps)?;
                if outcome.is_match {
                    *captures = trial;
                    return Ok(outcome);
                }
                tracer.on_backtrack(child, offset);
            }
            Ok(MatchOutcome::failure())
        }

        GrammarNode::NegatedAlternation(nodes) => {
            for child in nodes {
                let mut trial = captures.clone();
                let outcome = eval(child, reader, offset, &mut trial, tracer, steps)?;
                tracer.on_backtrack(child, offset);
                if outcome.is_match {
                    return Ok(MatchOutcome::failure());
                }
            }
            Ok(MatchOutcome::success(0))
        }

        GrammarNode::Repetition {
            inner,
            range,
            is_lazy,
        } => {
            if *is_lazy {
                return Err(EngineError::UnsupportedLazyRepetition);
            }
            let mut count: u32 = 0;
            let mut total_len: usize = 0;
            loop {
                if let Some(max) = range.max {
                    if count >= max {
                        break;
                    }
                }
                let mut trial = captures.clone();
                let sub = eval(inner, reader, offset + total_len, &mut trial, tracer, steps)?;
                if !sub.is_match {
                    tracer.on_backtrack(inner, offset + total_len);
                    break;
                }
                if sub.length == 0 && count >= range.min {
                    // Allowed only to satisfy the minimum; never as an infinite pump.
                    tracer.on_backtrack(inner, offset + total_len);
                    break;
                }
                count += 1;
                total_len += sub.length;
                *captures = trial;
                if sub.length == 0 && count >= range.min {
                    break;
                }
            }
            if count >= range.min {
                Ok(MatchOutcome::success(total_len))
            } else {
                Ok(MatchOutcome::failure())
            }
        }

        GrammarNode::Lookahead(inner) => {
            let mut trial = captures.clone();
            let outcome = eval(inner, reader, offset, &mut trial, tracer, steps)?;
            Ok(if outcome.is_match {
                MatchOutcome::success(0)
            } else {
                MatchOutcome::failure()
            })
        }

        GrammarNode::NegativeLookahead(inner) => {
            let mut trial = captures.clone();
            let outcome = eval(inner, reader, offset, &mut trial, tracer, steps)?;
            Ok(if outcome.is_match {
                MatchOutcome::failure()
            } else {
                MatchOutcome::success(0)
            })
        }

        GrammarNode::NumberedCapture { position, inner } => {
            let mut trial = captures.clone();
            let outcome = eval(inner, reader, offset, &mut trial, tracer, steps)?;
            if outcome.is_match {
                trial.insert_numbered(*position, Capture::new(offset, outcome.length));
                tracer.on_capture(&gramtree_core::numbered_key(*position), offset, outcome.length);
                *captures = trial;
            }
            Ok(outcome)
        }

        GrammarNode::NamedCapture { name, inner } => {
            let mut trial = captures.clone();
            let outcome = eval(inner, reader, offset, &mut trial, tracer, steps)?;
            if outcome.is_match {
                trial.insert(name.as_ref(), Capture::new(offset, outcome.length));
                tracer.on_capture(name, offset, outcome.length);
                *captures = trial;
            }
            Ok(outcome)
        }

        GrammarNode::NumberedBackreference(position) => {
            eval_backreference(&gramtree_core::numbered_key(*position), reader, offset, captures)
        }

        GrammarNode::NamedBackreference(name) => {
            eval_backreference(name, reader, offset, captures)
        }
    }
}

fn eval_backreference(
    key: &str,
    reader: &CodeReader,
    offset: usize,
    captures: &CaptureTable,
) -> Result<MatchOutcome, EngineError> {
    let capture = match captures.get(key) {
        Some(c) if c.length > 0 => c,
        _ => return Ok(MatchOutcome::failure()),
    };
    let text = reader.text_of(Span {
        start: capture.start,
        length: capture.length,
    });
    Ok(if reader.is_at_str(&text, rel(reader, offset)) {
        MatchOutcome::success(capture.length)
    } else {
        MatchOutcome::failure()
    })
}

#[allow(clippy::too_many_arguments)]
fn eval_set(
    chars: &std::collections::BTreeSet<char>,
    nodes: &[std::sync::Arc<GrammarNode>],
    reader: &CodeReader,
    offset: usize,
    captures: &mut CaptureTable,
    tracer: &mut impl MatchTracer,
    steps: &mut StepCounter,
    negated: bool,
) -> Result<MatchOutcome, EngineError> {
    let current = match reader.peek(rel(reader, offset)) {
        Some(c) => c,
        None => return Ok(MatchOutcome::failure()),
    };
    let mut member = chars.contains(&current);
    let mut matched_trial: Option<CaptureTable> = None;
    if !member {
        for child in nodes {
            let mut trial = captures.clone();
            let outcome = eval(child, reader, offset, &mut trial, tracer, steps)?;
            if outcome.is_match && outcome.length >= 1 {
                member = true;
                matched_trial = Some(trial);
                break;
            }
            tracer.on_backtrack(child, offset);
        }
    }
    if member != negated {
        if let Some(trial) = matched_trial {
            *captures = trial;
        }
        Ok(MatchOutcome::success(1))
    } else {
        Ok(MatchOutcome::failure())
    }
}

#[cfg(test)]
#[path = "interpreter_tests.rs"]
mod interpreter_tests;
