//! Zero-cost interpreter instrumentation.
//!
//! The interpreter is generic over a [`MatchTracer`] implementation so the
//! default, no-op path costs nothing; callers who want step-by-step
//! visibility supply [`PrintTracer`] instead.

use std::io::{self, Write};

use gramtree_core::GrammarNode;

/// Verbosity knob for [`PrintTracer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    #[default]
    Default,
    Verbose,
    VeryVerbose,
}

/// One method per interpreter decision point.
pub trait MatchTracer {
    fn on_enter(&mut self, node: &GrammarNode, offset: usize);
    fn on_success(&mut self, node: &GrammarNode, offset: usize, length: usize);
    fn on_failure(&mut self, node: &GrammarNode, offset: usize);
    fn on_backtrack(&mut self, node: &GrammarNode, offset: usize);
    fn on_capture(&mut self, key: &str, start: usize, length: usize);
}

/// The default tracer: every method is an inlined no-op.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTracer;

impl MatchTracer for NoopTracer {
    #[inline(always)]
    fn on_enter(&mut self, _node: &GrammarNode, _offset: usize) {}
    #[inline(always)]
    fn on_success(&mut self, _node: &GrammarNode, _offset: usize, _length: usize) {}
    #[inline(always)]
    fn on_failure(&mut self, _node: &GrammarNode, _offset: usize) {}
    #[inline(always)]
    fn on_backtrack(&mut self, _node: &GrammarNode, _offset: usize) {}
    #[inline(always)]
    fn on_capture(&mut self, _key: &str, _start: usize, _length: usize) {}
}

/// Writes one line per traced event to an arbitrary sink.
pub struct PrintTracer<W: Write> {
    sink: W,
    verbosity: Verbosity,
}

impl<W: Write> PrintTracer<W> {
    pub fn new(sink: W, verbosity: Verbosity) -> Self {
        Self { sink, verbosity }
    }

    fn writeln(&mut self, line: impl AsRef<str>) {
        let _ = writeln!(self.sink, "{}", line.as_ref());
    }
}

impl PrintTracer<io::Stdout> {
    pub fn stdout(verbosity: Verbosity) -> Self {
        Self::new(io::stdout(), verbosity)
    }
}

impl<W: Write> MatchTracer for PrintTracer<W> {
    fn on_enter(&mut self, node: &GrammarNode, offset: usize) {
        if self.verbosity != Verbosity::Default {
            self.writeln(format!("enter {node:?} @ {offset}"));
        }
    }

    fn on_success(&mut self, node: &GrammarNode, offset: usize, length: usize) {
        self.writeln(format!("match  {node:?} @ {offset} (len {length})"));
    }

    fn on_failure(&mut self, node: &GrammarNode, offset: usize) {
        if self.verbosity == Verbosity::VeryVerbose {
            self.writeln(format!("fail   {node:?} @ {offset}"));
        }
    }

    fn on_backtrack(&mut self, node: &GrammarNode, offset: usize) {
        if self.verbosity == Verbosity::VeryVerbose {
            self.writeln(format!("backtrack {node:?} @ {offset}"));
        }
    }

    fn on_capture(&mut self, key: &str, start: usize, length: usize) {
        self.writeln(format!("capture {key} = ({start}, {length})"));
    }
}
