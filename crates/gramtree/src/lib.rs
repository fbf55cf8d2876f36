//! Gramtree: composable grammar tree algebra, a regex-like surface syntax,
//! and a backtracking interpreter with captures, backreferences and
//! lookaround.
//!
//! # Example
//!
//! ```
//! use gramtree::{CodeReader, GrammarTreeInterpreter};
//!
//! let tree = gramtree::parse(r"(?<word>[a-z]+)\s*").expect("valid pattern");
//! let mut reader = CodeReader::new("hello world");
//! let result = GrammarTreeInterpreter::simple_match(&mut reader, &tree).expect("no engine error");
//! assert!(result.is_match);
//! assert_eq!(result.captures.get("word").map(|c| c.length), Some(5));
//! ```

pub use gramtree_core::{
    dispatch, infinite, negate, numbered_key, optional, or, repeat, then, Capture, CaptureTable,
    CharRange, CodeReader, GrammarNode, GrammarNodeToStringConverter, GrammarTreeStructuralComparer,
    GrammarVisitor, NodeError, ReaderError, ReaderPosition, RepetitionRange, Span, UnicodeCategory,
};
pub use gramtree_match::{
    eval, regex_match_at, EngineError, EngineLimits, GrammarTreeInterpreter, MatchOutcome,
    MatchTracer, NoopTracer, PatternCache, PrintTracer, RegexMatchError, SimpleMatch, SpanMatch,
    StringMatch, Verbosity,
};
pub use gramtree_regex::{parse, RegexParseError};
