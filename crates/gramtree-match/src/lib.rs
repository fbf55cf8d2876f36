pub mod facade;
pub mod interpreter;
pub mod limits;
pub mod pattern_cache;
pub mod trace;

pub use facade::{GrammarTreeInterpreter, SimpleMatch, SpanMatch, StringMatch};
pub use interpreter::{eval, EngineError, MatchOutcome};
pub use limits::EngineLimits;
pub use pattern_cache::{regex_match_at, PatternCache, RegexMatchError};
pub use trace::{MatchTracer, NoopTracer, PrintTracer, Verbosity};
