//! Reader-side compiled-pattern cache and the `\G`-anchored `regex_match`
//! convenience (§4.1, §9 "Regex cache" design note).
//!
//! The source keeps this cache inside the reader itself; here it is a
//! free-standing type so `gramtree-core` never has to depend upward on
//! the regex parser or the interpreter.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use gramtree_core::{CaptureTable, CodeReader, GrammarNode};

use crate::facade::GrammarTreeInterpreter;
use crate::interpreter::EngineError;
use crate::limits::EngineLimits;

/// A thread-safe cache from pattern source to its compiled grammar tree.
#[derive(Default)]
pub struct PatternCache {
    patterns: RwLock<HashMap<String, Arc<GrammarNode>>>,
}

impl PatternCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn get_or_compile(&self, pattern: &str) -> Result<Arc<GrammarNode>, gramtree_regex::RegexParseError> {
        if let Some(node) = self.patterns.read().expect("pattern cache poisoned").get(pattern) {
            return Ok(node.clone());
        }
        let node = gramtree_regex::parse(pattern)?;
        self.patterns
            .write()
            .expect("pattern cache poisoned")
            .insert(pattern.to_string(), node.clone());
        Ok(node)
    }
}

/// Matches `pattern` against `reader` at its current position (the `\G`
/// anchor), compiling it once and reusing the compiled tree on subsequent
/// calls through the same `cache`.
pub fn regex_match_at(
    cache: &PatternCache,
    reader: &mut CodeReader,
    pattern: &str,
) -> Result<crate::facade::SimpleMatch, RegexMatchError> {
    let node = cache.get_or_compile(pattern).map_err(RegexMatchError::Parse)?;
    GrammarTreeInterpreter::simple_match_with(
        reader,
        &node,
        CaptureTable::new(),
        EngineLimits::unlimited(),
    )
    .map_err(RegexMatchError::Engine)
}

#[derive(Debug, thiserror::Error)]
pub enum RegexMatchError {
    #[error(transparent)]
    Parse(#[from] gramtree_regex::RegexParseError),
    #[error(transparent)]
    Engine(#[from] EngineError),
}

#[cfg(test)]
#[path = "pattern_cache_tests.rs"]
mod pattern_cache_tests;
