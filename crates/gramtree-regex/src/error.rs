//! The regex parser's single error type.

use std::ops::Range;

use thiserror::Error;

/// Raised by [`crate::parser::parse`] on malformed regex surface syntax.
///
/// `range` is an inclusive-start, exclusive-end span of character offsets
/// into the pattern string; `message` is one of the canonical diagnostics
/// a caller may match on by string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct RegexParseError {
    pub range: Range<usize>,
    pub message: String,
}

impl RegexParseError {
    pub fn new(range: Range<usize>, message: impl Into<String>) -> Self {
        Self {
            range,
            message: message.into(),
        }
    }
}
