//! Cursored view over an in-memory character buffer.

use thiserror::Error;

/// Errors raised at the Code Reader boundary for malformed arguments.
///
/// Negative lengths and offsets, which the source language rejected at
/// run time, are rejected here by the `usize` parameter types instead.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ReaderError {
    #[error("cannot advance past end of input: position {position} + {amount} > {len}")]
    AdvancePastEnd {
        position: usize,
        amount: usize,
        len: usize,
    },
    #[error("cannot read past end of input: offset {offset} + {length} > {len}")]
    ReadPastEnd {
        offset: usize,
        length: usize,
        len: usize,
    },
    #[error("cannot restore to a position past end of input: {0} > {1}")]
    RestorePastEnd(usize, usize),
}

/// A single point in the buffer, restorable via [`CodeReader::restore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderPosition {
    pub position: usize,
    pub line: usize,
    pub column: usize,
}

/// A half-open range of characters, `[start, start + length)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub length: usize,
}

impl Span {
    pub fn end(&self) -> usize {
        self.start + self.length
    }
}

/// A cursored, non-destructively-peekable view over a `Vec<char>` buffer.
///
/// `line`/`column` are 1-based and track a `\n`-delimited notion of lines,
/// updated only by [`CodeReader::advance`].
#[derive(Debug, Clone)]
pub struct CodeReader {
    buffer: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl CodeReader {
    pub fn new(text: &str) -> Self {
        Self {
            buffer: text.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.position
    }

    pub fn at_end(&self) -> bool {
        self.position >= self.buffer.len()
    }

    pub fn current_position(&self) -> ReaderPosition {
        ReaderPosition {
            position: self.position,
            line: self.line,
            column: self.column,
        }
    }

    /// Non-destructively reads the character `offset` positions ahead of
    /// the cursor (`offset = 0` is the next unread character).
    pub fn peek(&self, offset: usize) -> Option<char> {
        self.buffer.get(self.position + offset).copied()
    }

    pub fn peek_at(&self, absolute: usize) -> Option<char> {
        self.buffer.get(absolute).copied()
    }

    /// True iff the single character `c` occurs `offset` positions ahead.
    pub fn is_at_char(&self, c: char, offset: usize) -> bool {
        self.peek(offset) == Some(c)
    }

    /// True iff `text` occurs verbatim starting `offset` positions ahead.
    pub fn is_at_str(&self, text: &str, offset: usize) -> bool {
        let start = self.position + offset;
        let chars: Vec<char> = text.chars().collect();
        if start + chars.len() > self.buffer.len() {
            return false;
        }
        self.buffer[start..start + chars.len()] == chars[..]
    }

    /// Reads a span of `length` characters starting `offset` ahead, without
    /// advancing. Fails if the span runs past the end of the buffer.
    pub fn peek_span(&self, length: usize, offset: usize) -> Result<Span, ReaderError> {
        let start = self.position + offset;
        if start + length > self.buffer.len() {
            return Err(ReaderError::ReadPastEnd {
                offset: start,
                length,
                len: self.buffer.len(),
            });
        }
        Ok(Span { start, length })
    }

    /// Returns the characters covered by `span`.
    pub fn text_of(&self, span: Span) -> String {
        self.buffer[span.start..span.end()].iter().collect()
    }

    /// Finds the absolute offset of the first occurrence of `c` at or after
    /// the cursor, or `None` if absent.
    pub fn find_char(&self, c: char) -> Option<usize> {
        self.buffer[self.position..]
            .iter()
            .position(|&x| x == c)
            .map(|i| i + self.position)
    }

    pub fn find_str(&self, text: &str) -> Option<usize> {
        let needle: Vec<char> = text.chars().collect();
        if needle.is_empty() {
            return Some(self.position);
        }
        let haystack = &self.buffer[self.position..];
        if needle.len() > haystack.len() {
            return None;
        }
        (0..=haystack.len() - needle.len())
            .find(|&i| haystack[i..i + needle.len()] == needle[..])
            .map(|i| i + self.position)
    }

    pub fn find_predicate(&self, predicate: impl Fn(char) -> bool) -> Option<usize> {
        self.buffer[self.position..]
            .iter()
            .position(|&c| predicate(c))
            .map(|i| i + self.position)
    }

    /// Advances the cursor by `n` characters, updating line/column.
    pub fn advance(&mut self, n: usize) -> Result<(), ReaderError> {
        if n > self.remaining() {
            return Err(ReaderError::AdvancePastEnd {
                position: self.position,
                amount: n,
                len: self.buffer.len(),
            });
        }
        for _ in 0..n {
            if self.buffer[self.position] == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            self.position += 1;
        }
        Ok(())
    }

    /// Reads and consumes `length` characters, returning the covered span.
    pub fn read_span(&mut self, length: usize) -> Result<Span, ReaderError> {
        let span = self.peek_span(length, 0)?;
        self.advance(length)?;
        Ok(span)
    }

    /// Reads and consumes `length` characters, returning them as a string.
    pub fn read_string(&mut self, length: usize) -> Result<String, ReaderError> {
        let span = self.read_span(length)?;
        Ok(self.text_of(span))
    }

    pub fn read_to_end(&mut self) -> String {
        let s: String = self.buffer[self.position..].iter().collect();
        let n = self.remaining();
        self.advance(n).expect("remaining is always in range");
        s
    }

    /// Reads one line, consuming its terminator (`\r\n`, `\n`, or `\r`, in
    /// that order of precedence) but excluding it from the returned text.
    /// Returns `None` at end of input.
    pub fn read_line(&mut self) -> Option<String> {
        if self.at_end() {
            return None;
        }
        let start = self.position;
        let mut end = start;
        while end < self.buffer.len() && self.buffer[end] != '\n' && self.buffer[end] != '\r' {
            end += 1;
        }
        let content: String = self.buffer[start..end].iter().collect();
        let consumed = if end < self.buffer.len() {
            if self.buffer[end] == '\r' && self.buffer.get(end + 1) == Some(&'\n') {
                end - start + 2
            } else {
                end - start + 1
            }
        } else {
            end - start
        };
        self.advance(consumed).expect("consumed is always in range");
        Some(content)
    }

    /// Restores the cursor to a previously-observed position.
    pub fn restore(&mut self, pos: ReaderPosition) -> Result<(), ReaderError> {
        if pos.position > self.buffer.len() {
            return Err(ReaderError::RestorePastEnd(pos.position, self.buffer.len()));
        }
        self.position = pos.position;
        self.line = pos.line;
        self.column = pos.column;
        Ok(())
    }
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod reader_tests;
