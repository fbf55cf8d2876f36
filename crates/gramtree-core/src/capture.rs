//! Capture table: the mapping from capture key to matched span, with
//! tentative-scope semantics for backtracking.

use indexmap::IndexMap;

/// A single captured sub-match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capture {
    pub start: usize,
    pub length: usize,
}

impl Capture {
    pub fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }

    pub fn end(&self) -> usize {
        self.start + self.length
    }
}

/// Formats the reserved key for numbered capture `n`, e.g. `⟨1⟩`.
pub fn numbered_key(n: u32) -> String {
    format!("\u{27E8}{n}\u{27E9}")
}

/// An insertion-ordered map from capture key to [`Capture`].
///
/// Cloning a `CaptureTable` is how the interpreter implements a
/// *tentative scope*: child nodes that may fail are evaluated against a
/// clone, which is discarded on failure and merged back on success.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptureTable {
    entries: IndexMap<String, Capture>,
}

impl CaptureTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<Capture> {
        self.entries.get(key).copied()
    }

    pub fn insert(&mut self, key: impl Into<String>, capture: Capture) {
        self.entries.insert(key.into(), capture);
    }

    pub fn insert_numbered(&mut self, position: u32, capture: Capture) {
        self.insert(numbered_key(position), capture);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Capture)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Merges `other`'s entries into `self`, overwriting on key collision.
    /// This is the "merge a tentative scope back into its parent" step.
    pub fn merge(&mut self, other: CaptureTable) {
        for (key, capture) in other.entries {
            self.entries.insert(key, capture);
        }
    }
}

#[cfg(test)]
#[path = "capture_tests.rs"]
mod capture_tests;
