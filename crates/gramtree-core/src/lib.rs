//! Grammar tree algebra, code reader and capture table.
//!
//! This crate has no knowledge of regex surface syntax or of how a tree
//! is interpreted against input; it only defines the shared vocabulary
//! those two layers build on.

pub mod capture;
pub mod glossary;
pub mod node;
pub mod ops;
pub mod reader;
pub mod visitor;

pub use capture::{numbered_key, Capture, CaptureTable};
pub use glossary::{CharRange, UnicodeCategory};
pub use node::{GrammarNode, NodeError, RepetitionRange};
pub use ops::{infinite, negate, optional, or, repeat, then};
pub use reader::{CodeReader, ReaderError, ReaderPosition, Span};
pub use visitor::{dispatch, GrammarNodeToStringConverter, GrammarTreeStructuralComparer, GrammarVisitor};
