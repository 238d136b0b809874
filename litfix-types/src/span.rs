//! Byte spans over a single source text.
//!
//! A `Span` is half-open (`start..start + len`) and is attached to tokens,
//! findings, and edits so every layer can point back at the exact source
//! bytes it is talking about.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub len: usize,
}

impl Span {
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Exclusive end offset.
    pub fn end(self) -> usize {
        self.start + self.len
    }

    pub fn is_empty(self) -> bool {
        self.len == 0
    }

    /// True if the two half-open ranges share at least one byte.
    pub fn overlaps(self, other: Span) -> bool {
        self.start < other.end() && other.start < self.end()
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end())
    }
}

/// 1-based line and column for a byte offset into `text`.
///
/// Columns count characters, not bytes, so diagnostics stay readable for
/// multi-byte source. Offsets past the end of `text` clamp to the last
/// position.
pub fn line_col(text: &str, offset: usize) -> (usize, usize) {
    let offset = offset.min(text.len());
    let prefix = &text[..offset];
    let line = prefix.matches('\n').count() + 1;
    let line_start = prefix.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let col = prefix[line_start..].chars().count() + 1;
    (line, col)
}
