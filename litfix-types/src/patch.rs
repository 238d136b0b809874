use crate::span::Span;
use serde::{Deserialize, Serialize};

/// One textual change: replace the bytes under `span` with `replacement`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edit {
    pub span: Span,
    pub replacement: String,
}

/// Outcome of applying a set of edits to one source text.
///
/// Constructed once per fix application and handed back to the caller;
/// nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatchResult {
    pub original: String,
    pub new_text: String,
    /// The edits that were applied, in ascending span order.
    pub edits: Vec<Edit>,
}

impl PatchResult {
    pub fn edit_count(&self) -> usize {
        self.edits.len()
    }

    pub fn changed(&self) -> bool {
        self.original != self.new_text
    }
}
