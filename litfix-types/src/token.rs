use crate::span::Span;
use serde::{Deserialize, Serialize};

/// Quoting convention of a string literal.
///
/// A fix must re-encode its replacement with the same convention the
/// author wrote, so the kind travels with the token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiteralKind {
    /// `"..."` with backslash escapes.
    Regular,
    /// `@"..."`, no backslash escapes, `""` stands for one quote.
    Verbatim,
}

/// A string literal lifted out of the source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringLiteralToken {
    /// Location of the whole literal, quotes (and `@` prefix) included.
    pub span: Span,
    pub kind: LiteralKind,
    /// The literal exactly as written, quotes included.
    pub raw: String,
    /// The escape-decoded content.
    pub value: String,
}
