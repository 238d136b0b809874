//! Shared data model for the litfix workspace.
//!
//! # Design constraints
//! - Everything here is produced once and treated as read-only downstream.
//! - Findings and edits serialize to JSON for the CLI's `--format json`
//!   output; be conservative with breaking changes.

pub mod finding;
pub mod patch;
pub mod span;
pub mod token;

pub use finding::{Finding, RuleId, Severity};
pub use patch::{Edit, PatchResult};
pub use span::{line_col, Span};
pub use token::{LiteralKind, StringLiteralToken};

/// Builtin rule identifiers.
pub mod rule_ids {
    /// String literals must be fully uppercase.
    pub const UPPERCASE_STRING: &str = "STR001";
}
