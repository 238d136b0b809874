//! Rule engine for litfix.
//!
//! This crate owns *what* counts as a finding and what its replacement
//! value is. It does not own how edits are applied; that's the
//! `litfix-edit` crate.

mod collect;
mod uppercase;

pub use collect::collect;
pub use uppercase::UppercaseStringRule;

use litfix_types::{Finding, RuleId, Severity, StringLiteralToken};

/// A named predicate + fix pair evaluated against string-literal tokens.
///
/// Implementations must be pure: the registry is built once and treated as
/// immutable for the lifetime of a run, so scans may evaluate tokens from
/// parallel workers against the same table.
pub trait Rule: Send + Sync {
    /// Stable identifier, e.g. `STR001`.
    fn id(&self) -> RuleId;

    /// One-line human description for `list-rules`.
    fn description(&self) -> &'static str;

    fn severity(&self) -> Severity;

    /// Zero or one finding per token. `None` is the normal "no violation"
    /// result, never an error.
    fn evaluate(&self, token: &StringLiteralToken) -> Option<Finding>;

    /// The replacement *decoded* value for a token this rule flagged, or
    /// `None` when the rule offers no automated fix.
    fn fix(&self, token: &StringLiteralToken) -> Option<String>;
}

/// All rules shipped with litfix.
pub fn builtin_rules() -> Vec<Box<dyn Rule>> {
    vec![Box::new(UppercaseStringRule)]
}

/// The immutable rule table a run evaluates against.
pub struct RuleSet {
    rules: Vec<Box<dyn Rule>>,
}

impl std::fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleSet")
            .field("rules", &self.rules.iter().map(|r| r.id()).collect::<Vec<_>>())
            .finish()
    }
}

impl RuleSet {
    /// Every builtin rule, enabled.
    pub fn builtin() -> Self {
        Self {
            rules: builtin_rules(),
        }
    }

    /// Builtin rules filtered to the given ids.
    ///
    /// An unknown id is a configuration error, not a silent no-op.
    pub fn enabled(ids: &[String]) -> anyhow::Result<Self> {
        let all = builtin_rules();
        for id in ids {
            if !all.iter().any(|r| r.id().as_str() == id) {
                anyhow::bail!("unknown rule id: {id}");
            }
        }
        let rules = all
            .into_iter()
            .filter(|r| ids.iter().any(|id| id == r.id().as_str()))
            .collect();
        Ok(Self { rules })
    }

    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }

    pub fn get(&self, id: RuleId) -> Option<&dyn Rule> {
        self.rules.iter().find(|r| r.id() == id).map(|r| r.as_ref())
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
