//! Diagnostic collection: evaluate the rule table over a token sequence.

use crate::RuleSet;
use litfix_types::{Finding, StringLiteralToken};

/// Evaluate every enabled rule against every token.
///
/// Findings come back in ascending span order, stable for ties (tokens are
/// visited in scan order, rules in registry order). The stable sort makes
/// the contract hold even if a caller hands in tokens out of order, e.g.
/// after merging per-token results evaluated on parallel workers.
pub fn collect(rules: &RuleSet, tokens: &[StringLiteralToken]) -> Vec<Finding> {
    let mut findings: Vec<Finding> = tokens
        .iter()
        .flat_map(|token| rules.rules().iter().filter_map(|rule| rule.evaluate(token)))
        .collect();
    findings.sort_by_key(|f| f.token.span.start);
    findings
}
