//! Edit engine for litfix.
//!
//! Responsibilities:
//! - Turn findings into concrete text edits (`build_edits`).
//! - Apply edits to produce a new text, byte-for-byte identical outside
//!   the edited spans (`apply_edits`).
//! - Render a unified diff preview (`render_patch`).

mod error;

pub use error::{EditError, EditResult};

use diffy::PatchFormatter;
use litfix_rules::RuleSet;
use litfix_scan::literal::encode_literal;
use litfix_types::{Edit, Finding, PatchResult};

/// One edit per finding whose rule offers a fix.
///
/// The replacement is the rule's fixed value re-encoded with the token's
/// original quoting convention, so the literal kind never changes under a
/// fix. Findings without a registered fix are skipped.
pub fn build_edits(rules: &RuleSet, findings: &[Finding]) -> Vec<Edit> {
    findings
        .iter()
        .filter_map(|finding| {
            let rule = rules.get(finding.rule_id)?;
            let fixed = rule.fix(&finding.token)?;
            Some(Edit {
                span: finding.token.span,
                replacement: encode_literal(&fixed, finding.token.kind),
            })
        })
        .collect()
}

/// Apply `edits` to `source`.
///
/// Edits are validated to be in-bounds, on character boundaries, and
/// pairwise non-overlapping; the single-rule pipeline cannot produce
/// overlaps (token spans from one scan are disjoint), but a misbehaving
/// rule must fail loudly rather than corrupt text. Application runs
/// right-to-left so earlier offsets stay valid.
pub fn apply_edits(source: &str, edits: &[Edit]) -> EditResult<PatchResult> {
    let mut ordered: Vec<Edit> = edits.to_vec();
    ordered.sort_by_key(|e| e.span.start);

    for edit in &ordered {
        if edit.span.end() > source.len() {
            return Err(EditError::OutOfBounds {
                span: edit.span,
                len: source.len(),
            });
        }
        if !source.is_char_boundary(edit.span.start) || !source.is_char_boundary(edit.span.end()) {
            return Err(EditError::Misaligned { span: edit.span });
        }
    }
    // After sorting, a later edit may not start inside an earlier one's
    // range, and no two edits may anchor at the same offset: two
    // insertions at one point have no defined order.
    for pair in ordered.windows(2) {
        if pair[1].span.start < pair[0].span.end() || pair[0].span.start == pair[1].span.start {
            return Err(EditError::Overlap {
                first: pair[0].span,
                second: pair[1].span,
            });
        }
    }

    let mut new_text = source.to_string();
    for edit in ordered.iter().rev() {
        new_text.replace_range(edit.span.start..edit.span.end(), &edit.replacement);
    }

    Ok(PatchResult {
        original: source.to_string(),
        new_text,
        edits: ordered,
    })
}

/// Unified diff between the original and patched text.
pub fn render_patch(path: &str, original: &str, new_text: &str) -> String {
    if original == new_text {
        return String::new();
    }

    let mut out = String::new();
    out.push_str(&format!("diff --git a/{0} b/{0}\n", path));
    out.push_str(&format!("--- a/{0}\n+++ b/{0}\n", path));

    let patch = diffy::create_patch(original, new_text);
    out.push_str(&PatchFormatter::new().fmt_patch(&patch).to_string());
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}
