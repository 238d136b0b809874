//! Lint and fix pipeline for litfix.
//!
//! Each file runs scan → collect → build_edits → apply_edits in
//! isolation: one file's parse or edit failure is that file's result and
//! never aborts the rest of a batch. Everything here operates on
//! in-memory text; reading and writing files is the caller's job.

use camino::Utf8PathBuf;
use litfix_edit::{apply_edits, build_edits, EditError};
use litfix_rules::{collect, RuleSet};
use litfix_scan::{scan, ParseError};
use litfix_types::{Finding, PatchResult};
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::debug;

/// Why one file's fix operation failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Edit(#[from] EditError),
}

impl PipelineError {
    /// Both failure classes are exit code 2 at the CLI surface.
    pub fn exit_code(&self) -> u8 {
        2
    }
}

/// Lint result for one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileReport {
    /// Findings in ascending span order.
    pub findings: Vec<Finding>,
    /// Lexical errors encountered while scanning; findings above are
    /// still the complete set for the well-formed parts of the file.
    pub errors: Vec<ParseError>,
}

impl FileReport {
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty() && self.errors.is_empty()
    }
}

/// Scan one source text and evaluate the rule table over it.
///
/// Lint never mutates anything; parse errors ride along next to the
/// findings so callers can report both.
pub fn lint_source(rules: &RuleSet, source: &str) -> FileReport {
    let outcome = scan(source);
    let findings = collect(rules, &outcome.tokens);
    debug!(
        tokens = outcome.tokens.len(),
        findings = findings.len(),
        errors = outcome.errors.len(),
        "linted source"
    );
    FileReport {
        findings,
        errors: outcome.errors,
    }
}

/// Build and apply the fix patch for one source text.
///
/// A file that does not lex cleanly is not patched at all: a fix must
/// only ever be written from a complete, trusted token set.
pub fn fix_source(rules: &RuleSet, source: &str) -> Result<PatchResult, PipelineError> {
    let outcome = scan(source);
    if let Some(err) = outcome.errors.into_iter().next() {
        return Err(err.into());
    }
    let findings = collect(rules, &outcome.tokens);
    let edits = build_edits(rules, &findings);
    Ok(apply_edits(source, &edits)?)
}

/// Fix every file in the batch, independently.
///
/// Deterministic: results come back keyed and ordered by path, and no
/// state is shared across files beyond the immutable rule table. A
/// failure in one file is recorded as that file's result; the others
/// still produce patches.
pub fn fix_all(
    rules: &RuleSet,
    sources: &BTreeMap<Utf8PathBuf, String>,
) -> BTreeMap<Utf8PathBuf, Result<PatchResult, PipelineError>> {
    sources
        .iter()
        .map(|(path, source)| {
            let result = fix_source(rules, source);
            if let Err(e) = &result {
                debug!(%path, error = %e, "fix failed for file");
            }
            (path.clone(), result)
        })
        .collect()
}
