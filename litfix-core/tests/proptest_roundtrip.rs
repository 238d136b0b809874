//! Property-based round-trip: for any source that lexes cleanly, fixing
//! reaches a fixed point and never disturbs text outside literal spans.

use litfix_core::{fix_source, lint_source};
use litfix_rules::RuleSet;
use litfix_scan::scan;
use proptest::prelude::*;

fn arb_literal_value() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 _;,!-]{0,12}"
}

/// Sources assembled from statements around well-formed literals.
fn arb_clean_source() -> impl Strategy<Value = String> {
    prop::collection::vec(
        (arb_literal_value(), any::<bool>()).prop_map(|(value, verbatim)| {
            if verbatim {
                format!("var v = @\"{value}\";\n")
            } else {
                format!("var v = \"{value}\";\n")
            }
        }),
        0..8,
    )
    .prop_map(|stmts| stmts.concat())
}

proptest! {
    #[test]
    fn fix_reaches_a_fixed_point(source in arb_clean_source()) {
        let rules = RuleSet::builtin();
        let once = fix_source(&rules, &source).unwrap();
        let twice = fix_source(&rules, &once.new_text).unwrap();
        prop_assert_eq!(twice.edit_count(), 0);
        prop_assert_eq!(&twice.new_text, &once.new_text);
    }

    #[test]
    fn fixed_output_has_no_findings(source in arb_clean_source()) {
        let rules = RuleSet::builtin();
        let patch = fix_source(&rules, &source).unwrap();
        let report = lint_source(&rules, &patch.new_text);
        prop_assert!(report.findings.is_empty());
    }

    #[test]
    fn text_outside_literal_spans_is_untouched(source in arb_clean_source()) {
        let rules = RuleSet::builtin();
        let tokens = scan(&source).tokens;
        let patch = fix_source(&rules, &source).unwrap();

        // Everything before the first literal, between literals, and after
        // the last literal must be byte-identical. Walk both texts by
        // cutting out the edited spans.
        let mut orig_rest = source.as_str();
        let mut new_rest = patch.new_text.as_str();
        let mut cursor = 0usize;
        let mut edits = patch.edits.iter().peekable();
        for token in &tokens {
            // Unflagged tokens carry no edit and keep their raw text.
            let replaced_len = match edits.peek() {
                Some(e) if e.span == token.span => {
                    let len = e.replacement.len();
                    edits.next();
                    len
                }
                _ => token.raw.len(),
            };
            let gap = token.span.start - cursor;
            prop_assert_eq!(&orig_rest[..gap], &new_rest[..gap]);
            orig_rest = &orig_rest[gap + token.span.len..];
            new_rest = &new_rest[gap + replaced_len..];
            cursor = token.span.end();
        }
        prop_assert_eq!(orig_rest, new_rest);
    }
}
