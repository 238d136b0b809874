use crate::Rule;
use litfix_types::{rule_ids, Finding, RuleId, Severity, StringLiteralToken};

/// `STR001`: string literals must be fully uppercase.
///
/// The casing transform is `str::to_uppercase`, which is Unicode-aware and
/// independent of the process locale. A literal `"i"` always uppercases to
/// `"I"`, never to a locale-specific dotted variant.
pub struct UppercaseStringRule;

impl UppercaseStringRule {
    fn violates(value: &str) -> bool {
        // Empty strings have no content to judge.
        !value.is_empty() && value != value.to_uppercase()
    }
}

impl Rule for UppercaseStringRule {
    fn id(&self) -> RuleId {
        RuleId(rule_ids::UPPERCASE_STRING)
    }

    fn description(&self) -> &'static str {
        "String literals should be fully uppercase"
    }

    fn severity(&self) -> Severity {
        Severity::Error
    }

    fn evaluate(&self, token: &StringLiteralToken) -> Option<Finding> {
        if !Self::violates(&token.value) {
            return None;
        }
        Some(Finding {
            rule_id: self.id(),
            token: token.clone(),
            message: format!("String '{}' should be uppercase", token.value),
            severity: self.severity(),
        })
    }

    fn fix(&self, token: &StringLiteralToken) -> Option<String> {
        if !Self::violates(&token.value) {
            return None;
        }
        Some(token.value.to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use litfix_types::{LiteralKind, Span};
    use pretty_assertions::assert_eq;

    fn token(value: &str) -> StringLiteralToken {
        let raw = format!("\"{value}\"");
        StringLiteralToken {
            span: Span::new(0, raw.len()),
            kind: LiteralKind::Regular,
            raw,
            value: value.to_string(),
        }
    }

    #[test]
    fn flags_lowercase_content() {
        let rule = UppercaseStringRule;
        let finding = rule.evaluate(&token("hello")).unwrap();
        assert_eq!(finding.message, "String 'hello' should be uppercase");
        assert_eq!(finding.severity, Severity::Error);
        assert_eq!(finding.rule_id.as_str(), "STR001");
    }

    #[test]
    fn no_finding_iff_empty_or_already_uppercase() {
        let rule = UppercaseStringRule;
        assert!(rule.evaluate(&token("")).is_none());
        assert!(rule.evaluate(&token("HELLO")).is_none());
        assert!(rule.evaluate(&token("HELLO 123!")).is_none());
        assert!(rule.evaluate(&token("Hello")).is_some());
        assert!(rule.evaluate(&token("123h")).is_some());
    }

    #[test]
    fn fix_is_unicode_uppercase() {
        let rule = UppercaseStringRule;
        assert_eq!(rule.fix(&token("héllo")).unwrap(), "HÉLLO");
        assert_eq!(rule.fix(&token("straße")).unwrap(), "STRASSE");
        assert!(rule.fix(&token("HELLO")).is_none());
    }

    #[test]
    fn uppercasing_ignores_locale() {
        // The Turkish-I hazard: 'i' must become plain 'I'.
        let rule = UppercaseStringRule;
        assert_eq!(rule.fix(&token("i")).unwrap(), "I");
    }

    #[test]
    fn digits_and_punctuation_alone_are_exempt() {
        let rule = UppercaseStringRule;
        assert!(rule.evaluate(&token("123 !?")).is_none());
    }
}
