//! Block 9: Transitional Provisions.
//!
//! Answers are stored under `block10_` keys.

use scw_core::FieldKind::{Boolean, Text};

use crate::condition::{Condition, ValueTest};
use crate::rule::{FieldRule, RuleSet};

/// Rules for block 9.
pub fn rules() -> RuleSet {
    RuleSet::new(
        "transitional",
        vec![
            FieldRule::required(
                "block10_isReplacingConstitution",
                Boolean,
                "Please specify if this constitution replaces a previous one.",
            )
            .clears_unless(
                ValueTest::IsTrue,
                &["block10_includeTransitionalProvisions"],
            ),
            FieldRule::conditional(
                "block10_includeTransitionalProvisions",
                Boolean,
                Condition::is_true("block10_isReplacingConstitution"),
                "Please specify if transitional rules are needed.",
            )
            .clears_unless(
                ValueTest::IsTrue,
                &["block10_transitionalProvisionsText"],
            ),
            FieldRule::conditional(
                "block10_transitionalProvisionsText",
                Text,
                Condition::is_true("block10_isReplacingConstitution")
                    .and(Condition::is_true("block10_includeTransitionalProvisions")),
                "Please provide the text for the transitional provisions.",
            ),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use scw_core::{FieldValue, FormRecord};

    #[test]
    fn test_new_society_needs_no_provisions() {
        let record = FormRecord::from_iter([(
            "block10_isReplacingConstitution",
            FieldValue::Boolean(false),
        )]);
        assert!(rules().validate(&record).is_empty());
    }

    #[test]
    fn test_replacing_requires_provision_text() {
        let record = FormRecord::from_iter([
            ("block10_isReplacingConstitution", FieldValue::Boolean(true)),
            ("block10_includeTransitionalProvisions", FieldValue::Boolean(true)),
        ]);
        assert_eq!(
            rules().validate(&record).get("block10_transitionalProvisionsText"),
            Some("Please provide the text for the transitional provisions.")
        );
    }

    #[test]
    fn test_stale_text_ignored_after_replacing_turned_off() {
        let rules = rules();
        let record = FormRecord::from_iter([
            ("block10_isReplacingConstitution", FieldValue::Boolean(true)),
            ("block10_includeTransitionalProvisions", FieldValue::Boolean(true)),
            ("block10_transitionalProvisionsText", FieldValue::text("")),
        ]);
        let applied = rules
            .apply_field_change(
                &record,
                "block10_isReplacingConstitution",
                FieldValue::Boolean(false),
            )
            .unwrap();
        assert_eq!(
            applied.record.get("block10_includeTransitionalProvisions"),
            &FieldValue::Absent
        );
        assert!(rules.validate(&applied.record).is_empty());
    }
}
