//! Block 7: Dispute Resolution & Notices.

use scw_core::FieldKind::{Boolean, List, Text};

use crate::condition::{Condition, ValueTest};
use crate::rule::{FieldRule, RuleSet};

const INFORMAL: &[&str] = &["informal_then_formal", "informal_only"];
const FORMAL: &[&str] = &["informal_then_formal", "formal_only"];

/// Rules for block 7.
pub fn rules() -> RuleSet {
    RuleSet::new(
        "disputes",
        vec![
            FieldRule::required(
                "block7_disputeProcedure",
                Text,
                "Please select a dispute resolution procedure.",
            )
            .clears_unless(ValueTest::OneOf(INFORMAL), &["block7_informalSteps"])
            .clears_unless(ValueTest::OneOf(FORMAL), &["block7_formalSteps"])
            .clears_unless(
                ValueTest::Equals("external_focus"),
                &["block7_externalOptions", "block7_externalOptionsOther"],
            ),
            FieldRule::conditional(
                "block7_informalSteps",
                Text,
                Condition::when("block7_disputeProcedure", ValueTest::OneOf(INFORMAL)),
                "Please describe the informal dispute resolution steps.",
            ),
            FieldRule::conditional(
                "block7_formalSteps",
                Text,
                Condition::when("block7_disputeProcedure", ValueTest::OneOf(FORMAL)),
                "Please describe the formal dispute resolution steps (must include natural justice).",
            ),
            FieldRule::conditional(
                "block7_externalOptions",
                List,
                Condition::equals("block7_disputeProcedure", "external_focus"),
                "Please select at least one external resolution option.",
            )
            .clears_unless(ValueTest::Includes("Other"), &["block7_externalOptionsOther"]),
            FieldRule::conditional(
                "block7_externalOptionsOther",
                Text,
                Condition::equals("block7_disputeProcedure", "external_focus")
                    .and(Condition::includes("block7_externalOptions", "Other")),
                "Please specify the other external resolution option.",
            ),
            FieldRule::tracked("block7_includeNoticesClause", Boolean)
                .clears_unless(ValueTest::IsTrue, &["block7_noticesClauseText"]),
            FieldRule::conditional(
                "block7_noticesClauseText",
                Text,
                Condition::is_true("block7_includeNoticesClause"),
                "Please provide the text for the notices clause.",
            ),
            FieldRule::required(
                "block7_includeIndemnityClause",
                Boolean,
                "Please specify whether to include an indemnity clause.",
            ),
            FieldRule::required(
                "block7_committeeCanArrangeInsurance",
                Boolean,
                "Please specify whether the committee can arrange insurance.",
            ),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use scw_core::{FieldValue, FormRecord};

    #[test]
    fn test_informal_then_formal_needs_both_descriptions() {
        let record = FormRecord::from_iter([(
            "block7_disputeProcedure",
            FieldValue::text("informal_then_formal"),
        )]);
        let errors = rules().validate(&record);
        assert!(errors.contains("block7_informalSteps"));
        assert!(errors.contains("block7_formalSteps"));
        assert!(!errors.contains("block7_externalOptions"));
    }

    #[test]
    fn test_switching_procedure_clears_stale_steps() {
        let rules = rules();
        let record = FormRecord::from_iter([
            ("block7_disputeProcedure", FieldValue::text("informal_then_formal")),
            ("block7_informalSteps", FieldValue::text("Talk it through")),
            ("block7_formalSteps", FieldValue::text("Committee hearing")),
        ]);
        let applied = rules
            .apply_field_change(&record, "block7_disputeProcedure", FieldValue::text("formal_only"))
            .unwrap();
        assert_eq!(applied.record.get("block7_informalSteps"), &FieldValue::text(""));
        assert_eq!(applied.record.text("block7_formalSteps"), Some("Committee hearing"));
    }

    #[test]
    fn test_indemnity_false_is_an_answer() {
        let record = FormRecord::from_iter([
            ("block7_includeIndemnityClause", FieldValue::Boolean(false)),
            ("block7_committeeCanArrangeInsurance", FieldValue::Boolean(false)),
        ]);
        let errors = rules().validate(&record);
        assert!(!errors.contains("block7_includeIndemnityClause"));
        assert!(!errors.contains("block7_committeeCanArrangeInsurance"));
    }
}
