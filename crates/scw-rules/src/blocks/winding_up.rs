//! Block 8: Winding Up.
//!
//! Surplus-asset distribution is stored under `block5_` keys for
//! compatibility with records saved before this block existed.

use scw_core::FieldKind::{Boolean, Text};

use crate::condition::{Condition, ValueTest};
use crate::rule::{FieldRule, RuleSet};

const NAMED_RECIPIENT: &[&str] = &["specified_charity", "Other"];

/// Rules for block 8.
pub fn rules() -> RuleSet {
    RuleSet::new(
        "winding_up",
        vec![
            FieldRule::required(
                "block5_windingUpDistribution",
                Text,
                "Please specify how surplus assets will be distributed upon winding up.",
            )
            .clears_unless(
                ValueTest::OneOf(NAMED_RECIPIENT),
                &["block5_windingUpDistributionOther"],
            ),
            FieldRule::conditional(
                "block5_windingUpDistributionOther",
                Text,
                Condition::when(
                    "block5_windingUpDistribution",
                    ValueTest::OneOf(NAMED_RECIPIENT),
                ),
                "Please specify the organisation name(s) or other distribution details.",
            ),
            FieldRule::required(
                "block8_dissolutionProcedureReference",
                Boolean,
                "Please specify whether to include a reference to dissolution procedures.",
            ),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use scw_core::{FieldValue, FormRecord};

    #[test]
    fn test_specified_charity_needs_a_name() {
        let record = FormRecord::from_iter([
            ("block5_windingUpDistribution", FieldValue::text("specified_charity")),
            ("block8_dissolutionProcedureReference", FieldValue::Boolean(true)),
        ]);
        let errors = rules().validate(&record);
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec!["block5_windingUpDistributionOther"]
        );
    }

    #[test]
    fn test_similar_purpose_needs_no_details() {
        let record = FormRecord::from_iter([
            ("block5_windingUpDistribution", FieldValue::text("similar_purpose")),
            ("block8_dissolutionProcedureReference", FieldValue::Boolean(false)),
        ]);
        assert!(rules().validate(&record).is_empty());
    }
}
