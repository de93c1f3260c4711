//! Block 5: Finances & Assets.
//!
//! The winding-up distribution fields keep their `block5_` keys but are
//! asked and validated in block 8.

use scw_core::FieldKind::{Boolean, List, Number, Text};

use crate::condition::{Condition, ValueTest};
use crate::constraint::Constraint;
use crate::rule::{FieldRule, RuleSet};

/// Rules for block 5.
pub fn rules() -> RuleSet {
    RuleSet::new(
        "finances",
        vec![
            FieldRule::required(
                "block5_financialYearEnd",
                Text,
                "Please specify the financial year end date.",
            )
            .clears_unless(ValueTest::Equals("Other"), &["block5_financialYearEndOther"]),
            FieldRule::other_for(
                "block5_financialYearEndOther",
                "block5_financialYearEnd",
                "Other",
                "Please specify the other financial year end date.",
            ),
            FieldRule::required(
                "block5_fundManagement",
                List,
                "Please select at least one method for managing funds.",
            )
            .clears_unless(ValueTest::Includes("Other"), &["block5_fundManagementOther"]),
            FieldRule::other_in(
                "block5_fundManagementOther",
                "block5_fundManagement",
                "Other",
                "Please specify the other fund management method.",
            ),
            FieldRule::required(
                "block5_paymentAuthorisation",
                Text,
                "Please specify how payments are authorised.",
            )
            .clears_unless(
                ValueTest::Equals("Other"),
                &["block5_paymentAuthorisationOther"],
            ),
            FieldRule::other_for(
                "block5_paymentAuthorisationOther",
                "block5_paymentAuthorisation",
                "Other",
                "Please specify the other payment authorisation method.",
            ),
            FieldRule::required(
                "block5_confirmNoFinancialGain",
                Boolean,
                "You must confirm understanding of the Application of Income and No Financial Gain clauses.",
            )
            .with(Constraint::MustBeTrue {
                message: "You must confirm understanding of the Application of Income and No Financial Gain clauses.",
            }),
            FieldRule::required(
                "block5_borrowingPower",
                Boolean,
                "Please specify if the Society has borrowing powers.",
            )
            .clears_unless(ValueTest::IsTrue, &["block5_borrowingLimits"]),
            FieldRule::conditional(
                "block5_borrowingLimits",
                Text,
                Condition::is_true("block5_borrowingPower"),
                "Please specify any limits or conditions on borrowing.",
            ),
            FieldRule::required(
                "block5_auditRequirement",
                Text,
                "Please specify the audit requirements.",
            )
            .clears_unless(
                ValueTest::Equals("revenue_threshold"),
                &["block5_auditRequirementThreshold"],
            ),
            FieldRule::conditional(
                "block5_auditRequirementThreshold",
                Number,
                Condition::equals("block5_auditRequirement", "revenue_threshold"),
                "Please specify a valid revenue threshold for requiring an audit.",
            )
            .with(Constraint::GreaterThan {
                bound: 0.0,
                message: "Please specify a valid revenue threshold for requiring an audit.",
            }),
            FieldRule::required(
                "block5_auditorAppointment",
                Text,
                "Please specify how the auditor is appointed.",
            )
            .clears_unless(
                ValueTest::Equals("Other"),
                &["block5_auditorAppointmentOther"],
            ),
            FieldRule::other_for(
                "block5_auditorAppointmentOther",
                "block5_auditorAppointment",
                "Other",
                "Please specify the other auditor appointment method.",
            ),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use scw_core::{FieldValue, FormRecord};

    #[test]
    fn test_no_financial_gain_must_be_confirmed() {
        let record = FormRecord::from_iter([(
            "block5_confirmNoFinancialGain",
            FieldValue::Boolean(false),
        )]);
        assert!(rules()
            .validate(&record)
            .contains("block5_confirmNoFinancialGain"));
    }

    #[test]
    fn test_audit_threshold_only_for_revenue_threshold() {
        let rules = rules();
        let always = FormRecord::from_iter([("block5_auditRequirement", FieldValue::text("always"))]);
        assert!(!rules.validate(&always).contains("block5_auditRequirementThreshold"));

        let threshold = FormRecord::from_iter([
            ("block5_auditRequirement", FieldValue::text("revenue_threshold")),
            ("block5_auditRequirementThreshold", FieldValue::number(0.0)),
        ]);
        assert_eq!(
            rules.validate(&threshold).get("block5_auditRequirementThreshold"),
            Some("Please specify a valid revenue threshold for requiring an audit.")
        );
    }

    #[test]
    fn test_winding_up_not_validated_here() {
        let errors = rules().validate(&FormRecord::new());
        assert!(!errors.contains("block5_windingUpDistribution"));
    }
}
