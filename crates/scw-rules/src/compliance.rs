//! # Compliance Activity: Contact Person
//!
//! Rule table for the "Contact Person" activity of the regulatory
//! compliance tracker. Fields live in the `step3_` namespace and run
//! through the same validator and controller as the constitution blocks.
//!
//! One contact person is modelled. The record has no nested entries, so
//! additional contacts are not represented.

use scw_core::FieldKind::Text;

use crate::constraint::Constraint;
use crate::rule::{FieldRule, RuleSet};

/// Options accepted for the preferred contact method.
pub const PREFERRED_CONTACT_METHODS: &[&str] = &["Email", "Phone", "Post"];

/// Answers accepted for the register change question.
pub const REGISTER_CHANGE_ANSWERS: &[&str] = &["yes", "no", "N/A"];

/// Rules for the contact person activity.
pub fn contact_person_rules() -> RuleSet {
    RuleSet::new(
        "contact_person",
        vec![
            FieldRule::required(
                "step3_contactName",
                Text,
                "Name is required for the contact person.",
            ),
            FieldRule::required(
                "step3_contactPostalAddress",
                Text,
                "Postal Address is required for the contact person.",
            ),
            FieldRule::required(
                "step3_contactEmail",
                Text,
                "Email is required for the contact person.",
            )
            .with(Constraint::Email {
                message: "Invalid email format for the contact person.",
            }),
            FieldRule::optional("step3_contactPhone", Text),
            FieldRule::required(
                "step3_preferredContact",
                Text,
                "Preferred contact method is required for the contact person.",
            )
            .with(Constraint::OneOf {
                options: PREFERRED_CONTACT_METHODS,
                message: "Preferred contact method must be Email, Phone or Post.",
            }),
            FieldRule::required(
                "step3_registerChange",
                Text,
                "Please answer the register change question.",
            )
            .with(Constraint::OneOf {
                options: REGISTER_CHANGE_ANSWERS,
                message: "Please answer the register change question.",
            }),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use scw_core::{FieldValue, FormRecord};

    fn complete_contact() -> FormRecord {
        FormRecord::from_iter([
            ("step3_contactName", FieldValue::text("Aroha Smith")),
            (
                "step3_contactPostalAddress",
                FieldValue::text("PO Box 12, Nelson"),
            ),
            ("step3_contactEmail", FieldValue::text("aroha@example.org.nz")),
            ("step3_preferredContact", FieldValue::text("Email")),
            ("step3_registerChange", FieldValue::text("N/A")),
        ])
    }

    #[test]
    fn test_complete_contact_is_valid() {
        assert!(contact_person_rules().validate(&complete_contact()).is_empty());
    }

    #[test]
    fn test_bad_email_reported() {
        let rules = contact_person_rules();
        let applied = rules
            .apply_field_change(
                &complete_contact(),
                "step3_contactEmail",
                FieldValue::text("aroha at example"),
            )
            .unwrap();
        assert_eq!(
            rules.validate(&applied.record).get("step3_contactEmail"),
            Some("Invalid email format for the contact person.")
        );
    }

    #[test]
    fn test_phone_is_optional() {
        let errors = contact_person_rules().validate(&FormRecord::new());
        assert!(!errors.contains("step3_contactPhone"));
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn test_unknown_contact_method_rejected() {
        let mut record = complete_contact();
        record
            .set("step3_preferredContact", FieldValue::text("Fax"))
            .unwrap();
        assert_eq!(
            contact_person_rules()
                .validate(&record)
                .get("step3_preferredContact"),
            Some("Preferred contact method must be Email, Phone or Post.")
        );
    }
}
