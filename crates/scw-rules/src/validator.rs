//! # Validator
//!
//! Evaluates every rule of a [`RuleSet`] against a [`FormRecord`] and
//! collects the failures into an [`ErrorMap`].
//!
//! ## Design
//!
//! - Validation is a pure function of `(rule set, record)`. Running it twice
//!   on equal inputs gives equal maps.
//! - Each rule reads only the record. A rule never consults another field's
//!   error, so the order rules are evaluated in does not affect the result.
//! - A field appears in the map only while it is relevant and invalid.
//!
//! ## Implements
//!
//! The block validation contract: `validate(rule_set, record) -> ErrorMap`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use scw_core::FormRecord;

use crate::rule::RuleSet;

/// Field identifier to human-readable message. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorMap {
    errors: BTreeMap<String, String>,
}

impl ErrorMap {
    /// An empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for `field`, replacing any earlier one.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.insert(field.into(), message.into());
    }

    /// The message for `field`, if it is invalid.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Whether `field` is invalid.
    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Whether every field is valid.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of invalid fields.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterate over `(field, message)` pairs in sorted field order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The invalid field identifiers in sorted order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }
}

impl std::fmt::Display for ErrorMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (field, message)) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{field}: {message}")?;
        }
        Ok(())
    }
}

/// Validate `record` against `rule_set`.
pub fn validate(rule_set: &RuleSet, record: &FormRecord) -> ErrorMap {
    let mut errors = ErrorMap::new();
    for rule in rule_set.rules() {
        if let Some(message) = rule.evaluate(record) {
            errors.insert(rule.field, message);
        }
    }
    errors
}

impl RuleSet {
    /// Validate `record` against this rule set. See [`validate`].
    pub fn validate(&self, record: &FormRecord) -> ErrorMap {
        validate(self, record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::{Condition, ValueTest};
    use crate::constraint::Constraint;
    use crate::rule::FieldRule;
    use scw_core::{FieldKind, FieldValue};

    fn agm_rules() -> RuleSet {
        RuleSet::new(
            "agm",
            vec![
                FieldRule::required("agmTiming", FieldKind::Text, "AGM timing method is required."),
                FieldRule::conditional(
                    "agmTimingMonths",
                    FieldKind::Number,
                    Condition::equals("agmTiming", "Within X months of financial year end"),
                    "Please specify the number of months.",
                )
                .with(Constraint::Min {
                    min: 1.0,
                    message: "Months must be between 1 and 12.",
                })
                .with(Constraint::Max {
                    max: 12.0,
                    message: "Months must be between 1 and 12.",
                }),
                FieldRule::required(
                    "minutesRecorded",
                    FieldKind::Boolean,
                    "Confirmation that minutes will be recorded is required.",
                )
                .with(Constraint::MustBeTrue {
                    message: "Confirmation that minutes will be recorded is required.",
                })
                .clears_unless(ValueTest::IsTrue, &["minuteAccess"]),
            ],
        )
    }

    #[test]
    fn test_empty_record_reports_required_fields_only() {
        let errors = validate(&agm_rules(), &FormRecord::new());
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("agmTiming"), Some("AGM timing method is required."));
        assert!(errors.contains("minutesRecorded"));
        assert!(!errors.contains("agmTimingMonths"));
    }

    #[test]
    fn test_conditional_field_becomes_relevant() {
        let record = FormRecord::from_iter([
            ("agmTiming", FieldValue::text("Within X months of financial year end")),
            ("minutesRecorded", FieldValue::Boolean(true)),
        ]);
        let errors = agm_rules().validate(&record);
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec!["agmTimingMonths"]
        );
    }

    #[test]
    fn test_out_of_range_month() {
        let record = FormRecord::from_iter([
            ("agmTiming", FieldValue::text("Within X months of financial year end")),
            ("agmTimingMonths", FieldValue::number(13.0)),
            ("minutesRecorded", FieldValue::Boolean(true)),
        ]);
        let errors = agm_rules().validate(&record);
        assert_eq!(
            errors.get("agmTimingMonths"),
            Some("Months must be between 1 and 12.")
        );
    }

    #[test]
    fn test_false_confirmation_fails_must_be_true() {
        let record = FormRecord::from_iter([
            ("agmTiming", FieldValue::text("In a specific month each year")),
            ("minutesRecorded", FieldValue::Boolean(false)),
        ]);
        let errors = agm_rules().validate(&record);
        assert_eq!(
            errors.get("minutesRecorded"),
            Some("Confirmation that minutes will be recorded is required.")
        );
    }

    #[test]
    fn test_error_map_display_is_sorted() {
        let errors = validate(&agm_rules(), &FormRecord::new());
        let text = errors.to_string();
        let first = text.lines().next().unwrap();
        assert!(first.starts_with("agmTiming:"));
    }

    #[test]
    fn test_error_map_serializes_flat() {
        let mut errors = ErrorMap::new();
        errors.insert("block1_societyName", "Society name is required.");
        let json = serde_json::to_string(&errors).unwrap();
        assert_eq!(json, r#"{"block1_societyName":"Society name is required."}"#);
    }
}
