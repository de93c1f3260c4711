//! # Conditions
//!
//! Declarative predicates over a [`FormRecord`]. A [`Condition`] decides
//! whether a field is relevant; a [`ValueTest`] inspects a single value.
//!
//! Conditions read only the record, never an error map, so the validity of
//! one field never depends on whether another field is valid.

use scw_core::{FieldValue, FormRecord};

/// A test applied to one field value.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueTest {
    /// The value is `Boolean(true)`.
    IsTrue,
    /// The value is `Boolean(false)`. `Absent` does not match.
    IsFalse,
    /// The value is anything but `Absent`.
    IsSet,
    /// The value is non-empty.
    Filled,
    /// The value is text equal to the given option.
    Equals(&'static str),
    /// The value is text equal to one of the given options.
    OneOf(&'static [&'static str]),
    /// The value is a list containing the given option.
    Includes(&'static str),
}

impl ValueTest {
    /// Apply the test.
    pub fn matches(&self, value: &FieldValue) -> bool {
        match self {
            Self::IsTrue => value.as_bool() == Some(true),
            Self::IsFalse => value.as_bool() == Some(false),
            Self::IsSet => value.is_set(),
            Self::Filled => value.is_filled(),
            Self::Equals(option) => value.as_text() == Some(*option),
            Self::OneOf(options) => value
                .as_text()
                .is_some_and(|text| options.iter().any(|o| *o == text)),
            Self::Includes(option) => value.includes(option),
        }
    }
}

/// A predicate over the whole record.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// Always holds.
    Always,
    /// Never holds.
    Never,
    /// The named field passes the test.
    Field(&'static str, ValueTest),
    /// The inner condition does not hold.
    Not(Box<Condition>),
    /// Every inner condition holds.
    All(Vec<Condition>),
    /// At least one inner condition holds.
    Any(Vec<Condition>),
}

impl Condition {
    /// Shorthand for [`Condition::Field`].
    pub fn when(field: &'static str, test: ValueTest) -> Self {
        Self::Field(field, test)
    }

    /// The field is `true`.
    pub fn is_true(field: &'static str) -> Self {
        Self::Field(field, ValueTest::IsTrue)
    }

    /// The field is text equal to `option`.
    pub fn equals(field: &'static str, option: &'static str) -> Self {
        Self::Field(field, ValueTest::Equals(option))
    }

    /// The field is a list containing `option`.
    pub fn includes(field: &'static str, option: &'static str) -> Self {
        Self::Field(field, ValueTest::Includes(option))
    }

    /// The field is non-empty.
    pub fn filled(field: &'static str) -> Self {
        Self::Field(field, ValueTest::Filled)
    }

    /// Negate this condition.
    pub fn negate(self) -> Self {
        match self {
            Self::Always => Self::Never,
            Self::Never => Self::Always,
            Self::Not(inner) => *inner,
            other => Self::Not(Box::new(other)),
        }
    }

    /// Conjoin with another condition.
    pub fn and(self, other: Condition) -> Self {
        match (self, other) {
            (Self::Always, c) | (c, Self::Always) => c,
            (Self::All(mut parts), c) => {
                parts.push(c);
                Self::All(parts)
            }
            (a, b) => Self::All(vec![a, b]),
        }
    }

    /// Evaluate against the record.
    pub fn holds(&self, record: &FormRecord) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Field(field, test) => test.matches(record.get(field)),
            Self::Not(inner) => !inner.holds(record),
            Self::All(parts) => parts.iter().all(|c| c.holds(record)),
            Self::Any(parts) => parts.iter().any(|c| c.holds(record)),
        }
    }

    /// The field identifiers this condition reads, in order of appearance.
    pub fn fields(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        self.collect_fields(&mut out);
        out
    }

    fn collect_fields(&self, out: &mut Vec<&'static str>) {
        match self {
            Self::Always | Self::Never => {}
            Self::Field(field, _) => {
                if !out.contains(field) {
                    out.push(*field);
                }
            }
            Self::Not(inner) => inner.collect_fields(out),
            Self::All(parts) | Self::Any(parts) => {
                for part in parts {
                    part.collect_fields(out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> FormRecord {
        FormRecord::from_iter([
            ("block4_proxyAllowed", FieldValue::Boolean(true)),
            ("block4_proxyFormRequired", FieldValue::Boolean(false)),
            ("block4_chairperson", FieldValue::text("Other (specify)")),
            (
                "block4_noticeMethods",
                FieldValue::list(["Email", "Other (specify)"]),
            ),
        ])
    }

    #[test]
    fn test_is_false_does_not_match_absent() {
        assert!(ValueTest::IsFalse.matches(&FieldValue::Boolean(false)));
        assert!(!ValueTest::IsFalse.matches(&FieldValue::Absent));
    }

    #[test]
    fn test_is_set_matches_blank_text() {
        assert!(ValueTest::IsSet.matches(&FieldValue::text("")));
        assert!(!ValueTest::Filled.matches(&FieldValue::text("")));
    }

    #[test]
    fn test_one_of() {
        let test = ValueTest::OneOf(&["informal_then_formal", "informal_only"]);
        assert!(test.matches(&FieldValue::text("informal_only")));
        assert!(!test.matches(&FieldValue::text("formal_only")));
        assert!(!test.matches(&FieldValue::Absent));
    }

    #[test]
    fn test_compound_conditions() {
        let record = record();
        let both = Condition::is_true("block4_proxyAllowed")
            .and(Condition::is_true("block4_proxyFormRequired"));
        assert!(!both.holds(&record));

        let either = Condition::Any(vec![
            Condition::is_true("block4_proxyFormRequired"),
            Condition::equals("block4_chairperson", "Other (specify)"),
        ]);
        assert!(either.holds(&record));
        assert!(Condition::includes("block4_noticeMethods", "Email").holds(&record));
        assert!(!Condition::includes("block4_noticeMethods", "Post").holds(&record));
    }

    #[test]
    fn test_negate_simplifies() {
        assert_eq!(Condition::Always.negate(), Condition::Never);
        let c = Condition::is_true("block4_proxyAllowed");
        assert_eq!(c.clone().negate().negate(), c);
        assert!(!c.negate().holds(&record()));
    }

    #[test]
    fn test_and_flattens_always() {
        let c = Condition::Always.and(Condition::filled("x"));
        assert_eq!(c, Condition::filled("x"));
    }

    #[test]
    fn test_fields_are_deduplicated() {
        let c = Condition::All(vec![
            Condition::is_true("a"),
            Condition::Any(vec![Condition::filled("b"), Condition::is_true("a")]),
        ]);
        assert_eq!(c.fields(), vec!["a", "b"]);
    }
}
