//! # Value Constraints
//!
//! Checks applied to a field once it is known to be relevant and non-empty.
//! A rule lists its constraints in order and the first failure wins, so a
//! field always carries at most one message.
//!
//! A constraint that does not apply to the value's kind (a numeric bound on
//! a text value, say) passes.

use std::sync::OnceLock;

use regex::Regex;
use scw_core::{FieldValue, FormRecord};

use crate::condition::Condition;

/// A single check on a non-empty value.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    /// Number must be at least `min`.
    Min {
        /// Inclusive lower bound.
        min: f64,
        /// Message reported on failure.
        message: &'static str,
    },
    /// Number must be at most `max`.
    Max {
        /// Inclusive upper bound.
        max: f64,
        /// Message reported on failure.
        message: &'static str,
    },
    /// Number must be strictly greater than `bound`.
    GreaterThan {
        /// Exclusive lower bound.
        bound: f64,
        /// Message reported on failure.
        message: &'static str,
    },
    /// Number must be at most `max` while `when` holds.
    ///
    /// Used for values that are a count or a percentage depending on a
    /// sibling selector.
    MaxWhen {
        /// Condition under which the bound applies.
        when: Condition,
        /// Inclusive upper bound.
        max: f64,
        /// Message reported on failure.
        message: &'static str,
    },
    /// Number must not be below the number stored in `field`.
    ///
    /// Passes when `field` holds no number.
    NotLessThanField {
        /// The field holding the lower bound.
        field: &'static str,
        /// Message reported on failure.
        message: &'static str,
    },
    /// Boolean must be `true`. Used for mandatory confirmations.
    MustBeTrue {
        /// Message reported on failure.
        message: &'static str,
    },
    /// Text must be one of the listed options.
    OneOf {
        /// Accepted options.
        options: &'static [&'static str],
        /// Message reported on failure.
        message: &'static str,
    },
    /// Text must look like an email address.
    Email {
        /// Message reported on failure.
        message: &'static str,
    },
}

impl Constraint {
    /// Check `value`, returning the failure message if it does not pass.
    pub fn check(&self, value: &FieldValue, record: &FormRecord) -> Option<&'static str> {
        let passed = match self {
            Self::Min { min, .. } => value.as_number().map_or(true, |n| n >= *min),
            Self::Max { max, .. } => value.as_number().map_or(true, |n| n <= *max),
            Self::GreaterThan { bound, .. } => value.as_number().map_or(true, |n| n > *bound),
            Self::MaxWhen { when, max, .. } => {
                !when.holds(record) || value.as_number().map_or(true, |n| n <= *max)
            }
            Self::NotLessThanField { field, .. } => {
                match (value.as_number(), record.number(field)) {
                    (Some(n), Some(lower)) => n >= lower,
                    _ => true,
                }
            }
            Self::MustBeTrue { .. } => value.as_bool() != Some(false),
            Self::OneOf { options, .. } => value
                .as_text()
                .map_or(true, |text| options.iter().any(|o| *o == text)),
            Self::Email { .. } => value.as_text().map_or(true, is_valid_email),
        };
        if passed {
            None
        } else {
            Some(self.message())
        }
    }

    /// The message this constraint reports.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Min { message, .. }
            | Self::Max { message, .. }
            | Self::GreaterThan { message, .. }
            | Self::MaxWhen { message, .. }
            | Self::NotLessThanField { message, .. }
            | Self::MustBeTrue { message }
            | Self::OneOf { message, .. }
            | Self::Email { message } => *message,
        }
    }
}

/// Contact-person email shape: no whitespace, a single `@`, and a dot in
/// the domain with text on both sides.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Whether `candidate` has the shape of an email address.
pub fn is_valid_email(candidate: &str) -> bool {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL
        .get_or_init(|| Regex::new(EMAIL_PATTERN).ok())
        .as_ref()
        .is_some_and(|re| re.is_match(candidate))
}
