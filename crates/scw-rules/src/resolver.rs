//! # Conditional Resolver
//!
//! Applies a single field change to the record and then clears the
//! dependents the change made irrelevant.
//!
//! ## Clearing Semantics
//!
//! When a rule declares `clears_unless(test, fields)` and the new value
//! fails `test`, each listed field is reset to its own declared empty value
//! (`""` for text, `[]` for lists, `Absent` for numbers and booleans).
//! Fields without a rule in the block reset to `Absent`.
//!
//! Clearing is single-level. Resetting a dependent does not clear that
//! dependent's own dependents; a grandchild field stays as it is until its
//! direct parent changes. A stale grandchild is harmless because its
//! relevance condition no longer holds, so it never reaches the error map.
//!
//! Applying the same change twice yields the same record as applying it
//! once.

use scw_core::{CoreError, FieldValue, FormRecord};

use crate::rule::RuleSet;

/// The outcome of applying one field change.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedChange {
    /// The record after the change and any clearing.
    pub record: FormRecord,
    /// Dependent fields whose stored value was reset.
    pub cleared: Vec<&'static str>,
}

/// Apply `field = value` to a copy of `record` and clear stale dependents.
///
/// # Errors
///
/// Returns [`CoreError::KindMismatch`] if `value` is not of the field's
/// declared (or currently stored) kind. `record` is never modified.
pub fn apply_field_change(
    rule_set: &RuleSet,
    record: &FormRecord,
    field: &str,
    value: FieldValue,
) -> Result<AppliedChange, CoreError> {
    let mut updated = record.clone();
    let cleared = apply_in_place(rule_set, &mut updated, field, value)?;
    Ok(AppliedChange {
        record: updated,
        cleared,
    })
}

/// In-place form of [`apply_field_change`].
///
/// On error the record is left exactly as it was.
pub fn apply_in_place(
    rule_set: &RuleSet,
    record: &mut FormRecord,
    field: &str,
    value: FieldValue,
) -> Result<Vec<&'static str>, CoreError> {
    let value = value.normalized();
    let rule = rule_set.rule(field);

    if let (Some(rule), Some(found)) = (rule, value.kind()) {
        if found != rule.kind {
            return Err(CoreError::KindMismatch {
                field: field.to_string(),
                expected: rule.kind,
                found,
            });
        }
    }
    record.set(field, value)?;

    let mut cleared = Vec::new();
    let Some(rule) = rule else {
        return Ok(cleared);
    };
    let current = record.get(field).clone();
    for group in &rule.clears {
        if group.relevant_when.matches(&current) {
            continue;
        }
        for &dependent in &group.fields {
            if record.reset(dependent, rule_set.empty_value_of(dependent)) {
                cleared.push(dependent);
            }
        }
    }
    Ok(cleared)
}

impl RuleSet {
    /// Apply a field change. See [`apply_field_change`].
    pub fn apply_field_change(
        &self,
        record: &FormRecord,
        field: &str,
        value: FieldValue,
    ) -> Result<AppliedChange, CoreError> {
        apply_field_change(self, record, field, value)
    }
}
