//! # Form Record
//!
//! The single, flat, sparse key-value record shared by all wizard blocks.
//! Keys are namespaced field identifiers (`block4_proxyAllowed`); values are
//! [`FieldValue`]s.
//!
//! ## Invariants
//!
//! - A key that is not present reads as [`FieldValue::Absent`].
//! - Storing `Absent` removes the key, so two records holding the same
//!   answers compare equal regardless of how they were produced.
//! - A key keeps the kind of its first non-absent value. Writing another
//!   kind fails with [`CoreError::KindMismatch`] and leaves the record as
//!   it was. [`FormRecord::reset`] is the one exception: clearing is
//!   always allowed.
//! - Keys iterate in sorted order, so serialized records are stable.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::value::FieldValue;

static ABSENT: FieldValue = FieldValue::Absent;

/// The shared wizard record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormRecord {
    values: BTreeMap<String, FieldValue>,
}

impl FormRecord {
    /// An empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a record from a JSON object.
    ///
    /// `null` entries and non-finite numbers are dropped, so the decoded
    /// record is in canonical sparse form.
    pub fn from_json_str(json: &str) -> Result<Self, CoreError> {
        let raw: BTreeMap<String, FieldValue> = serde_json::from_str(json)?;
        Ok(raw.into_iter().collect())
    }

    /// Encode the record as a pretty-printed JSON object.
    pub fn to_json_pretty(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The value stored under `field`, or `Absent`.
    pub fn get(&self, field: &str) -> &FieldValue {
        self.values.get(field).unwrap_or(&ABSENT)
    }

    /// Whether `field` holds a non-empty value.
    pub fn is_filled(&self, field: &str) -> bool {
        self.get(field).is_filled()
    }

    /// The boolean stored under `field`, if any.
    pub fn flag(&self, field: &str) -> Option<bool> {
        self.get(field).as_bool()
    }

    /// The finite number stored under `field`, if any.
    pub fn number(&self, field: &str) -> Option<f64> {
        self.get(field).as_number()
    }

    /// The text stored under `field`, if any.
    pub fn text(&self, field: &str) -> Option<&str> {
        self.get(field).as_text()
    }

    /// The list stored under `field`, or an empty slice.
    pub fn list(&self, field: &str) -> &[String] {
        self.get(field).as_list()
    }

    /// Store `value` under `field`, returning the previous value.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::KindMismatch`] if `field` already holds a
    /// non-absent value of a different kind. The record is unchanged.
    pub fn set(
        &mut self,
        field: impl Into<String>,
        value: FieldValue,
    ) -> Result<FieldValue, CoreError> {
        let field = field.into();
        let value = value.normalized();
        if let (Some(expected), Some(found)) = (self.get(&field).kind(), value.kind()) {
            if expected != found {
                return Err(CoreError::KindMismatch {
                    field,
                    expected,
                    found,
                });
            }
        }
        Ok(self.put(field, value))
    }

    /// Reset `field` to `empty`, regardless of what it currently holds.
    ///
    /// Returns `true` if the stored value changed.
    pub fn reset(&mut self, field: &str, empty: FieldValue) -> bool {
        let empty = empty.normalized();
        if self.get(field) == &empty {
            return false;
        }
        self.put(field.to_string(), empty);
        true
    }

    /// Remove `field`, returning what it held.
    pub fn remove(&mut self, field: &str) -> FieldValue {
        self.values.remove(field).unwrap_or_default()
    }

    /// Iterate over stored fields in sorted key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate over the stored fields whose identifier starts with `prefix`.
    pub fn fields_with_prefix<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a FieldValue)> + 'a {
        self.iter().filter(move |(k, _)| k.starts_with(prefix))
    }

    /// Number of stored (non-absent) fields.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no field holds a value.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn put(&mut self, field: String, value: FieldValue) -> FieldValue {
        let previous = if value.is_set() {
            self.values.insert(field, value)
        } else {
            self.values.remove(&field)
        };
        previous.unwrap_or_default()
    }
}

impl<K: Into<String>> FromIterator<(K, FieldValue)> for FormRecord {
    /// Build a record without kind checks. Later entries win.
    fn from_iter<T: IntoIterator<Item = (K, FieldValue)>>(iter: T) -> Self {
        let mut record = Self::new();
        for (k, v) in iter {
            record.put(k.into(), v.normalized());
        }
        record
    }
}
