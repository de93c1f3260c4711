//! # Error Types
//!
//! Errors raised by the core data model. All errors use `thiserror` for
//! derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Validation findings are data, not errors. A field that fails a rule
//!   ends up in an error map owned by the rules layer.
//! - The only structural failure is a write that would change the kind of a
//!   field already holding a value. The record is left untouched.

use thiserror::Error;

use crate::value::FieldKind;

/// Error in the core data model.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A write would change the kind of value a field holds.
    #[error("field {field:?} holds {expected} values and cannot store a {found} value")]
    KindMismatch {
        /// The namespaced field identifier.
        field: String,
        /// The kind the field already holds (or is declared to hold).
        expected: FieldKind,
        /// The kind of the rejected value.
        found: FieldKind,
    },

    /// A record could not be decoded from or encoded to JSON.
    #[error("record serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
