//! # scw-core: Foundational Types for the Constitution Wizard
//!
//! This crate is the leaf of the workspace. It defines the data model that
//! every wizard block reads and writes: a tagged [`FieldValue`], the sparse
//! [`FormRecord`] keyed by namespaced field identifiers, and the identifiers
//! the host passes through unchanged.
//!
//! ## Key Design Principles
//!
//! 1. **Sparse records.** An identifier that is not present reads as
//!    [`FieldValue::Absent`]. Looking up an unknown field is never an error.
//!
//! 2. **Fixed field kinds.** Once a field holds a value of one kind (text,
//!    number, boolean, list) it never holds another. Writes that would change
//!    the kind are rejected with [`CoreError::KindMismatch`].
//!
//! 3. **Emptiness is kind-specific.** Blank text, an empty list, a missing
//!    value and a non-finite number are empty. `false` is a real answer.
//!
//! 4. **Namespaced identifiers are opaque.** `block5_windingUpDistribution`
//!    may be surfaced by the winding-up block; this crate never rewrites keys.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `scw-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod identity;
pub mod record;
pub mod temporal;
pub mod value;

// Re-export primary types for ergonomic imports.
pub use error::CoreError;
pub use identity::{BlockNumber, SessionId};
pub use record::FormRecord;
pub use temporal::Timestamp;
pub use value::{FieldKind, FieldValue};
