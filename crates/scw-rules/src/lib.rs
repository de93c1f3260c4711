//! # scw-rules: Declarative Block Rules and Validation
//!
//! Each wizard block is described by a static [`RuleSet`]: a list of
//! [`FieldRule`]s saying when a field is required, what makes a value
//! acceptable, and which dependent fields must be cleared when an answer
//! makes them irrelevant.
//!
//! ## Architecture
//!
//! - **Conditions** ([`Condition`], [`ValueTest`]): declarative predicates
//!   over the shared [`scw_core::FormRecord`]. They read the record only.
//!
//! - **Validator** ([`validate`]): evaluates every rule and returns an
//!   [`ErrorMap`] of field to message. Pure and deterministic.
//!
//! - **Resolver** ([`apply_field_change`]): applies a single change and
//!   resets stale dependents to their declared empty value. Single-level
//!   and idempotent.
//!
//! - **Progress** ([`progress`]): counts answered versus required fields.
//!
//! - **Catalogue** ([`Block`]): the ten wizard blocks with titles and
//!   their lazily built rule tables.
//!
//! ## Crate Policy
//!
//! - Depends only on `scw-core` within the workspace.
//! - No I/O. No mutable global state beyond the lazily built tables.

pub mod blocks;
pub mod catalogue;
pub mod compliance;
pub mod condition;
pub mod constraint;
pub mod progress;
pub mod resolver;
pub mod rule;
pub mod validator;

pub use catalogue::Block;
pub use compliance::contact_person_rules;
pub use condition::{Condition, ValueTest};
pub use constraint::{is_valid_email, Constraint};
pub use progress::{progress, MandatoryProgress};
pub use resolver::{apply_field_change, apply_in_place, AppliedChange};
pub use rule::{Dependents, FieldRule, RuleClass, RuleSet};
pub use validator::{validate, ErrorMap};
