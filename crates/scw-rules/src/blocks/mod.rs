//! Rule tables for the nine editable constitution blocks.
//!
//! Each module exposes `rules() -> RuleSet`. Use [`crate::Block::rule_set`]
//! to get the shared, lazily built instance.

pub mod amendments;
pub mod committee;
pub mod disputes;
pub mod finances;
pub mod foundation;
pub mod meetings;
pub mod membership;
pub mod transitional;
pub mod winding_up;
