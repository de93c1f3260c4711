//! # Mandatory Progress
//!
//! Counts how many of a block's currently-required fields are answered.
//! Hosts render it next to the block title as `(x/y Mandatory)`.

use serde::{Deserialize, Serialize};

use scw_core::FormRecord;

use crate::rule::RuleSet;

/// Filled versus total mandatory fields for one block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MandatoryProgress {
    /// Required fields that currently hold a non-empty value.
    pub filled: usize,
    /// Required fields under the current answers.
    pub total: usize,
}

impl MandatoryProgress {
    /// Whether every mandatory field is answered.
    pub fn is_complete(&self) -> bool {
        self.filled == self.total
    }
}

impl std::fmt::Display for MandatoryProgress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.total == 0 {
            return Ok(());
        }
        write!(f, "({}/{} Mandatory)", self.filled, self.total)
    }
}

/// Count mandatory fields of `rule_set` under the answers in `record`.
///
/// A mandatory field is a required or conditional rule whose condition
/// currently holds. It counts as filled when it holds a non-empty value,
/// so a `false` answer counts even where a constraint rejects it.
pub fn progress(rule_set: &RuleSet, record: &FormRecord) -> MandatoryProgress {
    let mut out = MandatoryProgress::default();
    for rule in rule_set
        .rules()
        .filter(|rule| rule.class.is_mandatory() && rule.is_required(record))
    {
        out.total += 1;
        if record.is_filled(rule.field) {
            out.filled += 1;
        }
    }
    out
}

impl RuleSet {
    /// Mandatory progress for this block. See [`progress`].
    pub fn progress(&self, record: &FormRecord) -> MandatoryProgress {
        progress(self, record)
    }
}
