//! # Status Log Timestamps
//!
//! Every block status change and the start of a wizard session carry a
//! [`Timestamp`], so a host can show when a block was last completed.
//! Whole seconds in UTC, printed as `2026-10-16T09:30:00Z`.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// When a block status changed, in whole UTC seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// The current time, with sub-seconds dropped.
    pub fn now() -> Self {
        Self(Utc::now().trunc_subsecs(0))
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%SZ"))
    }
}
