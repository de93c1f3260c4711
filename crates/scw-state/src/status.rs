//! # Block Status
//!
//! ```text
//! NotStarted ──(first field change)──▶ InProgress ──(request_complete, no errors)──▶ Complete
//!                                           ▲                                          │
//!                                           └──────────────(reopen, host policy)───────┘
//! ```
//!
//! A block never reaches `Complete` from data changes alone, and never
//! leaves it unless the host explicitly reopens it.

use serde::{Deserialize, Serialize};

use scw_core::{BlockNumber, Timestamp};

/// Lifecycle state of one wizard block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockStatus {
    /// No field of the block has been changed yet.
    #[default]
    NotStarted,
    /// At least one field has been changed.
    InProgress,
    /// Completion was requested with an empty error map.
    Complete,
}

impl BlockStatus {
    /// Whether the block has been completed.
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete)
    }

    /// Stable lowercase name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::InProgress => "in_progress",
            Self::Complete => "complete",
        }
    }
}

impl std::fmt::Display for BlockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record of a block status change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusTransition {
    /// Block whose status changed.
    pub block: BlockNumber,
    /// Status before the change.
    pub from: BlockStatus,
    /// Status after the change.
    pub to: BlockStatus,
    /// When the change happened.
    pub at: Timestamp,
}

impl StatusTransition {
    pub(crate) fn now(block: BlockNumber, from: BlockStatus, to: BlockStatus) -> Self {
        Self {
            block,
            from,
            to,
            at: Timestamp::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_not_started() {
        assert_eq!(BlockStatus::default(), BlockStatus::NotStarted);
        assert!(!BlockStatus::InProgress.is_complete());
        assert!(BlockStatus::Complete.is_complete());
    }

    #[test]
    fn test_serializes_snake_case() {
        let json = serde_json::to_string(&BlockStatus::NotStarted).unwrap();
        assert_eq!(json, "\"not_started\"");
        let back: BlockStatus = serde_json::from_str("\"in_progress\"").unwrap();
        assert_eq!(back, BlockStatus::InProgress);
    }

    #[test]
    fn test_display_matches_serialized_name() {
        for status in [
            BlockStatus::NotStarted,
            BlockStatus::InProgress,
            BlockStatus::Complete,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{status}\""));
        }
    }
}
