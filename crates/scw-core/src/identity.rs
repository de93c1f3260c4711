//! # Identity Newtypes
//!
//! Newtype wrappers for the identifiers a host hands to the engine. They
//! keep a block number from being confused with a count or an index.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The number of a wizard block, as supplied by the host.
///
/// The engine never interprets the value: it is echoed back on completion
/// and save callbacks so the host can tell which block raised them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockNumber(pub u32);

/// Unique identifier for one wizard session (one society's constitution).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl BlockNumber {
    /// Access the raw block number.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for BlockNumber {
    fn from(n: u32) -> Self {
        Self(n)
    }
}

impl SessionId {
    /// Generate a new random session identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BlockNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "block {}", self.0)
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "session:{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_number_display() {
        assert_eq!(BlockNumber(4).to_string(), "block 4");
    }

    #[test]
    fn test_block_number_serializes_as_plain_integer() {
        let json = serde_json::to_string(&BlockNumber(7)).unwrap();
        assert_eq!(json, "7");
    }

    #[test]
    fn test_session_ids_are_unique() {
        assert_ne!(SessionId::new(), SessionId::new());
    }

    #[test]
    fn test_session_id_display_prefix() {
        let id = SessionId::new();
        assert!(id.to_string().starts_with("session:"));
    }
}
