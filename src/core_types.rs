//! Core types used throughout the system
//!
//! Fundamental identifiers used by all modules. They provide semantic
//! meaning and enable future type evolution.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Account ID - globally unique identifier for a balance-holding account.
///
/// # Constraints:
/// - **Immutable**: Once assigned, NEVER changes
/// - **Opaque**: The ledger core never interprets it beyond equality and
///   ordering (ordering is used for deadlock-free lock acquisition)
pub type AccountId = u64;

/// Transfer ID - ULID-based unique identifier
///
/// Using ULID provides:
/// - Monotonic, sortable IDs
/// - No coordination needed between store instances
/// - 128-bit with good entropy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransferId(ulid::Ulid);

impl TransferId {
    /// Generate a new unique TransferId
    pub fn new() -> Self {
        Self(ulid::Ulid::new())
    }

    /// Get the inner ULID value
    pub fn inner(&self) -> ulid::Ulid {
        self.0
    }
}

impl Default for TransferId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TransferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TransferId {
    type Err = ulid::DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(ulid::Ulid::from_string(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transfer_id_unique() {
        let a = TransferId::new();
        let b = TransferId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_transfer_id_string_roundtrip() {
        let id = TransferId::new();
        let parsed: TransferId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_transfer_id_invalid_string() {
        assert!("not-a-ulid".parse::<TransferId>().is_err());
    }
}
