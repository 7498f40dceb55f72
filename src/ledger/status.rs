//! Transfer Lifecycle States
//!
//! State IDs are stable smallints so a record store can persist them
//! compactly.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Transfer lifecycle status
///
/// Terminal states: SUCCESS (10), FAILED (-10). A transfer resolves to a
/// terminal status synchronously within the call that created it; a
/// lingering PENDING record means a fault interrupted resolution and the
/// record awaits manual reconciliation.
///
/// Reversal is NOT a status: it is tracked orthogonally via `reversed_at`
/// on an already-SUCCESS transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i16)]
pub enum TransferStatus {
    /// Initial state - record inserted, funds not yet moved
    Pending = 0,

    /// Terminal: funds moved sender -> receiver
    Success = 10,

    /// Terminal: no funds moved (insufficient balance or fault)
    Failed = -10,
}

impl TransferStatus {
    /// Check if this is a terminal state (no more status transitions)
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, TransferStatus::Success | TransferStatus::Failed)
    }

    /// Get the numeric state ID for compact storage
    #[inline]
    pub fn id(&self) -> i16 {
        *self as i16
    }

    /// Convert from a stored state ID
    pub fn from_id(id: i16) -> Option<Self> {
        match id {
            0 => Some(TransferStatus::Pending),
            10 => Some(TransferStatus::Success),
            -10 => Some(TransferStatus::Failed),
            _ => None,
        }
    }

    /// Get human-readable state name
    pub fn as_str(&self) -> &'static str {
        match self {
            TransferStatus::Pending => "PENDING",
            TransferStatus::Success => "SUCCESS",
            TransferStatus::Failed => "FAILED",
        }
    }
}

impl fmt::Display for TransferStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<i16> for TransferStatus {
    type Error = ();

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        TransferStatus::from_id(value).ok_or(())
    }
}
