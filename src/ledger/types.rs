//! Ledger Core Types
//!
//! Record and request shapes for the transfer lifecycle.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::status::TransferStatus;
use crate::core_types::{AccountId, TransferId};

/// Current wall-clock time in unix millis; the only clock the core uses.
pub(crate) fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Transfer request from the upstream request layer
#[derive(Debug, Clone)]
pub struct TransferRequest {
    /// Account the amount is debited from
    pub sender: AccountId,
    /// Account the amount is credited to
    pub receiver: AccountId,
    /// Amount in currency units, > 0, at most 2 decimal places
    pub amount: Decimal,
}

impl TransferRequest {
    pub fn new(sender: AccountId, receiver: AccountId, amount: Decimal) -> Self {
        Self {
            sender,
            receiver,
            amount,
        }
    }
}

/// A transfer record as handed to the store for insertion.
///
/// The store assigns the id; everything else is fixed at creation.
#[derive(Debug, Clone)]
pub struct NewTransfer {
    pub sender: AccountId,
    pub receiver: AccountId,
    pub amount: Decimal,
    pub status: TransferStatus,
    pub created_at: i64,
}

impl NewTransfer {
    /// Create a record payload in PENDING state, stamped now.
    pub fn pending(sender: AccountId, receiver: AccountId, amount: Decimal) -> Self {
        Self {
            sender,
            receiver,
            amount,
            status: TransferStatus::Pending,
            created_at: now_millis(),
        }
    }
}

/// A stored transfer record
///
/// Never deleted: FAILED records persist as the audit trail of rejected
/// attempts, and reversed transfers keep their SUCCESS status with
/// `reversed_at` set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    /// Unique transfer ID, assigned by the record store
    pub id: TransferId,
    /// Account debited by the original movement
    pub sender: AccountId,
    /// Account credited by the original movement
    pub receiver: AccountId,
    /// Transferred amount (always positive)
    pub amount: Decimal,
    /// Lifecycle status
    pub status: TransferStatus,
    /// Creation timestamp (unix millis), immutable
    pub created_at: i64,
    /// Reversal timestamp (unix millis); set at most once, only on SUCCESS
    pub reversed_at: Option<i64>,
}

impl Transfer {
    /// Whether this transfer has been reversed.
    #[inline]
    pub fn is_reversed(&self) -> bool {
        self.reversed_at.is_some()
    }

    /// Whether this transfer may still be reversed.
    #[inline]
    pub fn is_reversible(&self) -> bool {
        self.status == TransferStatus::Success && !self.is_reversed()
    }

    /// Whether an account participates in this transfer.
    #[inline]
    pub fn involves(&self, account: AccountId) -> bool {
        self.sender == account || self.receiver == account
    }
}

impl fmt::Display for Transfer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Transfer[{}] {} -> {} amount={} status={}{}",
            self.id,
            self.sender,
            self.receiver,
            self.amount,
            self.status,
            if self.is_reversed() { " (reversed)" } else { "" }
        )
    }
}
