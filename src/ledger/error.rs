//! Ledger Error Types
//!
//! One taxonomy for every operation the core exposes. Domain-expected
//! conditions (insufficient balance, not-found, not-reversible) are typed
//! variants; unexpected store faults collapse into `Internal`.

use thiserror::Error;

use crate::core_types::{AccountId, TransferId};
use crate::money::MoneyError;

/// Ledger error types
///
/// Error codes are stable identifiers an upstream request layer can map to
/// its own response taxonomy.
#[derive(Error, Debug, Clone)]
pub enum LedgerError {
    // === Validation Errors ===
    #[error("Sender and receiver account cannot be the same")]
    SameAccount,

    #[error("Amount must be greater than zero with at most 2 decimal places")]
    InvalidAmount,

    // === Domain Errors ===
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    #[error("Transfer not found: {0}")]
    TransferNotFound(TransferId),

    #[error("Insufficient balance")]
    InsufficientBalance,

    #[error("Transfer is not reversible")]
    TransferNotReversible,

    // === System Errors ===
    #[error("Internal storage error: {0}")]
    Internal(String),
}

impl LedgerError {
    /// Get the stable error code for upstream classification
    pub fn code(&self) -> &'static str {
        match self {
            LedgerError::SameAccount => "SAME_ACCOUNT",
            LedgerError::InvalidAmount => "INVALID_AMOUNT",
            LedgerError::AccountNotFound(_) => "ACCOUNT_NOT_FOUND",
            LedgerError::TransferNotFound(_) => "TRANSFER_NOT_FOUND",
            LedgerError::InsufficientBalance => "INSUFFICIENT_BALANCE",
            LedgerError::TransferNotReversible => "TRANSFER_NOT_REVERSIBLE",
            LedgerError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<MoneyError> for LedgerError {
    fn from(_: MoneyError) -> Self {
        LedgerError::InvalidAmount
    }
}

impl From<anyhow::Error> for LedgerError {
    fn from(e: anyhow::Error) -> Self {
        LedgerError::Internal(e.to_string())
    }
}
