//! Transfer Coordinator
//!
//! Owns the lifecycle of a single transfer record and drives the balance
//! legs in order. This is the only component that writes transfer statuses
//! or moves funds.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use super::error::LedgerError;
use super::locks::AccountLocks;
use super::mutator::BalanceMutator;
use super::status::TransferStatus;
use super::store::TransferStore;
use super::types::{now_millis, NewTransfer, Transfer, TransferRequest};
use crate::account::AccountStore;
use crate::core_types::TransferId;
use crate::money;

/// Transfer Coordinator - drives PENDING records to a terminal status
pub struct TransferCoordinator {
    accounts: Arc<dyn AccountStore>,
    transfers: Arc<dyn TransferStore>,
    mutator: BalanceMutator,
    locks: AccountLocks,
}

impl TransferCoordinator {
    pub fn new(accounts: Arc<dyn AccountStore>, transfers: Arc<dyn TransferStore>) -> Self {
        let mutator = BalanceMutator::new(accounts.clone());
        Self {
            accounts,
            transfers,
            mutator,
            locks: AccountLocks::new(),
        }
    }

    /// Execute a transfer to a terminal status.
    ///
    /// The record is inserted as PENDING before any balance I/O, so every
    /// attempt - including rejected ones - leaves an audit record. The
    /// balance phase runs with both account locks held.
    pub async fn initiate(&self, req: TransferRequest) -> Result<Transfer, LedgerError> {
        // Boundary validation: no record is inserted for malformed requests.
        let amount = money::validate_amount(req.amount)?;
        if req.sender == req.receiver {
            return Err(LedgerError::SameAccount);
        }

        let record = self
            .transfers
            .insert(NewTransfer::pending(req.sender, req.receiver, amount))
            .await?;
        debug!(
            transfer_id = %record.id,
            sender = record.sender,
            receiver = record.receiver,
            amount = %amount,
            "transfer created"
        );

        let _guard = self.locks.lock_pair(record.sender, record.receiver).await;

        // Read both balances before mutating anything: a missing account on
        // either side must fail the transfer with zero funds moved.
        let sender_balance = match self.accounts.balance(record.sender).await {
            Ok(balance) => balance,
            Err(e) => return self.resolve_failed(record.id, e).await,
        };
        if let Err(e) = self.accounts.balance(record.receiver).await {
            return self.resolve_failed(record.id, e).await;
        }

        if sender_balance < amount {
            info!(
                transfer_id = %record.id,
                sender = record.sender,
                balance = %sender_balance,
                amount = %amount,
                "transfer rejected: insufficient balance"
            );
            return self
                .resolve_failed(record.id, LedgerError::InsufficientBalance)
                .await;
        }

        // Debit sender, credit receiver - in that order.
        if let Err(e) = self.mutator.adjust(record.sender, -amount).await {
            return self.resolve_failed(record.id, e).await;
        }
        if let Err(e) = self.mutator.adjust(record.receiver, amount).await {
            return self.resolve_failed(record.id, e).await;
        }

        self.transfers
            .update_status(record.id, TransferStatus::Success)
            .await?;

        let transfer = self.reload(record.id).await?;
        info!(transfer_id = %transfer.id, amount = %transfer.amount, "transfer committed");
        Ok(transfer)
    }

    /// Invert the balance effect of a previously successful transfer and
    /// stamp `reversed_at`. One-way, one-time.
    pub async fn reverse(&self, id: TransferId) -> Result<Transfer, LedgerError> {
        let record = self
            .transfers
            .find(id)
            .await?
            .ok_or(LedgerError::TransferNotFound(id))?;

        let _guard = self.locks.lock_pair(record.sender, record.receiver).await;

        // Re-read under the locks: a concurrent reversal may have won.
        let record = self
            .transfers
            .find(id)
            .await?
            .ok_or(LedgerError::TransferNotFound(id))?;
        if !record.is_reversible() {
            debug!(
                transfer_id = %id,
                status = %record.status,
                reversed = record.is_reversed(),
                "reversal rejected"
            );
            return Err(LedgerError::TransferNotReversible);
        }

        // Existence check on both sides before mutating, mirroring initiate.
        self.accounts.balance(record.sender).await?;
        self.accounts.balance(record.receiver).await?;

        // Exact mirror of the original movement: credit sender, debit
        // receiver. No sufficiency check - the store does not enforce
        // non-negative balances.
        self.mutator.adjust(record.sender, record.amount).await?;
        self.mutator.adjust(record.receiver, -record.amount).await?;

        self.transfers.mark_reversed(id, now_millis()).await?;

        let transfer = self.reload(id).await?;
        info!(transfer_id = %transfer.id, amount = %transfer.amount, "transfer reversed");
        Ok(transfer)
    }

    /// Best-effort resolution to FAILED, then surface the original error.
    ///
    /// If the status update itself fails the record stays PENDING for
    /// manual reconciliation and the caller sees `Internal` instead.
    async fn resolve_failed(
        &self,
        id: TransferId,
        cause: LedgerError,
    ) -> Result<Transfer, LedgerError> {
        warn!(transfer_id = %id, code = cause.code(), "resolving transfer as FAILED");
        if let Err(update_err) = self
            .transfers
            .update_status(id, TransferStatus::Failed)
            .await
        {
            error!(
                transfer_id = %id,
                error = %update_err,
                "status update failed; record left PENDING for reconciliation"
            );
            return Err(LedgerError::Internal(update_err.to_string()));
        }
        Err(cause)
    }

    async fn reload(&self, id: TransferId) -> Result<Transfer, LedgerError> {
        self.transfers
            .find(id)
            .await?
            .ok_or_else(|| LedgerError::Internal(format!("transfer {id} vanished from store")))
    }
}
