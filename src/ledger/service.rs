//! Ledger Service
//!
//! The only entry point the upstream request layer uses. Presents a stable
//! five-operation API independent of store implementation; everything with
//! side effects delegates to the [`TransferCoordinator`].

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::debug;

use super::coordinator::TransferCoordinator;
use super::error::LedgerError;
use super::store::TransferStore;
use super::types::{Transfer, TransferRequest};
use crate::account::AccountStore;
use crate::core_types::{AccountId, TransferId};

/// Composition root of the ledger core.
pub struct LedgerService {
    coordinator: TransferCoordinator,
    transfers: Arc<dyn TransferStore>,
}

impl LedgerService {
    /// Wire the service against its two store collaborators.
    pub fn new(accounts: Arc<dyn AccountStore>, transfers: Arc<dyn TransferStore>) -> Self {
        Self {
            coordinator: TransferCoordinator::new(accounts, transfers.clone()),
            transfers,
        }
    }

    /// Move `amount` from `sender` to `receiver`, resolving the transfer
    /// record to a terminal status synchronously.
    pub async fn initiate_transfer(
        &self,
        sender: AccountId,
        receiver: AccountId,
        amount: Decimal,
    ) -> Result<Transfer, LedgerError> {
        self.coordinator
            .initiate(TransferRequest::new(sender, receiver, amount))
            .await
    }

    /// Look up one transfer.
    pub async fn get_transfer(&self, id: TransferId) -> Result<Transfer, LedgerError> {
        self.transfers
            .find(id)
            .await?
            .ok_or(LedgerError::TransferNotFound(id))
    }

    /// Every transfer where the account is sender or receiver.
    /// Order unspecified.
    pub async fn transfers_for_account(
        &self,
        account: AccountId,
    ) -> Result<Vec<Transfer>, LedgerError> {
        let transfers = self.transfers.find_by_account(account).await?;
        debug!(account, count = transfers.len(), "listed transfers for account");
        Ok(transfers)
    }

    /// Every transfer record. Order unspecified.
    pub async fn all_transfers(&self) -> Result<Vec<Transfer>, LedgerError> {
        self.transfers.list_all().await
    }

    /// Invert a previously successful transfer. One-way, one-time.
    pub async fn reverse_transfer(&self, id: TransferId) -> Result<Transfer, LedgerError> {
        self.coordinator.reverse(id).await
    }
}
