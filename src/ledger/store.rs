//! Transfer Record Store contract and in-memory reference implementation

use async_trait::async_trait;
use dashmap::DashMap;

use super::error::LedgerError;
use super::status::TransferStatus;
use super::types::{NewTransfer, Transfer};
use crate::core_types::{AccountId, TransferId};

/// Transfer record storage contract consumed by the ledger core.
///
/// Records are append-then-update: inserted once, status resolved once,
/// optionally marked reversed once. Nothing is ever deleted.
#[async_trait]
pub trait TransferStore: Send + Sync {
    /// Insert a new record; the store assigns the id.
    async fn insert(&self, new: NewTransfer) -> Result<Transfer, LedgerError>;

    /// Look up one record.
    async fn find(&self, id: TransferId) -> Result<Option<Transfer>, LedgerError>;

    /// All records where the account is sender or receiver. Order unspecified.
    async fn find_by_account(&self, account: AccountId) -> Result<Vec<Transfer>, LedgerError>;

    /// Every record. Order unspecified.
    async fn list_all(&self) -> Result<Vec<Transfer>, LedgerError>;

    /// Overwrite a record's lifecycle status.
    ///
    /// # Errors
    /// `TransferNotFound` if no such record exists.
    async fn update_status(
        &self,
        id: TransferId,
        status: TransferStatus,
    ) -> Result<(), LedgerError>;

    /// Stamp `reversed_at` on a SUCCESS record.
    ///
    /// # Errors
    /// `TransferNotFound` if no such record exists; `TransferNotReversible`
    /// if the record is not SUCCESS or was already marked. The store-level
    /// guard keeps the at-most-once invariant even for callers that skip the
    /// coordinator's own check.
    async fn mark_reversed(&self, id: TransferId, reversed_at: i64) -> Result<(), LedgerError>;
}

/// In-memory transfer record store backing the demo binary and the test suite.
#[derive(Debug, Default)]
pub struct InMemoryTransferStore {
    records: DashMap<TransferId, Transfer>,
}

impl InMemoryTransferStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TransferStore for InMemoryTransferStore {
    async fn insert(&self, new: NewTransfer) -> Result<Transfer, LedgerError> {
        let record = Transfer {
            id: TransferId::new(),
            sender: new.sender,
            receiver: new.receiver,
            amount: new.amount,
            status: new.status,
            created_at: new.created_at,
            reversed_at: None,
        };
        self.records.insert(record.id, record.clone());
        Ok(record)
    }

    async fn find(&self, id: TransferId) -> Result<Option<Transfer>, LedgerError> {
        Ok(self.records.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find_by_account(&self, account: AccountId) -> Result<Vec<Transfer>, LedgerError> {
        Ok(self
            .records
            .iter()
            .filter(|entry| entry.value().involves(account))
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn list_all(&self) -> Result<Vec<Transfer>, LedgerError> {
        Ok(self
            .records
            .iter()
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn update_status(
        &self,
        id: TransferId,
        status: TransferStatus,
    ) -> Result<(), LedgerError> {
        match self.records.get_mut(&id) {
            Some(mut entry) => {
                entry.value_mut().status = status;
                Ok(())
            }
            None => Err(LedgerError::TransferNotFound(id)),
        }
    }

    async fn mark_reversed(&self, id: TransferId, reversed_at: i64) -> Result<(), LedgerError> {
        match self.records.get_mut(&id) {
            Some(mut entry) => {
                let record = entry.value_mut();
                if !record.is_reversible() {
                    return Err(LedgerError::TransferNotReversible);
                }
                record.reversed_at = Some(reversed_at);
                Ok(())
            }
            None => Err(LedgerError::TransferNotFound(id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::types::now_millis;
    use super::*;
    use rust_decimal_macros::dec;

    async fn insert_pending(store: &InMemoryTransferStore) -> Transfer {
        store
            .insert(NewTransfer::pending(1001, 1002, dec!(10.00)))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_finds() {
        let store = InMemoryTransferStore::new();
        let a = insert_pending(&store).await;
        let b = insert_pending(&store).await;

        assert_ne!(a.id, b.id);
        assert_eq!(store.find(a.id).await.unwrap().unwrap(), a);
    }

    #[tokio::test]
    async fn test_find_missing_is_none() {
        let store = InMemoryTransferStore::new();
        assert!(store.find(TransferId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_by_account_covers_both_sides() {
        let store = InMemoryTransferStore::new();
        store
            .insert(NewTransfer::pending(1, 2, dec!(1.00)))
            .await
            .unwrap();
        store
            .insert(NewTransfer::pending(3, 1, dec!(2.00)))
            .await
            .unwrap();
        store
            .insert(NewTransfer::pending(2, 3, dec!(3.00)))
            .await
            .unwrap();

        let for_one = store.find_by_account(1).await.unwrap();
        assert_eq!(for_one.len(), 2);
        assert!(for_one.iter().all(|t| t.involves(1)));

        assert_eq!(store.list_all().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_update_status() {
        let store = InMemoryTransferStore::new();
        let t = insert_pending(&store).await;

        store
            .update_status(t.id, TransferStatus::Success)
            .await
            .unwrap();
        assert_eq!(
            store.find(t.id).await.unwrap().unwrap().status,
            TransferStatus::Success
        );

        assert!(matches!(
            store
                .update_status(TransferId::new(), TransferStatus::Failed)
                .await,
            Err(LedgerError::TransferNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_mark_reversed_once() {
        let store = InMemoryTransferStore::new();
        let t = insert_pending(&store).await;
        store
            .update_status(t.id, TransferStatus::Success)
            .await
            .unwrap();

        store.mark_reversed(t.id, now_millis()).await.unwrap();

        // Second marking refused
        assert!(matches!(
            store.mark_reversed(t.id, now_millis()).await,
            Err(LedgerError::TransferNotReversible)
        ));
    }

    #[tokio::test]
    async fn test_mark_reversed_requires_success() {
        let store = InMemoryTransferStore::new();
        let t = insert_pending(&store).await;

        assert!(matches!(
            store.mark_reversed(t.id, now_millis()).await,
            Err(LedgerError::TransferNotReversible)
        ));

        store
            .update_status(t.id, TransferStatus::Failed)
            .await
            .unwrap();
        assert!(matches!(
            store.mark_reversed(t.id, now_millis()).await,
            Err(LedgerError::TransferNotReversible)
        ));
    }
}
