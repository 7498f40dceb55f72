//! End-to-end scenario: a day in the ledger through the public API.

use std::sync::Arc;

use rust_decimal_macros::dec;

use ledger_engine::{
    AccountStore, InMemoryAccountStore, InMemoryTransferStore, LedgerError, LedgerService,
    TransferStatus,
};

fn build_service(seeds: &[(u64, rust_decimal::Decimal)]) -> (LedgerService, Arc<InMemoryAccountStore>) {
    let accounts = Arc::new(InMemoryAccountStore::new());
    for (id, balance) in seeds {
        accounts.open(*id, *balance);
    }
    let transfers = Arc::new(InMemoryTransferStore::new());
    (LedgerService::new(accounts.clone(), transfers), accounts)
}

#[tokio::test]
async fn transfer_lifecycle_end_to_end() {
    let (service, accounts) =
        build_service(&[(1, dec!(500.00)), (2, dec!(100.00)), (3, dec!(0.00))]);
    let opening_total = accounts.total();

    // 1 pays 2, 2 pays 3
    let first = service.initiate_transfer(1, 2, dec!(150.00)).await.unwrap();
    let second = service.initiate_transfer(2, 3, dec!(200.00)).await.unwrap();
    assert_eq!(first.status, TransferStatus::Success);
    assert_eq!(second.status, TransferStatus::Success);

    assert_eq!(accounts.balance(1).await.unwrap(), dec!(350.00));
    assert_eq!(accounts.balance(2).await.unwrap(), dec!(50.00));
    assert_eq!(accounts.balance(3).await.unwrap(), dec!(200.00));

    // 2 overreaches: rejected, audit record kept
    let err = service
        .initiate_transfer(2, 1, dec!(75.00))
        .await
        .unwrap_err();
    assert!(matches!(err, LedgerError::InsufficientBalance));

    let for_two = service.transfers_for_account(2).await.unwrap();
    assert_eq!(for_two.len(), 3);
    assert_eq!(
        for_two
            .iter()
            .filter(|t| t.status == TransferStatus::Failed)
            .count(),
        1
    );

    // The first payment is disputed and reversed
    let reversed = service.reverse_transfer(first.id).await.unwrap();
    assert!(reversed.reversed_at.is_some());
    assert_eq!(accounts.balance(1).await.unwrap(), dec!(500.00));
    assert_eq!(accounts.balance(2).await.unwrap(), dec!(-100.00)); // policy allows: store does not enforce non-negative

    // A second dispute on the same transfer is rejected
    assert!(matches!(
        service.reverse_transfer(first.id).await,
        Err(LedgerError::TransferNotReversible)
    ));

    // Every movement conserved the ledger total
    assert_eq!(accounts.total(), opening_total);
    assert_eq!(service.all_transfers().await.unwrap().len(), 3);
}
