//! Property tests for the ledger service.
//!
//! The conservation invariant must hold after every operation in any
//! sequence of transfers and reversals, whatever mix of successes and
//! domain rejections the sequence produces.

use std::sync::Arc;

use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::account::InMemoryAccountStore;
use crate::core_types::TransferId;
use crate::ledger::error::LedgerError;
use crate::ledger::service::LedgerService;
use crate::ledger::store::InMemoryTransferStore;

const ACCOUNTS: [u64; 3] = [1, 2, 3];

#[derive(Debug, Clone)]
enum Op {
    /// Transfer between two of the seeded accounts (indices may collide,
    /// exercising the SameAccount rejection).
    Transfer { from: usize, to: usize, cents: i64 },
    /// Reverse the n-th successful transfer so far (mod count), or an
    /// unknown id when none exist yet.
    Reverse { pick: usize },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0usize..3, 0usize..3, 0i64..20_000)
            .prop_map(|(from, to, cents)| Op::Transfer { from, to, cents }),
        1 => (0usize..8).prop_map(|pick| Op::Reverse { pick }),
    ]
}

fn cents(value: i64) -> Decimal {
    Decimal::new(value, 2)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn conservation_holds_across_any_sequence(
        seeds in prop::collection::vec(0i64..100_000, 3),
        ops in prop::collection::vec(op_strategy(), 1..40),
    ) {
        let rt = tokio::runtime::Builder::new_current_thread()
            .build()
            .expect("runtime");

        rt.block_on(async move {
            let accounts = Arc::new(InMemoryAccountStore::new());
            for (id, seed) in ACCOUNTS.iter().zip(&seeds) {
                accounts.open(*id, cents(*seed));
            }
            let initial_total = accounts.total();

            let transfers = Arc::new(InMemoryTransferStore::new());
            let service = LedgerService::new(accounts.clone(), transfers);

            let mut committed: Vec<TransferId> = Vec::new();

            for op in ops {
                match op {
                    Op::Transfer { from, to, cents: c } => {
                        match service
                            .initiate_transfer(ACCOUNTS[from], ACCOUNTS[to], cents(c))
                            .await
                        {
                            Ok(transfer) => committed.push(transfer.id),
                            Err(
                                LedgerError::InvalidAmount
                                | LedgerError::SameAccount
                                | LedgerError::InsufficientBalance,
                            ) => {}
                            Err(e) => panic!("unexpected error: {e}"),
                        }
                    }
                    Op::Reverse { pick } => {
                        let result = if committed.is_empty() {
                            service.reverse_transfer(TransferId::new()).await
                        } else {
                            service
                                .reverse_transfer(committed[pick % committed.len()])
                                .await
                        };
                        match result {
                            Ok(_)
                            | Err(
                                LedgerError::TransferNotFound(_)
                                | LedgerError::TransferNotReversible,
                            ) => {}
                            Err(e) => panic!("unexpected error: {e}"),
                        }
                    }
                }

                prop_assert_eq!(accounts.total(), initial_total);
            }

            Ok(())
        })?;
    }
}
