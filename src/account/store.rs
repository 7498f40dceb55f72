//! Account Store contract and in-memory reference implementation
//!
//! An account is an opaque id plus one balance in currency minor units
//! (2 decimal places). Balances are non-negative by policy, not enforced
//! here: the store applies whatever the ledger core writes.

use async_trait::async_trait;
use dashmap::DashMap;
use rust_decimal::Decimal;

use crate::core_types::AccountId;
use crate::ledger::error::LedgerError;
use crate::money;

/// Balance storage contract consumed by the ledger core.
///
/// Implementations must tolerate concurrent callers; the core serializes
/// the two legs of a transfer itself (per-account locks), so `balance` /
/// `set_balance` only need per-call consistency.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Read the current balance for an account.
    ///
    /// # Errors
    /// `AccountNotFound` if the store has no such id.
    async fn balance(&self, account: AccountId) -> Result<Decimal, LedgerError>;

    /// Unconditionally overwrite an account's balance.
    ///
    /// # Errors
    /// `AccountNotFound` if the store has no such id.
    async fn set_balance(&self, account: AccountId, balance: Decimal) -> Result<(), LedgerError>;
}

/// In-memory account store backing the demo binary and the test suite.
#[derive(Debug, Default)]
pub struct InMemoryAccountStore {
    balances: DashMap<AccountId, Decimal>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an account with an opening balance. Overwrites any existing entry.
    pub fn open(&self, account: AccountId, balance: Decimal) {
        self.balances.insert(account, money::quantize(balance));
    }

    /// Sum of all balances. Test/diagnostic aid for the conservation invariant.
    pub fn total(&self) -> Decimal {
        self.balances.iter().map(|entry| *entry.value()).sum()
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn balance(&self, account: AccountId) -> Result<Decimal, LedgerError> {
        self.balances
            .get(&account)
            .map(|entry| *entry.value())
            .ok_or(LedgerError::AccountNotFound(account))
    }

    async fn set_balance(&self, account: AccountId, balance: Decimal) -> Result<(), LedgerError> {
        match self.balances.get_mut(&account) {
            Some(mut entry) => {
                *entry.value_mut() = balance;
                Ok(())
            }
            None => Err(LedgerError::AccountNotFound(account)),
        }
    }
}
