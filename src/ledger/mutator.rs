//! Balance Mutator
//!
//! Applies a signed delta to one account through the Account Store.
//! Pure arithmetic, no policy: sufficiency checks and multi-account
//! atomicity belong to the coordinator, which serializes the two legs of a
//! transfer under the account locks before calling in here.

use std::sync::Arc;

use rust_decimal::Decimal;

use super::error::LedgerError;
use crate::account::AccountStore;
use crate::core_types::AccountId;
use crate::money;

/// Read-modify-write of a single account balance.
pub struct BalanceMutator {
    accounts: Arc<dyn AccountStore>,
}

impl BalanceMutator {
    pub fn new(accounts: Arc<dyn AccountStore>) -> Self {
        Self { accounts }
    }

    /// Apply `delta` (may be negative) to the account's balance and return
    /// the updated balance.
    ///
    /// # Errors
    /// `AccountNotFound` if the Account Store has no such id; store faults
    /// propagate unchanged.
    pub async fn adjust(
        &self,
        account: AccountId,
        delta: Decimal,
    ) -> Result<Decimal, LedgerError> {
        let current = self.accounts.balance(account).await?;
        let updated = money::quantize(current + delta);
        self.accounts.set_balance(account, updated).await?;
        Ok(updated)
    }
}
