//! Per-Account Serialization
//!
//! A balance update is a read-modify-write: without serialization, two
//! concurrent debits could both read the same starting balance and
//! overwrite each other's update. This registry closes that window with an
//! in-process async mutex per account, held for the duration of a transfer's
//! balance-mutation phase.
//!
//! # Deadlock avoidance
//!
//! A transfer touches two accounts. Both locks are always acquired in
//! ascending account-id order, so overlapping transfers cannot wait on each
//! other in a cycle.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::core_types::AccountId;

/// Registry of per-account mutexes.
///
/// Lock entries are created on first use and kept for the registry's
/// lifetime; the set of accounts is small and stable relative to the
/// transfer volume.
#[derive(Debug, Default)]
pub struct AccountLocks {
    locks: DashMap<AccountId, Arc<Mutex<()>>>,
}

/// Guards for one transfer's account pair. Releases both locks on drop.
#[must_use = "dropping the guard releases the account locks"]
pub struct PairGuard {
    _first: OwnedMutexGuard<()>,
    _second: Option<OwnedMutexGuard<()>>,
}

impl AccountLocks {
    pub fn new() -> Self {
        Self::default()
    }

    fn entry(&self, account: AccountId) -> Arc<Mutex<()>> {
        self.locks
            .entry(account)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Lock both accounts of a transfer, in ascending id order.
    ///
    /// Tolerates `a == b` (single lock) so that callers replaying historic
    /// records never self-deadlock.
    pub async fn lock_pair(&self, a: AccountId, b: AccountId) -> PairGuard {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };

        let first = self.entry(lo).lock_owned().await;
        let second = if lo == hi {
            None
        } else {
            Some(self.entry(hi).lock_owned().await)
        };

        PairGuard {
            _first: first,
            _second: second,
        }
    }
}
