//! Account balances
//!
//! The ledger core never owns account state: balances live behind the
//! [`AccountStore`] contract and are read and written per operation, never
//! cached. Accounts are assumed to already exist as addressable entities;
//! creating them is an upstream concern.

pub mod store;

pub use store::{AccountStore, InMemoryAccountStore};
