//! Funds-Transfer Ledger Engine
//!
//! Moves value between account balances, tracks the lifecycle of each
//! transfer as a durable record, and supports reversing a completed
//! transfer. Money is never created, destroyed, or left inconsistent across
//! a transfer, a failure, or a reversal.
//!
//! # Modules
//!
//! - [`core_types`] - Id types (AccountId, TransferId)
//! - [`money`] - Fixed-point amount validation and formatting
//! - [`account`] - Account Store contract + in-memory implementation
//! - [`ledger`] - Transfer lifecycle, balance mutation, ledger service
//! - [`config`] - Application configuration
//! - [`logging`] - Tracing bootstrap

// Core types - must be first!
pub mod core_types;

// Amount handling
pub mod money;

// Ledger components
pub mod account;
pub mod ledger;

// Ambient plumbing
pub mod config;
pub mod logging;

// Convenient re-exports at crate root
pub use account::{AccountStore, InMemoryAccountStore};
pub use core_types::{AccountId, TransferId};
pub use ledger::{
    BalanceMutator, InMemoryTransferStore, LedgerError, LedgerService, Transfer,
    TransferCoordinator, TransferRequest, TransferStatus, TransferStore,
};
