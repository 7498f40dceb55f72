//! Funds-Transfer Ledger Core
//!
//! Moves value between two account balances and tracks each attempt as a
//! durable transfer record.
//!
//! # Architecture
//!
//! The core consumes two collaborators and never touches anything else:
//! - **Account Store** ([`crate::account::AccountStore`]) - one balance per
//!   account id
//! - **Transfer Record Store** ([`TransferStore`]) - transfer records keyed
//!   by id
//!
//! # State Machine
//!
//! ```text
//! PENDING → SUCCESS  (funds moved; may later gain reversed_at)
//!    ↓
//! FAILED             (no funds moved; permanent audit record)
//! ```
//!
//! # Safety Invariants
//!
//! 1. **Record-Before-Move**: the PENDING record is inserted before any
//!    balance I/O, so every attempt is auditable
//! 2. **Conservation**: sum of all balances is unchanged by any operation
//!    that completes without a store fault
//! 3. **Serialized pairs**: both account locks are held across the two
//!    balance legs; no interleaving observes a torn state
//! 4. **One reversal**: `reversed_at` is set at most once, only on SUCCESS

pub mod coordinator;
pub mod error;
pub mod locks;
pub mod mutator;
pub mod service;
pub mod status;
pub mod store;
pub mod types;

#[cfg(test)]
mod service_props;

// Re-exports for convenience
pub use coordinator::TransferCoordinator;
pub use error::LedgerError;
pub use mutator::BalanceMutator;
pub use service::LedgerService;
pub use status::TransferStatus;
pub use store::{InMemoryTransferStore, TransferStore};
pub use types::{NewTransfer, Transfer, TransferRequest};
