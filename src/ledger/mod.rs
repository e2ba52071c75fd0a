//! Asset ledger implementations and transfer settlement.
//!
//! [`InMemoryLedger`] implements [`AssetLedger`](crate::traits::AssetLedger)
//! for tests, simulations and demos. The crate-internal settlement journal
//! gives every pool and router operation all-or-nothing transfer semantics
//! on top of any ledger.

mod memory;
mod settlement;

pub use memory::InMemoryLedger;
pub(crate) use settlement::Settlement;
