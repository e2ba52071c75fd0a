//! Seams to the outside world.
//!
//! The pool core consumes two external collaborators: the fungible-asset
//! ledger ([`AssetLedger`]) and a time source ([`Clock`]).

mod asset_ledger;
mod clock;

pub use asset_ledger::AssetLedger;
pub use clock::{Clock, ManualClock, SystemClock};
