//! Convenience re-exports for common types and traits.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use hydra_pair::prelude::*;
//! ```

pub use crate::config::PoolConfig;
pub use crate::domain::{
    AccountId, Amount, AssetId, AssetPair, BasisPoints, Deadline, FeeTier, Liquidity, Rounding,
    Timestamp,
};
pub use crate::error::{AmmError, Result, TransferError};
pub use crate::ledger::InMemoryLedger;
pub use crate::math::CheckedArithmetic;
pub use crate::pools::{
    AddLiquidityRequest, LiquidityAdded, LiquidityPool, LiquidityPosition, LiquidityRemoved,
    RemoveLiquidityRequest, SwapOutcome, SwapRequest,
};
pub use crate::registry::PoolRegistry;
pub use crate::router::{ExactInRoute, ExactOutRoute, SwapRouter};
pub use crate::traits::{AssetLedger, Clock, ManualClock, SystemClock};
