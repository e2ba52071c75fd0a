//! Results of pool operations.

use core::fmt;

use crate::domain::{AccountId, Amount, AssetPair, Liquidity};

/// Amounts actually deposited and units minted by an add.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiquidityAdded {
    /// Asset0 pulled into the pool.
    pub amount0: Amount,
    /// Asset1 pulled into the pool.
    pub amount1: Amount,
    /// Units credited to the recipient.
    pub liquidity: Liquidity,
}

/// Amounts withdrawn and units burned by a remove.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiquidityRemoved {
    /// Asset0 sent to the recipient.
    pub amount0: Amount,
    /// Asset1 sent to the recipient.
    pub amount1: Amount,
    /// Units burned from the caller's position.
    pub liquidity: Liquidity,
}

/// Outcome of a single-pool swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapOutcome {
    /// Input pulled into the pool.
    pub amount_in: Amount,
    /// Output sent to the recipient.
    pub amount_out: Amount,
    /// Part of the input kept as fee (informational, rounded up).
    pub fee: Amount,
}

/// Liquidity units held by one owner in one pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LiquidityPosition {
    /// Holder of the units.
    pub owner: AccountId,
    /// Pool the units are a claim on.
    pub pair: AssetPair,
    /// Units held.
    pub units: Liquidity,
}

impl fmt::Display for LiquidityPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} units of {} held by {}", self.units, self.pair, self.owner)
    }
}
