//! Caller-supplied parameters of the pool-mutating operations.

use crate::domain::{AccountId, Amount, Deadline, Liquidity};

/// Parameters of [`LiquidityPool::add_liquidity`](super::LiquidityPool::add_liquidity).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddLiquidityRequest {
    /// Most of asset0 the caller is willing to deposit.
    pub amount0_desired: Amount,
    /// Most of asset1 the caller is willing to deposit.
    pub amount1_desired: Amount,
    /// Least of asset0 the caller accepts to deposit after ratio adjustment.
    pub amount0_min: Amount,
    /// Least of asset1 the caller accepts to deposit after ratio adjustment.
    pub amount1_min: Amount,
    /// Recipient of the minted liquidity units.
    pub to: AccountId,
    /// Latest execution time.
    pub deadline: Deadline,
}

/// Parameters of [`LiquidityPool::remove_liquidity`](super::LiquidityPool::remove_liquidity).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveLiquidityRequest {
    /// Units to burn from the caller's position.
    pub liquidity: Liquidity,
    /// Least of asset0 the caller accepts to receive.
    pub amount0_min: Amount,
    /// Least of asset1 the caller accepts to receive.
    pub amount1_min: Amount,
    /// Recipient of the withdrawn assets.
    pub to: AccountId,
    /// Latest execution time.
    pub deadline: Deadline,
}

/// Parameters of [`LiquidityPool::swap`](super::LiquidityPool::swap).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapRequest {
    /// Exact amount of the input asset to sell.
    pub amount_in: Amount,
    /// Least amount of the output asset the caller accepts.
    pub amount_out_min: Amount,
    /// `true` to sell asset0 for asset1, `false` for the reverse.
    pub asset_in_is_asset0: bool,
    /// Recipient of the output.
    pub to: AccountId,
    /// Latest execution time.
    pub deadline: Deadline,
}
