//! The constant-product pool and the types that flow through it.
//!
//! | Item | Role |
//! |------|------|
//! | [`LiquidityPool`] | reserves, liquidity units, add/remove/swap |
//! | [`Reserves`] | `(reserve0, reserve1)` snapshot |
//! | [`AddLiquidityRequest`], [`RemoveLiquidityRequest`], [`SwapRequest`] | caller parameters |
//! | [`LiquidityAdded`], [`LiquidityRemoved`], [`SwapOutcome`] | operation results |
//! | [`LiquidityPosition`] | units held by one owner |

mod liquidity_pool;
mod outcome;
mod request;
pub(crate) mod state;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub(crate) use liquidity_pool::ensure_recipient;
pub use liquidity_pool::LiquidityPool;
pub use outcome::{LiquidityAdded, LiquidityPosition, LiquidityRemoved, SwapOutcome};
pub use request::{AddLiquidityRequest, RemoveLiquidityRequest, SwapRequest};
pub use state::Reserves;
