//! Pool configuration.
//!
//! [`PoolConfig`] carries the protocol parameters (fee, locked minimum
//! liquidity, lock timeout) that a [`PoolRegistry`](crate::registry::PoolRegistry)
//! applies to every pool it creates.

mod pool_config;

pub use pool_config::{PoolConfig, DEFAULT_LOCK_TIMEOUT, DEFAULT_MINIMUM_LIQUIDITY};
