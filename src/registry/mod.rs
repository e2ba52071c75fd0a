//! Pool registry.
//!
//! [`PoolRegistry`] is the single entry point for creating pools: it maps
//! each canonical [`AssetPair`](crate::domain::AssetPair) to one shared
//! [`LiquidityPool`](crate::pools::LiquidityPool).

mod pool_registry;

pub use pool_registry::PoolRegistry;
