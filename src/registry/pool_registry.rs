//! Canonical pair → pool map.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::info;

use crate::config::PoolConfig;
use crate::domain::{AssetId, AssetPair};
use crate::error::AmmError;
use crate::pools::LiquidityPool;
use crate::traits::{Clock, SystemClock};

#[derive(Default)]
struct Pools {
    by_pair: HashMap<AssetPair, Arc<LiquidityPool>>,
    created: Vec<Arc<LiquidityPool>>,
}

/// Owner of every pool, at most one per unordered asset pair.
///
/// `PoolRegistry` canonicalises the two assets, so `(a, b)` and `(b, a)`
/// resolve to the same pool. Every pool it creates shares the registry's
/// [`PoolConfig`] and [`Clock`].
///
/// # Thread Safety
///
/// The map sits behind a [`RwLock`]; lookups take the read side and only
/// pool creation takes the write side. Pools are handed out as
/// [`Arc<LiquidityPool>`] and remain usable while other pairs are created.
///
/// # Example
///
/// ```rust
/// use hydra_pair::config::PoolConfig;
/// use hydra_pair::domain::AssetId;
/// use hydra_pair::registry::PoolRegistry;
///
/// let usdc = AssetId::from_bytes([1u8; 32]);
/// let weth = AssetId::from_bytes([2u8; 32]);
///
/// let registry = PoolRegistry::new(PoolConfig::default());
/// let pool = registry.get_or_create_pool(weth, usdc).expect("distinct assets");
/// assert_eq!(pool.pair().asset0(), usdc);
///
/// let same = registry.get_or_create_pool(usdc, weth).expect("distinct assets");
/// assert!(std::sync::Arc::ptr_eq(&pool, &same));
/// assert_eq!(registry.len(), 1);
/// ```
pub struct PoolRegistry {
    config: PoolConfig,
    clock: Arc<dyn Clock>,
    pools: RwLock<Pools>,
}

impl PoolRegistry {
    /// Creates an empty registry reading time from the system clock.
    #[must_use]
    pub fn new(config: PoolConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Creates an empty registry with an explicit time source.
    #[must_use]
    pub fn with_clock(config: PoolConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            config,
            clock,
            pools: RwLock::new(Pools::default()),
        }
    }

    /// Returns the pool for `(asset_a, asset_b)`, creating an empty one on
    /// first use.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::IdenticalAssets`] if `asset_a == asset_b`.
    pub fn get_or_create_pool(
        &self,
        asset_a: AssetId,
        asset_b: AssetId,
    ) -> Result<Arc<LiquidityPool>, AmmError> {
        let pair = AssetPair::new(asset_a, asset_b)?;
        if let Some(pool) = self.pools.read().by_pair.get(&pair) {
            return Ok(Arc::clone(pool));
        }

        let mut pools = self.pools.write();
        // Another thread may have created it between the two locks.
        if let Some(pool) = pools.by_pair.get(&pair) {
            return Ok(Arc::clone(pool));
        }
        let pool = Arc::new(LiquidityPool::new(pair, self.config, Arc::clone(&self.clock)));
        pools.by_pair.insert(pair, Arc::clone(&pool));
        pools.created.push(Arc::clone(&pool));
        info!(
            %pair,
            account = %pool.account(),
            index = pools.created.len() - 1,
            "pool created"
        );
        Ok(pool)
    }

    /// Looks up an existing pool.
    ///
    /// Returns `None` for unknown pairs and for `asset_a == asset_b`.
    pub fn get_pool(&self, asset_a: AssetId, asset_b: AssetId) -> Option<Arc<LiquidityPool>> {
        let pair = AssetPair::new(asset_a, asset_b).ok()?;
        self.pools.read().by_pair.get(&pair).cloned()
    }

    /// Looks up an existing pool, failing if there is none.
    ///
    /// # Errors
    ///
    /// - [`AmmError::IdenticalAssets`] if `asset_a == asset_b`.
    /// - [`AmmError::PairNotFound`] if no pool exists for the pair.
    pub fn pool_for(
        &self,
        asset_a: AssetId,
        asset_b: AssetId,
    ) -> Result<Arc<LiquidityPool>, AmmError> {
        let pair = AssetPair::new(asset_a, asset_b)?;
        self.pools
            .read()
            .by_pair
            .get(&pair)
            .cloned()
            .ok_or(AmmError::PairNotFound)
    }

    /// Number of pools created.
    pub fn len(&self) -> usize {
        self.pools.read().created.len()
    }

    /// `true` if no pool has been created yet.
    pub fn is_empty(&self) -> bool {
        self.pools.read().created.is_empty()
    }

    /// Every pool, in creation order.
    pub fn pools(&self) -> Vec<Arc<LiquidityPool>> {
        self.pools.read().created.clone()
    }

    /// Parameters applied to every pool.
    pub const fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Time source shared by every pool.
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }
}

impl Default for PoolRegistry {
    fn default() -> Self {
        Self::new(PoolConfig::default())
    }
}

impl fmt::Debug for PoolRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PoolRegistry")
            .field("config", &self.config)
            .field("pools", &self.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{Liquidity, Timestamp};
    use crate::traits::ManualClock;

    fn asset(b: u8) -> AssetId {
        AssetId::from_bytes([b; 32])
    }

    #[test]
    fn creates_once_per_unordered_pair() {
        let registry = PoolRegistry::default();
        let Ok(first) = registry.get_or_create_pool(asset(2), asset(1)) else {
            panic!("expected Ok");
        };
        let Ok(second) = registry.get_or_create_pool(asset(1), asset(2)) else {
            panic!("expected Ok");
        };
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(registry.len(), 1);
        assert_eq!(first.pair().asset0(), asset(1));
        assert_eq!(first.total_liquidity(), Liquidity::ZERO);
    }

    #[test]
    fn identical_assets_rejected() {
        let registry = PoolRegistry::default();
        let Err(AmmError::IdenticalAssets) = registry.get_or_create_pool(asset(1), asset(1))
        else {
            panic!("expected IdenticalAssets");
        };
        assert!(registry.is_empty());
        assert!(registry.get_pool(asset(1), asset(1)).is_none());
    }

    #[test]
    fn lookups() {
        let registry = PoolRegistry::default();
        assert!(registry.get_pool(asset(1), asset(2)).is_none());
        let Err(AmmError::PairNotFound) = registry.pool_for(asset(1), asset(2)) else {
            panic!("expected PairNotFound");
        };
        let Ok(created) = registry.get_or_create_pool(asset(1), asset(2)) else {
            panic!("expected Ok");
        };
        let Ok(found) = registry.pool_for(asset(2), asset(1)) else {
            panic!("expected Ok");
        };
        assert!(Arc::ptr_eq(&created, &found));
    }

    #[test]
    fn pools_listed_in_creation_order() {
        let registry = PoolRegistry::default();
        for (a, b) in [(3, 4), (1, 2), (4, 3), (2, 3)] {
            let Ok(_) = registry.get_or_create_pool(asset(a), asset(b)) else {
                panic!("expected Ok");
            };
        }
        let pairs: Vec<AssetPair> = registry.pools().iter().map(|p| p.pair()).collect();
        let expected: Vec<AssetPair> = [(3, 4), (1, 2), (2, 3)]
            .into_iter()
            .filter_map(|(a, b)| AssetPair::new(asset(a), asset(b)).ok())
            .collect();
        assert_eq!(pairs, expected);
    }

    #[test]
    fn pools_share_config_and_clock() {
        let Ok(config) = PoolConfig::default().with_fee(crate::domain::FeeTier::TIER_1_00_PERCENT)
        else {
            panic!("valid config");
        };
        let clock = Arc::new(ManualClock::new(Timestamp::from_secs(42)));
        let registry = PoolRegistry::with_clock(config, clock.clone());
        let Ok(pool) = registry.get_or_create_pool(asset(1), asset(2)) else {
            panic!("expected Ok");
        };
        assert_eq!(pool.config(), &config);
        clock.advance(8);
        assert_eq!(registry.clock().now(), Timestamp::from_secs(50));
    }

    #[test]
    fn concurrent_creation_yields_one_pool() {
        let registry = Arc::new(PoolRegistry::default());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || registry.get_or_create_pool(asset(1), asset(2)))
            })
            .collect();
        let mut pools = Vec::new();
        for handle in handles {
            let Ok(Ok(pool)) = handle.join() else {
                panic!("thread failed");
            };
            pools.push(pool);
        }
        assert_eq!(registry.len(), 1);
        assert!(pools.iter().all(|p| Arc::ptr_eq(p, &pools[0])));
    }
}
