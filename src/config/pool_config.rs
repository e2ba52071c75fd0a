//! Protocol parameters applied to every pool.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::{BasisPoints, FeeTier, Liquidity};
use crate::error::AmmError;

/// Liquidity units locked forever by the first deposit into a pool.
pub const DEFAULT_MINIMUM_LIQUIDITY: u128 = 1_000;

/// Default upper bound on waiting for a pool's write lock.
pub const DEFAULT_LOCK_TIMEOUT: Duration = Duration::from_secs(5);

/// Protocol parameters of a constant-product pool.
///
/// | Field | Default | Meaning |
/// |-------|---------|---------|
/// | `fee` | 30 bp | charged on swap input, stays in the pool |
/// | `minimum_liquidity` | 1 000 units | locked by the first deposit |
/// | `lock_timeout` | 5 s | bounded wait for exclusive access |
///
/// # Validation
///
/// - The fee must be strictly below 100%.
/// - The lock timeout must be non-zero.
///
/// Deserialization goes through the same checks, so a config loaded from
/// JSON or TOML is rejected rather than handed to a registry.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use hydra_pair::config::PoolConfig;
/// use hydra_pair::domain::{FeeTier, Liquidity};
///
/// let cfg = PoolConfig::new(
///     FeeTier::TIER_0_05_PERCENT,
///     Liquidity::new(1_000),
///     Duration::from_millis(250),
/// )
/// .expect("valid config");
/// assert_eq!(cfg.fee(), FeeTier::TIER_0_05_PERCENT);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPoolConfig")]
pub struct PoolConfig {
    fee: FeeTier,
    minimum_liquidity: Liquidity,
    #[serde(serialize_with = "duration_millis::serialize")]
    lock_timeout: Duration,
}

/// Wire form of [`PoolConfig`] before validation.
#[derive(Deserialize)]
struct RawPoolConfig {
    fee: FeeTier,
    minimum_liquidity: Liquidity,
    #[serde(with = "duration_millis")]
    lock_timeout: Duration,
}

impl TryFrom<RawPoolConfig> for PoolConfig {
    type Error = AmmError;

    fn try_from(raw: RawPoolConfig) -> Result<Self, Self::Error> {
        Self::new(raw.fee, raw.minimum_liquidity, raw.lock_timeout)
    }
}

impl PoolConfig {
    /// Creates a validated `PoolConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if any parameter is out
    /// of range.
    pub fn new(
        fee: FeeTier,
        minimum_liquidity: Liquidity,
        lock_timeout: Duration,
    ) -> Result<Self, AmmError> {
        let config = Self {
            fee,
            minimum_liquidity,
            lock_timeout,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if any parameter is out
    /// of range.
    pub fn validate(&self) -> Result<(), AmmError> {
        if self.fee.basis_points() >= BasisPoints::MAX_PERCENT {
            return Err(AmmError::InvalidConfiguration(
                "fee must be below 100%",
            ));
        }
        if self.lock_timeout.is_zero() {
            return Err(AmmError::InvalidConfiguration(
                "lock timeout must be non-zero",
            ));
        }
        Ok(())
    }

    /// Swap fee.
    #[must_use]
    pub const fn fee(&self) -> FeeTier {
        self.fee
    }

    /// Units permanently locked by the first deposit.
    #[must_use]
    pub const fn minimum_liquidity(&self) -> Liquidity {
        self.minimum_liquidity
    }

    /// Upper bound on waiting for exclusive access to a pool.
    #[must_use]
    pub const fn lock_timeout(&self) -> Duration {
        self.lock_timeout
    }

    /// Returns a copy with a different fee.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if the fee is 100% or more.
    pub fn with_fee(self, fee: FeeTier) -> Result<Self, AmmError> {
        Self::new(fee, self.minimum_liquidity, self.lock_timeout)
    }

    /// Returns a copy with a different locked minimum.
    #[must_use]
    pub const fn with_minimum_liquidity(mut self, minimum_liquidity: Liquidity) -> Self {
        self.minimum_liquidity = minimum_liquidity;
        self
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            fee: FeeTier::TIER_0_30_PERCENT,
            minimum_liquidity: Liquidity::new(DEFAULT_MINIMUM_LIQUIDITY),
            lock_timeout: DEFAULT_LOCK_TIMEOUT,
        }
    }
}

mod duration_millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}
