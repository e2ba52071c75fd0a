//! Pool-ownership units.

use core::fmt;

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use super::Amount;

/// Liquidity units: a divisible claim on a proportional share of a pool's
/// reserves.
///
/// Distinct from [`Amount`] because it counts shares of the pool rather
/// than quantities of an asset.
///
/// # Examples
///
/// ```
/// use hydra_pair::domain::Liquidity;
///
/// let a = Liquidity::new(1_000);
/// let b = Liquidity::new(2_000);
/// assert_eq!(a.checked_add(&b), Some(Liquidity::new(3_000)));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Liquidity(U256);

impl Liquidity {
    /// No liquidity.
    pub const ZERO: Self = Self(U256::ZERO);

    /// Creates a new `Liquidity` from a `u128` value.
    #[must_use]
    pub const fn new(value: u128) -> Self {
        Self(U256::from_limbs([value as u64, (value >> 64) as u64, 0, 0]))
    }

    /// Wraps a full-width 256-bit value.
    #[must_use]
    pub const fn from_u256(value: U256) -> Self {
        Self(value)
    }

    /// Returns the underlying 256-bit value.
    #[must_use]
    pub const fn get(&self) -> U256 {
        self.0
    }

    /// Returns `true` if the liquidity is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Scales an [`Amount`] by this liquidity value.
    ///
    /// Returns `None` on overflow.
    #[must_use]
    pub fn checked_mul_amount(&self, amount: &Amount) -> Option<Amount> {
        self.0.checked_mul(amount.get()).map(Amount::from_u256)
    }
}

impl fmt::Display for Liquidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
