//! Raw asset amount with checked 256-bit arithmetic.

use core::fmt;

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use super::Rounding;

/// A raw asset amount in the smallest unit (wei, satoshi, or equivalent).
///
/// Backed by a 256-bit unsigned integer so that the product of two `u128`
/// sized reserves never overflows. Arithmetic methods are checked: they
/// return `None` on overflow, underflow, or division by zero instead of
/// panicking.
///
/// # Examples
///
/// ```
/// use hydra_pair::domain::{Amount, Rounding};
///
/// let a = Amount::new(100);
/// let b = Amount::new(200);
/// assert_eq!(a.checked_add(&b), Some(Amount::new(300)));
/// assert_eq!(b.checked_sub(&a), Some(Amount::new(100)));
/// assert_eq!(b.checked_div(&Amount::new(3), Rounding::Up), Some(Amount::new(67)));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
#[must_use]
pub struct Amount(U256);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(U256::ZERO);

    /// Maximum representable amount.
    pub const MAX: Self = Self(U256::MAX);

    /// Creates a new `Amount` from a `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(U256::from_limbs([value as u64, (value >> 64) as u64, 0, 0]))
    }

    /// Wraps a full-width 256-bit value.
    pub const fn from_u256(value: U256) -> Self {
        Self(value)
    }

    /// Returns the underlying 256-bit value.
    #[must_use]
    pub const fn get(&self) -> U256 {
        self.0
    }

    /// Returns the value as `u128`, or `None` if it does not fit.
    #[must_use]
    pub fn to_u128(&self) -> Option<u128> {
        u128::try_from(self.0).ok()
    }

    /// Returns `true` if the amount is zero.
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

    /// Checked multiplication. Returns `None` on overflow.
    #[must_use]
    pub fn checked_mul(&self, other: &Self) -> Option<Self> {
        self.0.checked_mul(other.0).map(Self)
    }

    /// Checked division with explicit rounding direction.
    ///
    /// Returns `None` if `divisor` is zero.
    #[must_use]
    pub fn checked_div(&self, divisor: &Self, rounding: Rounding) -> Option<Self> {
        crate::math::div_round(self.0, divisor.0, rounding).map(Self)
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self::new(value)
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self::new(u128::from(value))
    }
}

impl From<U256> for Amount {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn new_and_get() {
        assert_eq!(Amount::new(42).get(), U256::from(42u64));
        assert_eq!(Amount::new(u128::MAX).to_u128(), Some(u128::MAX));
    }

    #[test]
    fn wide_values_do_not_fit_u128() {
        let wide = Amount::new(u128::MAX).checked_add(&Amount::new(1));
        let Some(wide) = wide else {
            panic!("256-bit addition must not overflow here");
        };
        assert_eq!(wide.to_u128(), None);
    }

    #[test]
    fn constants() {
        assert!(Amount::ZERO.is_zero());
        assert_eq!(Amount::MAX.get(), U256::MAX);
        assert_eq!(Amount::default(), Amount::ZERO);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Amount::new(1_000_000)), "1000000");
    }

    #[test]
    fn ordering() {
        assert!(Amount::new(1) < Amount::new(2));
        assert!(Amount::new(u128::MAX) < Amount::MAX);
    }

    #[test]
    fn reserve_product_fits() {
        let r = Amount::new(u128::MAX);
        assert!(r.checked_mul(&r).is_some());
    }

    #[test]
    fn add_overflow() {
        assert_eq!(Amount::MAX.checked_add(&Amount::new(1)), None);
    }

    #[test]
    fn sub_underflow() {
        assert_eq!(Amount::new(1).checked_sub(&Amount::new(2)), None);
    }

    #[test]
    fn mul_overflow() {
        assert_eq!(Amount::MAX.checked_mul(&Amount::new(2)), None);
    }

    #[test]
    fn div_rounding() {
        let a = Amount::new(10);
        let d = Amount::new(3);
        assert_eq!(a.checked_div(&d, Rounding::Down), Some(Amount::new(3)));
        assert_eq!(a.checked_div(&d, Rounding::Up), Some(Amount::new(4)));
        assert_eq!(a.checked_div(&Amount::ZERO, Rounding::Down), None);
    }

    #[test]
    fn div_max_round_up() {
        let Some(ceil) = Amount::MAX.checked_div(&Amount::new(2), Rounding::Up) else {
            panic!("expected Some");
        };
        assert_eq!(ceil.get(), U256::MAX / U256::from(2u64) + U256::from(1u64));
    }

    #[test]
    fn serde_is_transparent() {
        let Ok(json) = serde_json::to_string(&Amount::new(255)) else {
            panic!("serialize");
        };
        let Ok(back) = serde_json::from_str::<Amount>(&json) else {
            panic!("deserialize");
        };
        assert_eq!(back, Amount::new(255));
    }
}
