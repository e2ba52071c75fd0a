//! Rounding helpers for integer division.
//!
//! [`div_round`] performs 256-bit division with an explicit [`Rounding`]
//! direction. It is the building block behind
//! [`Amount::checked_div`](crate::domain::Amount::checked_div).
//!
//! # Convention
//!
//! **Always round against the user** (pool-favourable):
//!
//! | Quantity | Direction |
//! |----------|-----------|
//! | Swap output, withdrawn amount, minted units | [`Rounding::Down`] |
//! | Required swap input | [`Rounding::Up`] |
//!
//! # Examples
//!
//! ```
//! use alloy_primitives::U256;
//! use hydra_pair::domain::Rounding;
//! use hydra_pair::math::div_round;
//!
//! let ten = U256::from(10u64);
//! let three = U256::from(3u64);
//! assert_eq!(div_round(ten, three, Rounding::Down), Some(U256::from(3u64)));
//! assert_eq!(div_round(ten, three, Rounding::Up), Some(U256::from(4u64)));
//! assert_eq!(div_round(ten, U256::ZERO, Rounding::Down), None);
//! ```

use alloy_primitives::U256;

use crate::domain::Rounding;

/// Integer division of 256-bit values with explicit rounding direction.
///
/// Returns [`None`] if `denominator` is zero. Ceiling division is computed as
/// `floor + (remainder != 0)` so it never overflows.
#[must_use]
pub fn div_round(numerator: U256, denominator: U256, rounding: Rounding) -> Option<U256> {
    if denominator.is_zero() {
        return None;
    }
    let q = numerator / denominator;
    match rounding {
        Rounding::Down => Some(q),
        Rounding::Up => {
            let r = numerator % denominator;
            if r.is_zero() {
                Some(q)
            } else {
                // q < numerator whenever r != 0, so q + 1 cannot overflow.
                Some(q + U256::from(1u64))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u(v: u64) -> U256 {
        U256::from(v)
    }

    #[test]
    fn div_by_zero_returns_none() {
        assert_eq!(div_round(u(100), U256::ZERO, Rounding::Down), None);
        assert_eq!(div_round(U256::ZERO, U256::ZERO, Rounding::Up), None);
    }

    #[test]
    fn zero_numerator() {
        assert_eq!(div_round(U256::ZERO, u(5), Rounding::Down), Some(U256::ZERO));
        assert_eq!(div_round(U256::ZERO, u(5), Rounding::Up), Some(U256::ZERO));
    }

    #[test]
    fn exact_division_agrees() {
        assert_eq!(div_round(u(100), u(10), Rounding::Down), Some(u(10)));
        assert_eq!(div_round(u(100), u(10), Rounding::Up), Some(u(10)));
    }

    #[test]
    fn remainder_directions() {
        assert_eq!(div_round(u(9), u(10), Rounding::Down), Some(U256::ZERO));
        assert_eq!(div_round(u(9), u(10), Rounding::Up), Some(u(1)));
    }

    #[test]
    fn max_values() {
        assert_eq!(div_round(U256::MAX, u(1), Rounding::Up), Some(U256::MAX));
        assert_eq!(div_round(U256::MAX, U256::MAX, Rounding::Up), Some(u(1)));
        let half = U256::MAX / u(2);
        assert_eq!(div_round(U256::MAX, half, Rounding::Down), Some(u(2)));
        assert_eq!(div_round(U256::MAX, half, Rounding::Up), Some(u(3)));
    }
}
