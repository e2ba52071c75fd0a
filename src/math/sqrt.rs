//! Integer square root.

use alloy_primitives::U256;

/// Floor of the square root of `n`.
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use hydra_pair::math::isqrt;
///
/// assert_eq!(isqrt(U256::from(100_000_000u64)), U256::from(10_000u64));
/// assert_eq!(isqrt(U256::from(99u64)), U256::from(9u64));
/// ```
#[must_use]
pub fn isqrt(n: U256) -> U256 {
    n.root(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u(v: u64) -> U256 {
        U256::from(v)
    }

    #[test]
    fn small_values() {
        assert_eq!(isqrt(U256::ZERO), U256::ZERO);
        assert_eq!(isqrt(u(1)), u(1));
        assert_eq!(isqrt(u(3)), u(1));
        assert_eq!(isqrt(u(4)), u(2));
        assert_eq!(isqrt(u(8)), u(2));
        assert_eq!(isqrt(u(9)), u(3));
    }

    #[test]
    fn perfect_squares() {
        assert_eq!(isqrt(u(10_000 * 10_000)), u(10_000));
        assert_eq!(isqrt(u(1_000_000_000_000)), u(1_000_000));
    }

    #[test]
    fn floors_non_squares() {
        // 1_000 * 4_000 = 4_000_000 = 2_000^2; one less floors to 1_999
        assert_eq!(isqrt(u(3_999_999)), u(1_999));
    }

    #[test]
    fn full_width() {
        let r = isqrt(U256::MAX);
        // (2^128 - 1)^2 <= MAX < (2^128)^2
        assert_eq!(r, U256::from(u128::MAX));
    }
}
