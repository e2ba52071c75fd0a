//! Pure constant-product formulas.
//!
//! These functions hold no state; the pool and the router both call them,
//! the pool to execute and the router to plan multi-hop routes.
//!
//! With fee `f` in basis points and `m = 10_000 - f`:
//!
//! ```text
//! amount_out = floor(amount_in·m·r_out / (r_in·10_000 + amount_in·m))
//! amount_in  = floor(r_in·amount_out·10_000 / ((r_out − amount_out)·m)) + 1
//! quote      = floor(amount_a·r_b / r_a)
//! ```

use crate::domain::{Amount, FeeTier, Rounding, BPS_DENOMINATOR};
use crate::error::AmmError;

use super::CheckedArithmetic;

/// Largest reserve a pool may hold, `2^112 - 1`.
///
/// With both reserves at or below this bound, every product formed here
/// (at most `reserve · reserve · 10_000`) fits in 256 bits.
pub const MAX_RESERVE: Amount = Amount::new(u128::MAX >> 16);

/// Computes `a * b / denominator` with explicit rounding.
///
/// # Errors
///
/// - [`AmmError::Overflow`] if `a * b` exceeds 256 bits.
/// - [`AmmError::DivisionByZero`] if `denominator` is zero.
pub fn mul_div(
    a: Amount,
    b: Amount,
    denominator: Amount,
    rounding: Rounding,
) -> Result<Amount, AmmError> {
    a.safe_mul(&b)?.safe_div(&denominator, rounding)
}

/// Amount of asset B equivalent to `amount_a` at the current reserve ratio.
///
/// # Errors
///
/// - [`AmmError::InsufficientAmount`] if `amount_a` is zero.
/// - [`AmmError::InsufficientLiquidity`] if either reserve is zero.
pub fn quote(amount_a: Amount, reserve_a: Amount, reserve_b: Amount) -> Result<Amount, AmmError> {
    if amount_a.is_zero() {
        return Err(AmmError::InsufficientAmount("quote amount is zero"));
    }
    if reserve_a.is_zero() || reserve_b.is_zero() {
        return Err(AmmError::InsufficientLiquidity);
    }
    mul_div(amount_a, reserve_b, reserve_a, Rounding::Down)
}

/// Output of an exact-in swap against `(reserve_in, reserve_out)`.
///
/// Floors in favour of the pool.
///
/// # Errors
///
/// - [`AmmError::InsufficientInputAmount`] if `amount_in` is zero.
/// - [`AmmError::InsufficientLiquidity`] if either reserve is zero.
/// - [`AmmError::Overflow`] on arithmetic overflow.
///
/// # Examples
///
/// ```
/// use hydra_pair::domain::{Amount, FeeTier};
/// use hydra_pair::math::amount_out;
///
/// let out = amount_out(
///     Amount::new(2_000),
///     Amount::new(10_000),
///     Amount::new(10_000),
///     FeeTier::TIER_0_30_PERCENT,
/// );
/// assert_eq!(out, Ok(Amount::new(1_662)));
/// ```
pub fn amount_out(
    amount_in: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
    fee: FeeTier,
) -> Result<Amount, AmmError> {
    if amount_in.is_zero() {
        return Err(AmmError::InsufficientInputAmount);
    }
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(AmmError::InsufficientLiquidity);
    }
    let multiplier = Amount::from_u256(fee.input_multiplier().as_u256());
    let in_with_fee = amount_in.safe_mul(&multiplier)?;
    let numerator = in_with_fee.safe_mul(&reserve_out)?;
    let denominator = reserve_in
        .safe_mul(&Amount::new(u128::from(BPS_DENOMINATOR)))?
        .safe_add(&in_with_fee)?;
    numerator.safe_div(&denominator, Rounding::Down)
}

/// Input required for an exact-out swap of `amount_out`.
///
/// Rounds up so that swapping the returned input yields at least
/// `amount_out`.
///
/// # Errors
///
/// - [`AmmError::InsufficientOutputAmount`] if `amount_out` is zero.
/// - [`AmmError::InsufficientLiquidity`] if either reserve is zero or
///   `amount_out` would drain the output reserve.
/// - [`AmmError::DivisionByZero`] for a 100% fee.
pub fn amount_in(
    amount_out: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
    fee: FeeTier,
) -> Result<Amount, AmmError> {
    if amount_out.is_zero() {
        return Err(AmmError::InsufficientOutputAmount);
    }
    if reserve_in.is_zero() || reserve_out.is_zero() || amount_out >= reserve_out {
        return Err(AmmError::InsufficientLiquidity);
    }
    let multiplier = Amount::from_u256(fee.input_multiplier().as_u256());
    let numerator = reserve_in
        .safe_mul(&amount_out)?
        .safe_mul(&Amount::new(u128::from(BPS_DENOMINATOR)))?;
    let denominator = reserve_out.safe_sub(&amount_out)?.safe_mul(&multiplier)?;
    numerator
        .safe_div(&denominator, Rounding::Down)?
        .safe_add(&Amount::new(1))
}
