//! Fixed-point math for reserve and fee computation.
//!
//! Everything here operates on 256-bit unsigned integers and is
//! overflow-checked: [`CheckedArithmetic`] for chained domain arithmetic,
//! [`div_round`] and [`mul_div`] for rounding-aware division, [`isqrt`] for
//! first-deposit minting, and the pure pair formulas [`amount_out`],
//! [`amount_in`] and [`quote`].

mod checked;
mod pair_math;
mod rounding;
mod sqrt;

pub use checked::CheckedArithmetic;
pub use pair_math::{amount_in, amount_out, mul_div, quote, MAX_RESERVE};
pub use rounding::div_round;
pub use sqrt::isqrt;
