//! Reserve and liquidity-unit accounting of one pool.
//!
//! Every mutation is split into a *plan* (pure, fallible, computed against
//! the current state) and an *apply* (infallible assignment). The pool
//! settles asset transfers between the two steps, so a failed transfer
//! leaves the state untouched.

use std::collections::HashMap;

use crate::config::PoolConfig;
use crate::domain::{AccountId, Amount, FeeTier, Liquidity, Rounding};
use crate::error::AmmError;
use crate::math::{self, CheckedArithmetic};

use super::request::{AddLiquidityRequest, RemoveLiquidityRequest};

/// The two reserves of a pool, asset0 first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Reserves {
    reserve0: Amount,
    reserve1: Amount,
}

impl Reserves {
    /// Creates a reserve pair.
    pub const fn new(reserve0: Amount, reserve1: Amount) -> Self {
        Self { reserve0, reserve1 }
    }

    /// Reserve of asset0.
    pub const fn reserve0(&self) -> Amount {
        self.reserve0
    }

    /// Reserve of asset1.
    pub const fn reserve1(&self) -> Amount {
        self.reserve1
    }

    /// `true` when the pool holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reserve0.is_zero() && self.reserve1.is_zero()
    }

    /// The constant-product invariant `reserve0 * reserve1`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the product exceeds 256 bits.
    pub fn product(&self) -> Result<Amount, AmmError> {
        self.reserve0.safe_mul(&self.reserve1)
    }

    /// `(reserve_in, reserve_out)` for a swap direction.
    pub(crate) const fn oriented(&self, zero_for_one: bool) -> (Amount, Amount) {
        if zero_for_one {
            (self.reserve0, self.reserve1)
        } else {
            (self.reserve1, self.reserve0)
        }
    }

    pub(crate) const fn from_oriented(zero_for_one: bool, r_in: Amount, r_out: Amount) -> Self {
        if zero_for_one {
            Self::new(r_in, r_out)
        } else {
            Self::new(r_out, r_in)
        }
    }
}

/// Staged result of an add.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AddPlan {
    pub(crate) amount0: Amount,
    pub(crate) amount1: Amount,
    pub(crate) minted: Liquidity,
    reserves_after: Reserves,
    total_after: Liquidity,
    locked_after: Liquidity,
    recipient_after: Liquidity,
}

/// Staged result of a remove.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RemovePlan {
    pub(crate) amount0: Amount,
    pub(crate) amount1: Amount,
    pub(crate) burned: Liquidity,
    reserves_after: Reserves,
    total_after: Liquidity,
    owner_after: Liquidity,
}

/// Staged result of a swap.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SwapPlan {
    pub(crate) amount_in: Amount,
    pub(crate) amount_out: Amount,
    pub(crate) fee: Amount,
    pub(crate) reserves_after: Reserves,
}

/// Mutable state of a pool, guarded by the pool's lock.
///
/// Invariants:
/// - `reserve0 == 0 ⇔ reserve1 == 0 ⇔ total == 0`
/// - `total == locked + Σ positions`
#[derive(Debug, Clone, Default)]
pub(crate) struct PoolState {
    reserves: Reserves,
    total: Liquidity,
    locked: Liquidity,
    positions: HashMap<AccountId, Liquidity>,
}

/// `amount * total / reserve`, floored, as liquidity units.
fn proportional_units(
    amount: Amount,
    total: Liquidity,
    reserve: Amount,
) -> Result<Liquidity, AmmError> {
    let scaled = total
        .checked_mul_amount(&amount)
        .ok_or(AmmError::Overflow("minted units numerator overflow"))?;
    let units = scaled.safe_div(&reserve, Rounding::Down)?;
    Ok(Liquidity::from_u256(units.get()))
}

/// `units * reserve / total`, floored, as an asset amount.
fn proportional_amount(
    units: Liquidity,
    reserve: Amount,
    total: Liquidity,
) -> Result<Amount, AmmError> {
    units
        .checked_mul_amount(&reserve)
        .ok_or(AmmError::Overflow("withdrawal numerator overflow"))?
        .safe_div(&Amount::from_u256(total.get()), Rounding::Down)
}

/// `reserve + amount`, rejected when it would pass [`math::MAX_RESERVE`].
fn grow_reserve(reserve: Amount, amount: Amount) -> Result<Amount, AmmError> {
    let grown = reserve.safe_add(&amount)?;
    if grown > math::MAX_RESERVE {
        return Err(AmmError::Overflow("reserve above cap"));
    }
    Ok(grown)
}

impl PoolState {
    pub(crate) const fn reserves(&self) -> Reserves {
        self.reserves
    }

    pub(crate) const fn total(&self) -> Liquidity {
        self.total
    }

    pub(crate) const fn locked(&self) -> Liquidity {
        self.locked
    }

    pub(crate) fn liquidity_of(&self, owner: &AccountId) -> Liquidity {
        self.positions.get(owner).copied().unwrap_or_default()
    }

    pub(crate) fn positions(&self) -> impl Iterator<Item = (&AccountId, &Liquidity)> {
        self.positions.iter()
    }

    fn set_position(&mut self, owner: AccountId, units: Liquidity) {
        if units.is_zero() {
            self.positions.remove(&owner);
        } else {
            self.positions.insert(owner, units);
        }
    }

    /// Plans a deposit.
    pub(crate) fn plan_add(
        &self,
        request: &AddLiquidityRequest,
        config: &PoolConfig,
    ) -> Result<AddPlan, AmmError> {
        let (amount0, amount1, minted, locked_after) = if self.total.is_zero() {
            grow_reserve(self.reserves.reserve0, request.amount0_desired)?;
            grow_reserve(self.reserves.reserve1, request.amount1_desired)?;
            let product = request.amount0_desired.safe_mul(&request.amount1_desired)?;
            let root = Liquidity::from_u256(math::isqrt(product.get()));
            let minimum = config.minimum_liquidity();
            if root <= minimum {
                return Err(AmmError::InsufficientLiquidityMinted);
            }
            (
                request.amount0_desired,
                request.amount1_desired,
                root.safe_sub(&minimum)?,
                self.locked.safe_add(&minimum)?,
            )
        } else {
            let (amount0, amount1) = self.optimal_deposit(request)?;
            grow_reserve(self.reserves.reserve0, amount0)?;
            grow_reserve(self.reserves.reserve1, amount1)?;
            let by0 = proportional_units(amount0, self.total, self.reserves.reserve0)?;
            let by1 = proportional_units(amount1, self.total, self.reserves.reserve1)?;
            (amount0, amount1, by0.min(by1), self.locked)
        };

        if minted.is_zero() {
            return Err(AmmError::InsufficientLiquidityMinted);
        }

        let reserves_after = Reserves::new(
            grow_reserve(self.reserves.reserve0, amount0)?,
            grow_reserve(self.reserves.reserve1, amount1)?,
        );
        let total_after = self
            .total
            .safe_add(&minted)?
            .safe_add(&locked_after.safe_sub(&self.locked)?)?;
        let recipient_after = self.liquidity_of(&request.to).safe_add(&minted)?;

        Ok(AddPlan {
            amount0,
            amount1,
            minted,
            reserves_after,
            total_after,
            locked_after,
            recipient_after,
        })
    }

    /// Ratio-preserving deposit amounts for a non-empty pool.
    fn optimal_deposit(&self, request: &AddLiquidityRequest) -> Result<(Amount, Amount), AmmError> {
        let Reserves { reserve0, reserve1 } = self.reserves;
        let amount1_optimal = math::mul_div(
            request.amount0_desired,
            reserve1,
            reserve0,
            Rounding::Down,
        )?;
        if amount1_optimal <= request.amount1_desired {
            if amount1_optimal < request.amount1_min {
                return Err(AmmError::InsufficientAmount("asset1 amount below minimum"));
            }
            return Ok((request.amount0_desired, amount1_optimal));
        }

        let amount0_optimal = math::mul_div(
            request.amount1_desired,
            reserve0,
            reserve1,
            Rounding::Down,
        )?;
        // amount1_optimal > amount1_desired implies this by the reserve ratio.
        debug_assert!(amount0_optimal <= request.amount0_desired);
        if amount0_optimal < request.amount0_min {
            return Err(AmmError::InsufficientAmount("asset0 amount below minimum"));
        }
        Ok((amount0_optimal, request.amount1_desired))
    }

    pub(crate) fn apply_add(&mut self, plan: &AddPlan, to: AccountId) {
        self.reserves = plan.reserves_after;
        self.total = plan.total_after;
        self.locked = plan.locked_after;
        self.set_position(to, plan.recipient_after);
    }

    /// Plans a burn of `owner`'s units.
    pub(crate) fn plan_remove(
        &self,
        owner: &AccountId,
        request: &RemoveLiquidityRequest,
    ) -> Result<RemovePlan, AmmError> {
        let held = self.liquidity_of(owner);
        let owner_after = held
            .checked_sub(&request.liquidity)
            .ok_or(AmmError::InsufficientBalance)?;

        let amount0 = proportional_amount(request.liquidity, self.reserves.reserve0, self.total)?;
        let amount1 = proportional_amount(request.liquidity, self.reserves.reserve1, self.total)?;
        if amount0.is_zero() && amount1.is_zero() {
            return Err(AmmError::InsufficientLiquidityBurned);
        }
        if amount0 < request.amount0_min {
            return Err(AmmError::InsufficientAmount("asset0 amount below minimum"));
        }
        if amount1 < request.amount1_min {
            return Err(AmmError::InsufficientAmount("asset1 amount below minimum"));
        }

        Ok(RemovePlan {
            amount0,
            amount1,
            burned: request.liquidity,
            reserves_after: Reserves::new(
                self.reserves.reserve0.safe_sub(&amount0)?,
                self.reserves.reserve1.safe_sub(&amount1)?,
            ),
            total_after: self.total.safe_sub(&request.liquidity)?,
            owner_after,
        })
    }

    pub(crate) fn apply_remove(&mut self, plan: &RemovePlan, owner: AccountId) {
        self.reserves = plan.reserves_after;
        self.total = plan.total_after;
        self.set_position(owner, plan.owner_after);
    }

    /// Plans an exact-in swap.
    pub(crate) fn plan_swap(
        &self,
        amount_in: Amount,
        amount_out_min: Amount,
        zero_for_one: bool,
        fee: FeeTier,
    ) -> Result<SwapPlan, AmmError> {
        let (reserve_in, reserve_out) = self.reserves.oriented(zero_for_one);
        grow_reserve(reserve_in, amount_in)?;
        let amount_out = math::amount_out(amount_in, reserve_in, reserve_out, fee)?;
        if amount_out.is_zero() || amount_out < amount_out_min {
            return Err(AmmError::InsufficientOutputAmount);
        }
        self.stage_swap(amount_in, amount_out, zero_for_one, fee)
    }

    /// Plans a swap paying exactly `amount_out` for `amount_in`.
    ///
    /// Fails with [`AmmError::InsufficientOutputAmount`] when `amount_in`
    /// does not buy `amount_out` at the current reserves.
    pub(crate) fn plan_swap_to(
        &self,
        amount_in: Amount,
        amount_out: Amount,
        zero_for_one: bool,
        fee: FeeTier,
    ) -> Result<SwapPlan, AmmError> {
        let (reserve_in, reserve_out) = self.reserves.oriented(zero_for_one);
        grow_reserve(reserve_in, amount_in)?;
        let deliverable = math::amount_out(amount_in, reserve_in, reserve_out, fee)?;
        if amount_out.is_zero() || amount_out > deliverable {
            return Err(AmmError::InsufficientOutputAmount);
        }
        self.stage_swap(amount_in, amount_out, zero_for_one, fee)
    }

    /// Stages the reserves after a swap and re-verifies the constant-product
    /// invariant on them.
    ///
    /// # Panics
    ///
    /// Panics if the staged reserves have a smaller product than the current
    /// ones. Both callers bound `amount_out` by the fee-adjusted curve, which
    /// makes this unreachable.
    fn stage_swap(
        &self,
        amount_in: Amount,
        amount_out: Amount,
        zero_for_one: bool,
        fee: FeeTier,
    ) -> Result<SwapPlan, AmmError> {
        let (reserve_in, reserve_out) = self.reserves.oriented(zero_for_one);
        let reserves_after = Reserves::from_oriented(
            zero_for_one,
            grow_reserve(reserve_in, amount_in)?,
            reserve_out.safe_sub(&amount_out)?,
        );

        let k_before = self.reserves.product()?;
        let k_after = reserves_after.product()?;
        assert!(
            k_after >= k_before,
            "constant-product invariant violated: k {k_before} -> {k_after}"
        );

        Ok(SwapPlan {
            amount_in,
            amount_out,
            fee: fee.apply_to_amount(amount_in, Rounding::Up)?,
            reserves_after,
        })
    }

    pub(crate) fn apply_swap(&mut self, plan: &SwapPlan) {
        self.reserves = plan.reserves_after;
    }

    /// Restores reserves captured before a multi-pool operation.
    pub(crate) fn restore_reserves(&mut self, reserves: Reserves) {
        self.reserves = reserves;
    }

    /// Moves units between owners; totals are unchanged.
    pub(crate) fn transfer_units(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        units: Liquidity,
    ) -> Result<(), AmmError> {
        let from_after = self
            .liquidity_of(from)
            .checked_sub(&units)
            .ok_or(AmmError::InsufficientBalance)?;
        if from == to {
            return Ok(());
        }
        let to_after = self.liquidity_of(to).safe_add(&units)?;
        self.set_position(*from, from_after);
        self.set_position(*to, to_after);
        Ok(())
    }
}
