//! Constant-product pair pool (Uniswap V2 style).
//!
//! The swap invariant is `x × y = k` where `x` and `y` are the reserves of
//! the two assets. The fee is taken from the input and stays in the pool,
//! so `k` only grows.
//!
//! # Swap Algorithm (asset0 → asset1)
//!
//! 1. `m = 10 000 − fee_bps`
//! 2. `amount_out = amount_in·m·reserve1 / (reserve0·10 000 + amount_in·m)`
//! 3. `reserve0 += amount_in` (fee included)
//! 4. `reserve1 -= amount_out`
//!
//! # Atomicity
//!
//! Every mutation runs under the pool's write lock in three steps: plan the
//! new state, settle the asset transfers through a journal, then apply the
//! plan. If any transfer fails the journal reverses the completed ones and
//! the pool state is never touched.

use std::fmt;
use std::sync::Arc;

use parking_lot::{RwLock, RwLockWriteGuard};
use tracing::{debug, info};

use crate::config::PoolConfig;
use crate::domain::{AccountId, Amount, AssetId, AssetPair, Liquidity};
use crate::error::AmmError;
use crate::ledger::Settlement;
use crate::math;
use crate::traits::{AssetLedger, Clock};

use super::outcome::{LiquidityAdded, LiquidityPosition, LiquidityRemoved, SwapOutcome};
use super::request::{AddLiquidityRequest, RemoveLiquidityRequest, SwapRequest};
use super::state::PoolState;

/// Fails with [`AmmError::InvalidRecipient`] for the zero account.
pub(crate) fn ensure_recipient(to: &AccountId) -> Result<(), AmmError> {
    if to.is_zero() {
        return Err(AmmError::InvalidRecipient);
    }
    Ok(())
}

/// A constant-product liquidity pool for one canonical [`AssetPair`].
///
/// Pools are created by a [`PoolRegistry`](crate::registry::PoolRegistry)
/// and shared behind an [`Arc`]. All methods take `&self`; state lives
/// behind a [`RwLock`] so readers never observe a half-applied mutation.
///
/// The pool keeps no asset balances of its own. Its [`account`](Self::account)
/// is the custody account on the [`AssetLedger`]: callers approve it before
/// adding liquidity or swapping.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use hydra_pair::config::PoolConfig;
/// use hydra_pair::domain::{AccountId, Amount, AssetId, AssetPair, Deadline};
/// use hydra_pair::ledger::InMemoryLedger;
/// use hydra_pair::pools::{AddLiquidityRequest, LiquidityPool, SwapRequest};
/// use hydra_pair::traits::{AssetLedger, SystemClock};
///
/// let usdc = AssetId::from_bytes([1u8; 32]);
/// let weth = AssetId::from_bytes([2u8; 32]);
/// let alice = AccountId::from_bytes([0xa1; 32]);
///
/// let pair = AssetPair::new(usdc, weth).expect("distinct");
/// let pool = LiquidityPool::new(pair, PoolConfig::default(), Arc::new(SystemClock));
///
/// let mut ledger = InMemoryLedger::new();
/// for asset in [usdc, weth] {
///     ledger.mint(&asset, &alice, Amount::new(20_000)).expect("mint");
///     ledger.approve(&asset, &alice, &pool.account(), Amount::MAX).expect("approve");
/// }
///
/// pool.add_liquidity(&mut ledger, &alice, &AddLiquidityRequest {
///     amount0_desired: Amount::new(10_000),
///     amount1_desired: Amount::new(10_000),
///     amount0_min: Amount::ZERO,
///     amount1_min: Amount::ZERO,
///     to: alice,
///     deadline: Deadline::NEVER,
/// }).expect("add");
///
/// let outcome = pool.swap(&mut ledger, &alice, &SwapRequest {
///     amount_in: Amount::new(2_000),
///     amount_out_min: Amount::ZERO,
///     asset_in_is_asset0: true,
///     to: alice,
///     deadline: Deadline::NEVER,
/// }).expect("swap");
/// assert_eq!(outcome.amount_out, Amount::new(1_662));
/// ```
pub struct LiquidityPool {
    pair: AssetPair,
    account: AccountId,
    config: PoolConfig,
    clock: Arc<dyn Clock>,
    state: RwLock<PoolState>,
}

impl LiquidityPool {
    /// Creates an empty pool.
    #[must_use]
    pub fn new(pair: AssetPair, config: PoolConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            account: pair.custody_account(),
            pair,
            config,
            clock,
            state: RwLock::new(PoolState::default()),
        }
    }

    /// The canonical pair this pool trades.
    pub const fn pair(&self) -> AssetPair {
        self.pair
    }

    /// Custody account holding the pool's assets on the ledger.
    pub const fn account(&self) -> AccountId {
        self.account
    }

    /// Parameters the pool was created with.
    pub const fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Current `(reserve0, reserve1)`.
    pub fn reserves(&self) -> (Amount, Amount) {
        let reserves = self.state.read().reserves();
        (reserves.reserve0(), reserves.reserve1())
    }

    /// Units held by `owner`.
    pub fn liquidity_of(&self, owner: &AccountId) -> Liquidity {
        self.state.read().liquidity_of(owner)
    }

    /// Units outstanding, including the locked minimum.
    pub fn total_liquidity(&self) -> Liquidity {
        self.state.read().total()
    }

    /// Units locked forever by the first deposit.
    pub fn locked_liquidity(&self) -> Liquidity {
        self.state.read().locked()
    }

    /// The position of `owner`, if it holds any units.
    pub fn position(&self, owner: &AccountId) -> Option<LiquidityPosition> {
        let units = self.liquidity_of(owner);
        (!units.is_zero()).then_some(LiquidityPosition {
            owner: *owner,
            pair: self.pair,
            units,
        })
    }

    /// Every non-empty position, in no particular order.
    pub fn positions(&self) -> Vec<LiquidityPosition> {
        self.state
            .read()
            .positions()
            .map(|(owner, units)| LiquidityPosition {
                owner: *owner,
                pair: self.pair,
                units: *units,
            })
            .collect()
    }

    /// Output an exact-in swap of `amount_in` would pay right now.
    ///
    /// # Errors
    ///
    /// Same as [`math::amount_out`].
    pub fn quote_exact_in(
        &self,
        amount_in: Amount,
        asset_in_is_asset0: bool,
    ) -> Result<Amount, AmmError> {
        let (reserve_in, reserve_out) = self.state.read().reserves().oriented(asset_in_is_asset0);
        let out = math::amount_out(amount_in, reserve_in, reserve_out, self.config.fee())?;
        debug!(pair = %self.pair, %amount_in, amount_out = %out, "quoted exact in");
        Ok(out)
    }

    /// Input needed to receive exactly `amount_out` right now.
    ///
    /// # Errors
    ///
    /// Same as [`math::amount_in`].
    pub fn quote_exact_out(
        &self,
        amount_out: Amount,
        asset_in_is_asset0: bool,
    ) -> Result<Amount, AmmError> {
        let (reserve_in, reserve_out) = self.state.read().reserves().oriented(asset_in_is_asset0);
        let needed = math::amount_in(amount_out, reserve_in, reserve_out, self.config.fee())?;
        debug!(pair = %self.pair, %amount_out, amount_in = %needed, "quoted exact out");
        Ok(needed)
    }

    /// Amount of the other asset worth `amount` at the current reserve
    /// ratio, fee excluded.
    ///
    /// # Errors
    ///
    /// Same as [`math::quote`].
    pub fn quote(&self, amount: Amount, asset_is_asset0: bool) -> Result<Amount, AmmError> {
        let (reserve_a, reserve_b) = self.state.read().reserves().oriented(asset_is_asset0);
        math::quote(amount, reserve_a, reserve_b)
    }

    /// Write access bounded by the configured lock timeout.
    pub(crate) fn lock(&self) -> Result<RwLockWriteGuard<'_, PoolState>, AmmError> {
        self.state
            .try_write_for(self.config.lock_timeout())
            .ok_or(AmmError::Locked)
    }

    /// `(asset_in, asset_out)` for a swap direction.
    pub(crate) const fn oriented_assets(&self, asset_in_is_asset0: bool) -> (AssetId, AssetId) {
        if asset_in_is_asset0 {
            (self.pair.asset0(), self.pair.asset1())
        } else {
            (self.pair.asset1(), self.pair.asset0())
        }
    }

    /// Deposits both assets and mints liquidity units to `request.to`.
    ///
    /// The first deposit sets the price and locks the configured minimum
    /// liquidity forever. Later deposits are trimmed to the current reserve
    /// ratio.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Locked`] if the pool stays busy past the lock timeout.
    /// - [`AmmError::DeadlineExpired`] after `request.deadline`.
    /// - [`AmmError::InvalidRecipient`] for the zero account.
    /// - [`AmmError::InsufficientAmount`] if the ratio-adjusted deposit is
    ///   below a minimum.
    /// - [`AmmError::InsufficientLiquidityMinted`] if no units would be minted.
    /// - [`AmmError::Overflow`] if a reserve would pass [`math::MAX_RESERVE`].
    /// - [`AmmError::TransferFailed`] if pulling either asset fails.
    pub fn add_liquidity<L: AssetLedger + ?Sized>(
        &self,
        ledger: &mut L,
        caller: &AccountId,
        request: &AddLiquidityRequest,
    ) -> Result<LiquidityAdded, AmmError> {
        let mut state = self.lock()?;
        request.deadline.check(self.clock.now())?;
        ensure_recipient(&request.to)?;

        let plan = state.plan_add(request, &self.config)?;

        let mut settlement = Settlement::new(ledger);
        settlement.pull(self.pair.asset0(), self.account, *caller, self.account, plan.amount0)?;
        settlement.pull(self.pair.asset1(), self.account, *caller, self.account, plan.amount1)?;
        settlement.commit();

        state.apply_add(&plan, request.to);
        info!(
            pair = %self.pair,
            amount0 = %plan.amount0,
            amount1 = %plan.amount1,
            liquidity = %plan.minted,
            to = %request.to,
            "liquidity added"
        );
        Ok(LiquidityAdded {
            amount0: plan.amount0,
            amount1: plan.amount1,
            liquidity: plan.minted,
        })
    }

    /// Burns `request.liquidity` of the caller's units and sends the
    /// proportional share of both reserves to `request.to`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Locked`], [`AmmError::DeadlineExpired`] and
    ///   [`AmmError::InvalidRecipient`] as for [`add_liquidity`](Self::add_liquidity).
    /// - [`AmmError::InsufficientBalance`] if the caller holds fewer units.
    /// - [`AmmError::InsufficientLiquidityBurned`] if both shares round to zero.
    /// - [`AmmError::InsufficientAmount`] if a share is below its minimum.
    /// - [`AmmError::TransferFailed`] if sending either asset fails.
    pub fn remove_liquidity<L: AssetLedger + ?Sized>(
        &self,
        ledger: &mut L,
        caller: &AccountId,
        request: &RemoveLiquidityRequest,
    ) -> Result<LiquidityRemoved, AmmError> {
        let mut state = self.lock()?;
        request.deadline.check(self.clock.now())?;
        ensure_recipient(&request.to)?;

        let plan = state.plan_remove(caller, request)?;

        let mut settlement = Settlement::new(ledger);
        settlement.push(self.pair.asset0(), self.account, request.to, plan.amount0)?;
        settlement.push(self.pair.asset1(), self.account, request.to, plan.amount1)?;
        settlement.commit();

        state.apply_remove(&plan, *caller);
        info!(
            pair = %self.pair,
            amount0 = %plan.amount0,
            amount1 = %plan.amount1,
            liquidity = %plan.burned,
            to = %request.to,
            "liquidity removed"
        );
        Ok(LiquidityRemoved {
            amount0: plan.amount0,
            amount1: plan.amount1,
            liquidity: plan.burned,
        })
    }

    /// Sells exactly `request.amount_in` of one asset for the other.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Locked`], [`AmmError::DeadlineExpired`] and
    ///   [`AmmError::InvalidRecipient`] as for [`add_liquidity`](Self::add_liquidity).
    /// - [`AmmError::InsufficientInputAmount`] if `amount_in` is zero.
    /// - [`AmmError::InsufficientLiquidity`] if the pool is empty.
    /// - [`AmmError::InsufficientOutputAmount`] if the output is zero or
    ///   below `amount_out_min`.
    /// - [`AmmError::Overflow`] if the input reserve would pass
    ///   [`math::MAX_RESERVE`].
    /// - [`AmmError::TransferFailed`] if either transfer fails.
    ///
    /// # Panics
    ///
    /// Panics if the staged reserves would decrease `reserve0 * reserve1`.
    /// The output formula makes this unreachable.
    pub fn swap<L: AssetLedger + ?Sized>(
        &self,
        ledger: &mut L,
        caller: &AccountId,
        request: &SwapRequest,
    ) -> Result<SwapOutcome, AmmError> {
        let mut state = self.lock()?;
        request.deadline.check(self.clock.now())?;
        ensure_recipient(&request.to)?;

        let plan = state.plan_swap(
            request.amount_in,
            request.amount_out_min,
            request.asset_in_is_asset0,
            self.config.fee(),
        )?;
        let (asset_in, asset_out) = self.oriented_assets(request.asset_in_is_asset0);

        let mut settlement = Settlement::new(ledger);
        settlement.pull(asset_in, self.account, *caller, self.account, plan.amount_in)?;
        settlement.push(asset_out, self.account, request.to, plan.amount_out)?;
        settlement.commit();

        state.apply_swap(&plan);
        info!(
            pair = %self.pair,
            %asset_in,
            amount_in = %plan.amount_in,
            amount_out = %plan.amount_out,
            fee = %plan.fee,
            to = %request.to,
            "swap"
        );
        Ok(SwapOutcome {
            amount_in: plan.amount_in,
            amount_out: plan.amount_out,
            fee: plan.fee,
        })
    }

    /// Moves liquidity units from `from` to `to`. Totals are unchanged.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Locked`] if the pool stays busy past the lock timeout.
    /// - [`AmmError::InvalidRecipient`] for the zero account.
    /// - [`AmmError::InsufficientBalance`] if `from` holds fewer units.
    pub fn transfer_liquidity(
        &self,
        from: &AccountId,
        to: &AccountId,
        units: Liquidity,
    ) -> Result<(), AmmError> {
        let mut state = self.lock()?;
        ensure_recipient(to)?;
        state.transfer_units(from, to, units)?;
        debug!(pair = %self.pair, %from, %to, %units, "liquidity transferred");
        Ok(())
    }
}

impl fmt::Debug for LiquidityPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read();
        f.debug_struct("LiquidityPool")
            .field("pair", &self.pair)
            .field("account", &self.account)
            .field("config", &self.config)
            .field("reserves", &state.reserves())
            .field("total_liquidity", &state.total())
            .finish_non_exhaustive()
    }
}
