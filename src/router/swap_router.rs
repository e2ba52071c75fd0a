//! Multi-hop routing across registry pools.
//!
//! A path `[A, B, C]` swaps A→B in pool `A/B`, then B→C in pool `B/C`.
//! Every distinct pool on the path is write-locked in canonical pair order
//! before anything is computed, so concurrent routes cannot deadlock and the
//! whole path executes as one transaction: either every hop settles or no
//! reserve and no balance changes.

use std::collections::BTreeMap;
use std::sync::Arc;

use alloy_primitives::keccak256;
use parking_lot::RwLockWriteGuard;
use tracing::{debug, info};

use crate::domain::{AccountId, Amount, AssetId, AssetPair, Deadline};
use crate::error::AmmError;
use crate::ledger::Settlement;
use crate::math;
use crate::pools::state::{PoolState, Reserves};
use crate::pools::{ensure_recipient, LiquidityPool};
use crate::registry::PoolRegistry;
use crate::traits::AssetLedger;

/// Domain separator of the default router account.
const ROUTER_SEED: &[u8] = b"hydra-pair-router";

/// Parameters of [`SwapRouter::swap_exact_in`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactInRoute {
    /// Assets to trade through, input first. At least two.
    pub path: Vec<AssetId>,
    /// Exact amount of `path[0]` to sell.
    pub amount_in: Amount,
    /// Least amount of the last asset the caller accepts.
    pub amount_out_min: Amount,
    /// Recipient of the final output.
    pub to: AccountId,
    /// Latest execution time.
    pub deadline: Deadline,
}

/// Parameters of [`SwapRouter::swap_exact_out`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactOutRoute {
    /// Assets to trade through, input first. At least two.
    pub path: Vec<AssetId>,
    /// Exact amount of the last asset to receive.
    pub amount_out: Amount,
    /// Most of `path[0]` the caller is willing to sell.
    pub amount_in_max: Amount,
    /// Recipient of the final output.
    pub to: AccountId,
    /// Latest execution time.
    pub deadline: Deadline,
}

/// One pool on a path and the direction it is traded in.
struct Hop {
    pool: Arc<LiquidityPool>,
    asset_in: AssetId,
    asset_out: AssetId,
    zero_for_one: bool,
}

type Guards<'a> = BTreeMap<AssetPair, RwLockWriteGuard<'a, PoolState>>;

/// Resolves every consecutive pair of `path` to its pool.
fn resolve(registry: &PoolRegistry, path: &[AssetId]) -> Result<Vec<Hop>, AmmError> {
    if path.len() < 2 {
        return Err(AmmError::InvalidPath);
    }
    path.windows(2)
        .map(|w| -> Result<Hop, AmmError> {
            let pool = registry.pool_for(w[0], w[1])?;
            let zero_for_one = pool.pair().is_asset0(&w[0])?;
            Ok(Hop {
                pool,
                asset_in: w[0],
                asset_out: w[1],
                zero_for_one,
            })
        })
        .collect()
}

/// Write-locks each distinct pool once, in ascending pair order.
fn lock_path(hops: &[Hop]) -> Result<Guards<'_>, AmmError> {
    let mut pools: Vec<&LiquidityPool> = hops.iter().map(|h| h.pool.as_ref()).collect();
    pools.sort_by_key(|p| p.pair());
    pools.dedup_by_key(|p| p.pair());

    let mut guards = BTreeMap::new();
    for pool in pools {
        guards.insert(pool.pair(), pool.lock()?);
    }
    Ok(guards)
}

/// Per-hop amounts of an exact-in route, input first.
fn chain_out(
    hops: &[Hop],
    amount_in: Amount,
    reserves_of: impl Fn(&Hop) -> Reserves,
) -> Result<Vec<Amount>, AmmError> {
    let mut amounts = Vec::with_capacity(hops.len() + 1);
    amounts.push(amount_in);
    let mut current = amount_in;
    for hop in hops {
        let (reserve_in, reserve_out) = reserves_of(hop).oriented(hop.zero_for_one);
        current = math::amount_out(current, reserve_in, reserve_out, hop.pool.config().fee())?;
        amounts.push(current);
    }
    Ok(amounts)
}

/// Per-hop amounts of an exact-out route, computed backwards, input first.
fn chain_in(
    hops: &[Hop],
    amount_out: Amount,
    reserves_of: impl Fn(&Hop) -> Reserves,
) -> Result<Vec<Amount>, AmmError> {
    let mut amounts = vec![Amount::ZERO; hops.len() + 1];
    amounts[hops.len()] = amount_out;
    let mut current = amount_out;
    for (i, hop) in hops.iter().enumerate().rev() {
        let (reserve_in, reserve_out) = reserves_of(hop).oriented(hop.zero_for_one);
        current = math::amount_in(current, reserve_in, reserve_out, hop.pool.config().fee())?;
        amounts[i] = current;
    }
    Ok(amounts)
}

fn current_reserves(hop: &Hop) -> Reserves {
    let (reserve0, reserve1) = hop.pool.reserves();
    Reserves::new(reserve0, reserve1)
}

/// Stateless router executing swaps along asset paths.
///
/// The router has its own [`AccountId`]. Callers approve it on the input
/// asset; it pulls the input straight into the first pool's custody,
/// forwards each intermediate output from pool to pool, and sends the final
/// output to the recipient.
///
/// # Example
///
/// ```rust
/// use hydra_pair::domain::{AccountId, Amount, AssetId, Deadline};
/// use hydra_pair::ledger::InMemoryLedger;
/// use hydra_pair::pools::AddLiquidityRequest;
/// use hydra_pair::registry::PoolRegistry;
/// use hydra_pair::router::{ExactInRoute, SwapRouter};
/// use hydra_pair::traits::AssetLedger;
///
/// let usdc = AssetId::from_bytes([1u8; 32]);
/// let weth = AssetId::from_bytes([2u8; 32]);
/// let alice = AccountId::from_bytes([0xa1; 32]);
///
/// let registry = PoolRegistry::default();
/// let router = SwapRouter::default();
/// let pool = registry.get_or_create_pool(usdc, weth).expect("distinct");
///
/// let mut ledger = InMemoryLedger::new();
/// for asset in [usdc, weth] {
///     ledger.mint(&asset, &alice, Amount::new(20_000)).expect("mint");
///     ledger.approve(&asset, &alice, &pool.account(), Amount::MAX).expect("approve");
///     ledger.approve(&asset, &alice, &router.account(), Amount::MAX).expect("approve");
/// }
/// pool.add_liquidity(&mut ledger, &alice, &AddLiquidityRequest {
///     amount0_desired: Amount::new(10_000),
///     amount1_desired: Amount::new(10_000),
///     amount0_min: Amount::ZERO,
///     amount1_min: Amount::ZERO,
///     to: alice,
///     deadline: Deadline::NEVER,
/// }).expect("add");
///
/// let amounts = router.swap_exact_in(&registry, &mut ledger, &alice, &ExactInRoute {
///     path: vec![usdc, weth],
///     amount_in: Amount::new(2_000),
///     amount_out_min: Amount::new(1),
///     to: alice,
///     deadline: Deadline::NEVER,
/// }).expect("swap");
/// assert_eq!(amounts, vec![Amount::new(2_000), Amount::new(1_662)]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapRouter {
    account: AccountId,
}

impl SwapRouter {
    /// Creates a router acting as `account` on the ledger.
    #[must_use]
    pub const fn new(account: AccountId) -> Self {
        Self { account }
    }

    /// Account callers approve to spend their input.
    pub const fn account(&self) -> AccountId {
        self.account
    }

    /// Per-hop amounts an exact-in route would produce at current reserves.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidPath`] for fewer than two assets.
    /// - [`AmmError::PairNotFound`] for a hop without a pool.
    /// - Any error of [`math::amount_out`] for a hop.
    pub fn get_amounts_out(
        &self,
        registry: &PoolRegistry,
        path: &[AssetId],
        amount_in: Amount,
    ) -> Result<Vec<Amount>, AmmError> {
        let hops = resolve(registry, path)?;
        let amounts = chain_out(&hops, amount_in, current_reserves)?;
        debug!(hops = hops.len(), ?amounts, "quoted route exact in");
        Ok(amounts)
    }

    /// Per-hop amounts an exact-out route would need at current reserves.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidPath`] for fewer than two assets.
    /// - [`AmmError::PairNotFound`] for a hop without a pool.
    /// - Any error of [`math::amount_in`] for a hop.
    pub fn get_amounts_in(
        &self,
        registry: &PoolRegistry,
        path: &[AssetId],
        amount_out: Amount,
    ) -> Result<Vec<Amount>, AmmError> {
        let hops = resolve(registry, path)?;
        let amounts = chain_in(&hops, amount_out, current_reserves)?;
        debug!(hops = hops.len(), ?amounts, "quoted route exact out");
        Ok(amounts)
    }

    /// Sells exactly `route.amount_in` of `path[0]` through every pool on
    /// the path. Intermediate hops accept any non-zero output; only the
    /// final output is checked against `amount_out_min`.
    ///
    /// Returns the amount entering each hop followed by the final output.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidPath`] or [`AmmError::PairNotFound`] for a bad path.
    /// - [`AmmError::Locked`] if a pool on the path stays busy.
    /// - [`AmmError::DeadlineExpired`] after `route.deadline`.
    /// - [`AmmError::InvalidRecipient`] for the zero account.
    /// - [`AmmError::InsufficientOutputAmount`] if a hop pays nothing or the
    ///   final output is below the minimum.
    /// - [`AmmError::TransferFailed`] if any transfer fails.
    pub fn swap_exact_in<L: AssetLedger + ?Sized>(
        &self,
        registry: &PoolRegistry,
        ledger: &mut L,
        caller: &AccountId,
        route: &ExactInRoute,
    ) -> Result<Vec<Amount>, AmmError> {
        let hops = resolve(registry, &route.path)?;
        let mut guards = lock_path(&hops)?;
        route.deadline.check(registry.clock().now())?;
        ensure_recipient(&route.to)?;

        let last = hops.len() - 1;
        let amounts = self.transact(&hops, &mut guards, ledger, caller, route.to, |guards| {
            let mut amounts = Vec::with_capacity(hops.len() + 1);
            amounts.push(route.amount_in);
            let mut current = route.amount_in;
            for (i, hop) in hops.iter().enumerate() {
                let min = if i == last {
                    route.amount_out_min
                } else {
                    Amount::ZERO
                };
                let guard = guards
                    .get_mut(&hop.pool.pair())
                    .ok_or(AmmError::PairNotFound)?;
                let plan = guard.plan_swap(current, min, hop.zero_for_one, hop.pool.config().fee())?;
                guard.apply_swap(&plan);
                current = plan.amount_out;
                amounts.push(current);
            }
            Ok(amounts)
        })?;

        info!(
            hops = hops.len(),
            amount_in = %route.amount_in,
            amount_out = %amounts[amounts.len() - 1],
            to = %route.to,
            "routed exact-in swap"
        );
        Ok(amounts)
    }

    /// Buys exactly `route.amount_out` of the last asset on the path,
    /// selling at most `route.amount_in_max` of `path[0]`.
    ///
    /// Required inputs are computed backwards from the output at the
    /// reserves seen under lock, each rounded up. A path that visits the
    /// same pool twice is priced against its pre-trade reserves and may fail
    /// with [`AmmError::InsufficientOutputAmount`].
    ///
    /// # Errors
    ///
    /// Same as [`swap_exact_in`](Self::swap_exact_in), plus
    /// [`AmmError::ExcessiveInputAmount`] if the required input exceeds
    /// `amount_in_max`.
    pub fn swap_exact_out<L: AssetLedger + ?Sized>(
        &self,
        registry: &PoolRegistry,
        ledger: &mut L,
        caller: &AccountId,
        route: &ExactOutRoute,
    ) -> Result<Vec<Amount>, AmmError> {
        let hops = resolve(registry, &route.path)?;
        let mut guards = lock_path(&hops)?;
        route.deadline.check(registry.clock().now())?;
        ensure_recipient(&route.to)?;

        let amounts = self.transact(&hops, &mut guards, ledger, caller, route.to, |guards| {
            let amounts = chain_in(&hops, route.amount_out, |hop| {
                guards
                    .get(&hop.pool.pair())
                    .map(|g| g.reserves())
                    .unwrap_or_default()
            })?;
            if amounts[0] > route.amount_in_max {
                return Err(AmmError::ExcessiveInputAmount);
            }
            for (i, hop) in hops.iter().enumerate() {
                let guard = guards
                    .get_mut(&hop.pool.pair())
                    .ok_or(AmmError::PairNotFound)?;
                let plan = guard.plan_swap_to(
                    amounts[i],
                    amounts[i + 1],
                    hop.zero_for_one,
                    hop.pool.config().fee(),
                )?;
                guard.apply_swap(&plan);
            }
            Ok(amounts)
        })?;

        info!(
            hops = hops.len(),
            amount_in = %amounts[0],
            amount_out = %route.amount_out,
            to = %route.to,
            "routed exact-out swap"
        );
        Ok(amounts)
    }

    /// Stages reserves on the locked pools with `stage`, settles the
    /// transfers for the resulting amounts, and restores every pool's
    /// reserves if either step fails.
    fn transact<'g, L, F>(
        &self,
        hops: &[Hop],
        guards: &mut Guards<'g>,
        ledger: &mut L,
        caller: &AccountId,
        to: AccountId,
        stage: F,
    ) -> Result<Vec<Amount>, AmmError>
    where
        L: AssetLedger + ?Sized,
        F: FnOnce(&mut Guards<'g>) -> Result<Vec<Amount>, AmmError>,
    {
        let snapshot: Vec<(AssetPair, Reserves)> =
            guards.iter().map(|(pair, g)| (*pair, g.reserves())).collect();

        let result = stage(guards)
            .and_then(|amounts| self.settle(ledger, caller, hops, &amounts, to).map(|()| amounts));

        if result.is_err() {
            for (pair, reserves) in snapshot {
                if let Some(guard) = guards.get_mut(&pair) {
                    guard.restore_reserves(reserves);
                }
            }
        }
        result
    }

    /// Moves the input into the first pool and every output onwards.
    fn settle<L: AssetLedger + ?Sized>(
        &self,
        ledger: &mut L,
        caller: &AccountId,
        hops: &[Hop],
        amounts: &[Amount],
        to: AccountId,
    ) -> Result<(), AmmError> {
        let mut settlement = Settlement::new(ledger);
        let first = &hops[0];
        settlement.pull(
            first.asset_in,
            self.account,
            *caller,
            first.pool.account(),
            amounts[0],
        )?;
        for (i, hop) in hops.iter().enumerate() {
            let next = hops.get(i + 1).map_or(to, |h| h.pool.account());
            settlement.push(hop.asset_out, hop.pool.account(), next, amounts[i + 1])?;
            debug!(
                pair = %hop.pool.pair(),
                amount_in = %amounts[i],
                amount_out = %amounts[i + 1],
                "hop settled"
            );
        }
        settlement.commit();
        Ok(())
    }
}

impl Default for SwapRouter {
    /// Router acting as `keccak256("hydra-pair-router")`.
    fn default() -> Self {
        Self::new(AccountId::from_bytes(keccak256(ROUTER_SEED).0))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::config::PoolConfig;
    use crate::domain::Timestamp;
    use crate::ledger::InMemoryLedger;
    use crate::pools::AddLiquidityRequest;
    use crate::traits::ManualClock;

    const NOW: u64 = 1_700_000_000;

    fn asset(b: u8) -> AssetId {
        AssetId::from_bytes([b; 32])
    }

    fn acct(b: u8) -> AccountId {
        AccountId::from_bytes([b; 32])
    }

    fn a(v: u128) -> Amount {
        Amount::new(v)
    }

    struct Fixture {
        registry: PoolRegistry,
        router: SwapRouter,
        ledger: InMemoryLedger,
        clock: Arc<ManualClock>,
    }

    /// Pools 1/2 and 2/3, each seeded 10 000 / 10 000.
    fn fixture() -> Fixture {
        let clock = Arc::new(ManualClock::new(Timestamp::from_secs(NOW)));
        let registry = PoolRegistry::with_clock(PoolConfig::default(), clock.clone());
        let router = SwapRouter::default();
        let mut ledger = InMemoryLedger::new();
        for x in [asset(1), asset(2), asset(3)] {
            for user in [acct(0xa1), acct(0xb0)] {
                let Ok(()) = ledger.mint(&x, &user, a(1_000_000)) else {
                    panic!("mint");
                };
                let Ok(()) = ledger.approve(&x, &user, &router.account(), Amount::MAX) else {
                    panic!("approve");
                };
            }
        }
        for (x, y) in [(asset(1), asset(2)), (asset(2), asset(3))] {
            let Ok(pool) = registry.get_or_create_pool(x, y) else {
                panic!("pool");
            };
            for z in [x, y] {
                let Ok(()) = ledger.approve(&z, &acct(0xa1), &pool.account(), Amount::MAX) else {
                    panic!("approve");
                };
            }
            let Ok(_) = pool.add_liquidity(
                &mut ledger,
                &acct(0xa1),
                &AddLiquidityRequest {
                    amount0_desired: a(10_000),
                    amount1_desired: a(10_000),
                    amount0_min: Amount::ZERO,
                    amount1_min: Amount::ZERO,
                    to: acct(0xa1),
                    deadline: Deadline::NEVER,
                },
            ) else {
                panic!("seed");
            };
        }
        Fixture {
            registry,
            router,
            ledger,
            clock,
        }
    }

    fn exact_in(path: Vec<AssetId>, amount_in: u128, min: u128) -> ExactInRoute {
        ExactInRoute {
            path,
            amount_in: a(amount_in),
            amount_out_min: a(min),
            to: acct(0xb0),
            deadline: Deadline::NEVER,
        }
    }

    #[test]
    fn single_hop_matches_reference() {
        let mut f = fixture();
        let route = exact_in(vec![asset(1), asset(2)], 2_000, 1);
        let Ok(amounts) = f.router.swap_exact_in(&f.registry, &mut f.ledger, &acct(0xb0), &route)
        else {
            panic!("expected Ok");
        };
        assert_eq!(amounts, vec![a(2_000), a(1_662)]);
        assert_eq!(f.ledger.balance_of(&asset(2), &acct(0xb0)), a(1_001_662));
    }

    #[test]
    fn two_hops_chain_outputs() {
        let mut f = fixture();
        let path = vec![asset(1), asset(2), asset(3)];
        let Ok(quoted) = f.router.get_amounts_out(&f.registry, &path, a(2_000)) else {
            panic!("expected Ok");
        };
        let Ok(amounts) = f.router.swap_exact_in(
            &f.registry,
            &mut f.ledger,
            &acct(0xb0),
            &exact_in(path, 2_000, 1),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(amounts, quoted);
        assert_eq!(amounts[1], a(1_662));
        // floor(1662 * 9970 * 10000 / (10000 * 10000 + 1662 * 9970)) = 1421
        assert_eq!(amounts[2], a(1_421));
        let Some(middle) = f.registry.get_pool(asset(2), asset(3)) else {
            panic!("pool");
        };
        assert_eq!(middle.reserves(), (a(11_662), a(8_579)));
        // Intermediate asset never touches the caller.
        assert_eq!(f.ledger.balance_of(&asset(2), &acct(0xb0)), a(1_000_000));
        assert_eq!(f.ledger.balance_of(&asset(3), &acct(0xb0)), a(1_001_421));
    }

    #[test]
    fn final_minimum_unmet_restores_every_pool() {
        let mut f = fixture();
        let path = vec![asset(1), asset(2), asset(3)];
        let result = f.router.swap_exact_in(
            &f.registry,
            &mut f.ledger,
            &acct(0xb0),
            &exact_in(path, 2_000, 1_422),
        );
        assert_eq!(result, Err(AmmError::InsufficientOutputAmount));
        for pool in f.registry.pools() {
            assert_eq!(pool.reserves(), (a(10_000), a(10_000)));
        }
    }

    #[test]
    fn failed_last_transfer_restores_every_pool() {
        let mut f = fixture();
        f.ledger.halt_transfers(&asset(3));
        let path = vec![asset(1), asset(2), asset(3)];
        let result = f.router.swap_exact_in(
            &f.registry,
            &mut f.ledger,
            &acct(0xb0),
            &exact_in(path, 2_000, 1),
        );
        let Err(AmmError::TransferFailed { asset: failed, .. }) = result else {
            panic!("expected TransferFailed");
        };
        assert_eq!(failed, asset(3));
        for pool in f.registry.pools() {
            assert_eq!(pool.reserves(), (a(10_000), a(10_000)));
        }
        assert_eq!(f.ledger.balance_of(&asset(1), &acct(0xb0)), a(1_000_000));
    }

    #[test]
    fn path_errors() {
        let mut f = fixture();
        assert_eq!(
            f.router
                .swap_exact_in(&f.registry, &mut f.ledger, &acct(0xb0), &exact_in(vec![asset(1)], 10, 0)),
            Err(AmmError::InvalidPath)
        );
        assert_eq!(
            f.router.swap_exact_in(
                &f.registry,
                &mut f.ledger,
                &acct(0xb0),
                &exact_in(vec![asset(1), asset(3)], 10, 0)
            ),
            Err(AmmError::PairNotFound)
        );
        assert_eq!(
            f.router.get_amounts_in(&f.registry, &[], a(1)),
            Err(AmmError::InvalidPath)
        );
    }

    #[test]
    fn expired_deadline_is_rejected() {
        let mut f = fixture();
        let mut route = exact_in(vec![asset(1), asset(2)], 2_000, 1);
        route.deadline = Deadline::at(Timestamp::from_secs(NOW - 1));
        let Err(AmmError::DeadlineExpired { .. }) =
            f.router
                .swap_exact_in(&f.registry, &mut f.ledger, &acct(0xb0), &route)
        else {
            panic!("expected DeadlineExpired");
        };
        f.clock.set(Timestamp::from_secs(NOW - 1));
        let Ok(_) = f
            .router
            .swap_exact_in(&f.registry, &mut f.ledger, &acct(0xb0), &route)
        else {
            panic!("expected Ok at the deadline");
        };
    }

    #[test]
    fn exact_out_delivers_requested_amount() {
        let mut f = fixture();
        let path = vec![asset(3), asset(2), asset(1)];
        let Ok(quoted) = f.router.get_amounts_in(&f.registry, &path, a(1_000)) else {
            panic!("expected Ok");
        };
        let route = ExactOutRoute {
            path,
            amount_out: a(1_000),
            amount_in_max: quoted[0],
            to: acct(0xb0),
            deadline: Deadline::NEVER,
        };
        let Ok(amounts) = f.router.swap_exact_out(&f.registry, &mut f.ledger, &acct(0xb0), &route)
        else {
            panic!("expected Ok");
        };
        assert_eq!(amounts, quoted);
        assert_eq!(f.ledger.balance_of(&asset(1), &acct(0xb0)), a(1_001_000));
        let Some(spent) = a(1_000_000).checked_sub(&f.ledger.balance_of(&asset(3), &acct(0xb0)))
        else {
            panic!("balance grew");
        };
        assert_eq!(spent, quoted[0]);
    }

    #[test]
    fn exact_out_rejects_excessive_input() {
        let mut f = fixture();
        let path = vec![asset(1), asset(2)];
        let Ok(quoted) = f.router.get_amounts_in(&f.registry, &path, a(1_662)) else {
            panic!("expected Ok");
        };
        let Some(too_little) = quoted[0].checked_sub(&a(1)) else {
            panic!("non-zero input");
        };
        let route = ExactOutRoute {
            path,
            amount_out: a(1_662),
            amount_in_max: too_little,
            to: acct(0xb0),
            deadline: Deadline::NEVER,
        };
        assert_eq!(
            f.router.swap_exact_out(&f.registry, &mut f.ledger, &acct(0xb0), &route),
            Err(AmmError::ExcessiveInputAmount)
        );
    }

    #[test]
    fn missing_router_allowance_fails_cleanly() {
        let mut f = fixture();
        let Ok(()) = f
            .ledger
            .approve(&asset(1), &acct(0xb0), &f.router.account(), Amount::ZERO)
        else {
            panic!("approve");
        };
        let result = f.router.swap_exact_in(
            &f.registry,
            &mut f.ledger,
            &acct(0xb0),
            &exact_in(vec![asset(1), asset(2)], 2_000, 1),
        );
        let Err(AmmError::TransferFailed { .. }) = result else {
            panic!("expected TransferFailed");
        };
        let Some(pool) = f.registry.get_pool(asset(1), asset(2)) else {
            panic!("pool");
        };
        assert_eq!(pool.reserves(), (a(10_000), a(10_000)));
    }

    #[test]
    fn round_trip_through_same_pool() {
        let mut f = fixture();
        let path = vec![asset(1), asset(2), asset(1)];
        let Ok(amounts) = f.router.swap_exact_in(
            &f.registry,
            &mut f.ledger,
            &acct(0xb0),
            &exact_in(path, 2_000, 1),
        ) else {
            panic!("expected Ok");
        };
        assert!(amounts[2] < a(2_000));
    }
}
