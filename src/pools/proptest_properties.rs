//! Property-based tests using `proptest` for pool invariant validation.
//!
//! 1. **First deposit** mints `isqrt(a·b) − minimum` and sets reserves to `(a, b)`.
//! 2. **Invariant preservation**: `reserve0 · reserve1` never decreases across swaps.
//! 3. **Liquidity conservation**: add then remove returns at most the deposit.
//! 4. **Output bounds**: a swap never pays more than the fee-free spot value
//!    and never drains the output reserve.
//! 5. **Swap reversibility**: a round trip returns at most the original input.
//! 6. **Large reserves**: pools holding up to `2^111` per side still swap and
//!    pay out every held unit.

use std::sync::Arc;

use alloy_primitives::U256;
use proptest::prelude::*;

use crate::config::PoolConfig;
use crate::domain::{AccountId, Amount, AssetId, AssetPair, Deadline, Liquidity};
use crate::ledger::InMemoryLedger;
use crate::math::isqrt;
use crate::traits::{AssetLedger, ManualClock};

use super::{AddLiquidityRequest, LiquidityPool, RemoveLiquidityRequest, SwapRequest};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

const FUNDS: u128 = 1 << 120;

fn asset0() -> AssetId {
    AssetId::from_bytes([1u8; 32])
}

fn asset1() -> AssetId {
    AssetId::from_bytes([2u8; 32])
}

fn provider() -> AccountId {
    AccountId::from_bytes([0xa1; 32])
}

fn trader() -> AccountId {
    AccountId::from_bytes([0xb0; 32])
}

fn make_pool() -> (LiquidityPool, InMemoryLedger) {
    let Ok(pair) = AssetPair::new(asset0(), asset1()) else {
        panic!("valid pair");
    };
    let pool = LiquidityPool::new(pair, PoolConfig::default(), Arc::new(ManualClock::default()));
    let mut ledger = InMemoryLedger::new();
    for user in [provider(), trader()] {
        for asset in [asset0(), asset1()] {
            let Ok(()) = ledger.mint(&asset, &user, Amount::new(FUNDS)) else {
                panic!("mint");
            };
            let Ok(()) = ledger.approve(&asset, &user, &pool.account(), Amount::MAX) else {
                panic!("approve");
            };
        }
    }
    (pool, ledger)
}

fn deposit(amount0: u128, amount1: u128, to: AccountId) -> AddLiquidityRequest {
    AddLiquidityRequest {
        amount0_desired: Amount::new(amount0),
        amount1_desired: Amount::new(amount1),
        amount0_min: Amount::ZERO,
        amount1_min: Amount::ZERO,
        to,
        deadline: Deadline::NEVER,
    }
}

fn sell(amount_in: u128, zero_for_one: bool) -> SwapRequest {
    SwapRequest {
        amount_in: Amount::new(amount_in),
        amount_out_min: Amount::ZERO,
        asset_in_is_asset0: zero_for_one,
        to: trader(),
        deadline: Deadline::NEVER,
    }
}

fn seeded_pool(r0: u128, r1: u128) -> (LiquidityPool, InMemoryLedger) {
    let (pool, mut ledger) = make_pool();
    let Ok(_) = pool.add_liquidity(&mut ledger, &provider(), &deposit(r0, r1, provider())) else {
        panic!("seed deposit");
    };
    (pool, ledger)
}

fn k(pool: &LiquidityPool) -> U256 {
    let (r0, r1) = pool.reserves();
    r0.get() * r1.get()
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in range [10_000, 10_000_000] to avoid extremes.
fn reserve_strategy() -> impl Strategy<Value = u128> {
    10_000u128..=10_000_000u128
}

/// Reserve values in range [2^100, 2^110], close to the reserve cap.
fn large_reserve_strategy() -> impl Strategy<Value = u128> {
    (1u128 << 100)..=(1u128 << 110)
}

/// A swap: input size in basis points of the input reserve, and direction.
fn swap_strategy() -> impl Strategy<Value = (u128, bool)> {
    (1u128..=5_000u128, any::<bool>())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // -----------------------------------------------------------------------
    // Property 1: First deposit
    // -----------------------------------------------------------------------

    #[test]
    fn prop_first_deposit_mints_sqrt_minus_minimum(
        a in reserve_strategy(),
        b in reserve_strategy(),
    ) {
        let (pool, mut ledger) = make_pool();
        let Ok(added) = pool.add_liquidity(&mut ledger, &provider(), &deposit(a, b, provider()))
        else {
            return Err(TestCaseError::fail("first deposit failed"));
        };
        let root = isqrt(U256::from(a) * U256::from(b));
        prop_assert_eq!(added.liquidity.get(), root - U256::from(1_000u64));
        prop_assert_eq!(pool.reserves(), (Amount::new(a), Amount::new(b)));
        prop_assert_eq!(pool.total_liquidity(), Liquidity::from_u256(root));
    }

    // -----------------------------------------------------------------------
    // Property 2: Invariant preservation
    // -----------------------------------------------------------------------

    #[test]
    fn prop_k_never_decreases(
        r0 in reserve_strategy(),
        r1 in reserve_strategy(),
        swaps in prop::collection::vec(swap_strategy(), 1..12),
    ) {
        let (pool, mut ledger) = seeded_pool(r0, r1);
        for (size_bps, zero_for_one) in swaps {
            let (res0, res1) = pool.reserves();
            let reserve_in = if zero_for_one { res0 } else { res1 };
            let Some(reserve_in) = reserve_in.to_u128() else {
                return Err(TestCaseError::fail("reserve exceeds u128"));
            };
            let amount_in = (reserve_in * size_bps / 10_000).max(1);
            let before = k(&pool);
            // Dust swaps that round to zero output are rejected; k is unchanged.
            let _ = pool.swap(&mut ledger, &trader(), &sell(amount_in, zero_for_one));
            prop_assert!(k(&pool) >= before, "k decreased: {} -> {}", before, k(&pool));
        }
    }

    // -----------------------------------------------------------------------
    // Property 3: Liquidity conservation
    // -----------------------------------------------------------------------

    #[test]
    fn prop_add_remove_round_trip(
        r0 in reserve_strategy(),
        r1 in reserve_strategy(),
        add0 in 1_000u128..=1_000_000u128,
        add1 in 1_000u128..=1_000_000u128,
    ) {
        let (pool, mut ledger) = seeded_pool(r0, r1);
        let total_before = pool.total_liquidity();
        let Ok(added) = pool.add_liquidity(&mut ledger, &trader(), &deposit(add0, add1, trader()))
        else {
            // Deposits too small to mint a unit are rejected.
            return Ok(());
        };
        let Ok(removed) = pool.remove_liquidity(&mut ledger, &trader(), &RemoveLiquidityRequest {
            liquidity: added.liquidity,
            amount0_min: Amount::ZERO,
            amount1_min: Amount::ZERO,
            to: trader(),
            deadline: Deadline::NEVER,
        }) else {
            return Err(TestCaseError::fail("remove of freshly minted units failed"));
        };
        prop_assert!(removed.amount0 <= added.amount0);
        prop_assert!(removed.amount1 <= added.amount1);
        prop_assert_eq!(pool.total_liquidity(), total_before);
        prop_assert!(
            ledger.balance_of(&asset0(), &trader()) <= Amount::new(FUNDS),
            "round trip created asset0"
        );
    }

    // -----------------------------------------------------------------------
    // Property 4: Output bounds
    // -----------------------------------------------------------------------

    #[test]
    fn prop_output_bounded_by_spot_value(
        r0 in reserve_strategy(),
        r1 in reserve_strategy(),
        amount_in in 1u128..=100_000_000u128,
    ) {
        let (pool, mut ledger) = seeded_pool(r0, r1);
        let Ok(outcome) = pool.swap(&mut ledger, &trader(), &sell(amount_in, true)) else {
            return Ok(());
        };
        let spot_value = U256::from(amount_in) * U256::from(r1) / U256::from(r0);
        prop_assert!(outcome.amount_out.get() <= spot_value);
        prop_assert!(outcome.amount_out < Amount::new(r1));
        prop_assert_eq!(pool.reserves(), (
            Amount::new(r0 + amount_in),
            Amount::new(r1).checked_sub(&outcome.amount_out).unwrap_or_default(),
        ));
    }

    // -----------------------------------------------------------------------
    // Property 5: Swap reversibility
    // -----------------------------------------------------------------------

    #[test]
    fn prop_round_trip_loses_value(
        r0 in reserve_strategy(),
        r1 in reserve_strategy(),
    ) {
        let swap_in = (r0 / 1_000).max(1);
        let (pool, mut ledger) = seeded_pool(r0, r1);

        let Ok(forward) = pool.swap(&mut ledger, &trader(), &sell(swap_in, true)) else {
            return Ok(());
        };
        let Some(received) = forward.amount_out.to_u128() else {
            return Err(TestCaseError::fail("output exceeds u128"));
        };
        let Ok(back) = pool.swap(&mut ledger, &trader(), &sell(received, false)) else {
            return Ok(());
        };

        prop_assert!(
            back.amount_out <= Amount::new(swap_in),
            "round-trip should lose value: final={} > original={}",
            back.amount_out, swap_in
        );
    }

    // -----------------------------------------------------------------------
    // Property 6: Large reserves
    // -----------------------------------------------------------------------

    #[test]
    fn prop_large_reserves_stay_withdrawable(
        r0 in large_reserve_strategy(),
        r1 in large_reserve_strategy(),
        swap_bps in 1u128..=1_000u128,
    ) {
        let (pool, mut ledger) = seeded_pool(r0, r1);
        let Ok(_) = pool.add_liquidity(&mut ledger, &provider(), &deposit(r0, r1, provider()))
        else {
            return Err(TestCaseError::fail("second large deposit failed"));
        };
        let Ok(_) = pool.swap(&mut ledger, &trader(), &sell(r0 / 10_000 * swap_bps, true)) else {
            return Err(TestCaseError::fail("swap against large reserves failed"));
        };
        let Ok(removed) = pool.remove_liquidity(&mut ledger, &provider(), &RemoveLiquidityRequest {
            liquidity: pool.liquidity_of(&provider()),
            amount0_min: Amount::ZERO,
            amount1_min: Amount::ZERO,
            to: provider(),
            deadline: Deadline::NEVER,
        }) else {
            return Err(TestCaseError::fail("withdrawing every held unit failed"));
        };
        prop_assert!(!removed.amount0.is_zero());
        prop_assert!(!removed.amount1.is_zero());
        prop_assert_eq!(pool.total_liquidity(), pool.locked_liquidity());
    }
}
