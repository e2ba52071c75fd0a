//! Multi-hop routing example.
//!
//! Builds three pools sharing intermediate assets, routes an exact-in and an
//! exact-out trade across them, and shows an expired deadline being refused.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=hydra_pair=debug cargo run --example multi_hop
//! ```

use std::sync::Arc;

use hydra_pair::prelude::*;
use tracing_subscriber::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hydra_pair=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Multi-hop routing ===\n");

    let usdc = AssetId::from_bytes([1u8; 32]);
    let weth = AssetId::from_bytes([2u8; 32]);
    let dai = AssetId::from_bytes([3u8; 32]);
    let wbtc = AssetId::from_bytes([4u8; 32]);
    let provider = AccountId::from_bytes([0xa1; 32]);
    let trader = AccountId::from_bytes([0xb0; 32]);

    let clock = Arc::new(ManualClock::new(Timestamp::from_secs(1_700_000_000)));
    let registry = PoolRegistry::with_clock(PoolConfig::default(), clock.clone());
    let router = SwapRouter::default();

    let mut ledger = InMemoryLedger::new();
    for asset in [usdc, weth, dai, wbtc] {
        ledger.mint(&asset, &provider, Amount::new(10_000_000))?;
        ledger.mint(&asset, &trader, Amount::new(100_000))?;
        ledger.approve(&asset, &trader, &router.account(), Amount::MAX)?;
    }

    // ── 1. Seed USDC/WETH, WETH/DAI and DAI/WBTC ────────────────────────
    let deadline = Deadline::after(registry.clock(), 3_600);
    for (x, y, amount_x, amount_y) in [
        (usdc, weth, 2_000_000u128, 1_000_000u128),
        (weth, dai, 1_000_000, 2_000_000),
        (dai, wbtc, 3_000_000, 100_000),
    ] {
        let pool = registry.get_or_create_pool(x, y)?;
        ledger.approve(&x, &provider, &pool.account(), Amount::MAX)?;
        ledger.approve(&y, &provider, &pool.account(), Amount::MAX)?;
        let (amount0, amount1) = if pool.pair().asset0() == x {
            (amount_x, amount_y)
        } else {
            (amount_y, amount_x)
        };
        let added = pool.add_liquidity(
            &mut ledger,
            &provider,
            &AddLiquidityRequest {
                amount0_desired: Amount::new(amount0),
                amount1_desired: Amount::new(amount1),
                amount0_min: Amount::ZERO,
                amount1_min: Amount::ZERO,
                to: provider,
                deadline,
            },
        )?;
        println!("Seeded {} with {} units", pool.pair(), added.liquidity);
    }
    println!("Registry holds {} pools", registry.len());

    // ── 2. Exact in: 10 000 USDC → WETH → DAI → WBTC ────────────────────
    let path = vec![usdc, weth, dai, wbtc];
    let amounts = router.swap_exact_in(
        &registry,
        &mut ledger,
        &trader,
        &ExactInRoute {
            path: path.clone(),
            amount_in: Amount::new(10_000),
            amount_out_min: Amount::new(1),
            to: trader,
            deadline,
        },
    )?;
    println!("\n--- Exact in ---");
    for (asset, amount) in path.iter().zip(&amounts) {
        println!("  {asset}: {amount}");
    }

    // ── 3. Exact out: buy 500 WBTC with at most 60 000 USDC ─────────────
    let needed = router.get_amounts_in(&registry, &path, Amount::new(500))?;
    println!("\n--- Exact out ---");
    println!("  Quoted input: {}", needed[0]);
    let amounts = router.swap_exact_out(
        &registry,
        &mut ledger,
        &trader,
        &ExactOutRoute {
            path: path.clone(),
            amount_out: Amount::new(500),
            amount_in_max: Amount::new(60_000),
            to: trader,
            deadline,
        },
    )?;
    println!("  Paid:         {}", amounts[0]);
    println!("  Received:     {}", amounts[amounts.len() - 1]);

    // ── 4. A stale transaction is refused ───────────────────────────────
    clock.advance(3_601);
    let stale = router.swap_exact_in(
        &registry,
        &mut ledger,
        &trader,
        &ExactInRoute {
            path,
            amount_in: Amount::new(10_000),
            amount_out_min: Amount::new(1),
            to: trader,
            deadline,
        },
    );
    match stale {
        Err(err @ AmmError::DeadlineExpired { .. }) => println!("\nStale swap refused: {err}"),
        other => println!("\nUnexpected result: {other:?}"),
    }

    println!("\n=== Done ===");
    Ok(())
}
