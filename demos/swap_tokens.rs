//! Single-pool walkthrough.
//!
//! Creates a pool through the registry, provides liquidity, swaps through
//! the router, and withdraws again. Structured logs are printed when
//! `RUST_LOG` enables them.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=hydra_pair=debug cargo run --example swap_tokens
//! ```

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

    println!("=== Constant Product Pair (x · y = k) ===\n");

    // ── 1. Assets, accounts and a funded ledger ─────────────────────────
    let usdc = AssetId::from_bytes([1u8; 32]);
    let weth = AssetId::from_bytes([2u8; 32]);
    let provider = AccountId::from_bytes([0xa1; 32]);
    let trader = AccountId::from_bytes([0xb0; 32]);

    let registry = PoolRegistry::new(PoolConfig::default());
    let router = SwapRouter::default();
    let pool = registry.get_or_create_pool(weth, usdc)?;
    println!("Pool {} at custody account {}", pool.pair(), pool.account());
    println!("  Fee:         {}", pool.config().fee());

    let mut ledger = InMemoryLedger::new();
    ledger.mint(&usdc, &provider, Amount::new(1_000_000))?;
    ledger.mint(&weth, &provider, Amount::new(1_000_000))?;
    ledger.mint(&usdc, &trader, Amount::new(10_000))?;
    for asset in [usdc, weth] {
        ledger.approve(&asset, &provider, &pool.account(), Amount::MAX)?;
        ledger.approve(&asset, &trader, &router.account(), Amount::MAX)?;
    }

    // ── 2. Provide liquidity ────────────────────────────────────────────
    let deadline = Deadline::after(registry.clock(), 600);
    let added = pool.add_liquidity(
        &mut ledger,
        &provider,
        &AddLiquidityRequest {
            amount0_desired: Amount::new(1_000_000),
            amount1_desired: Amount::new(1_000_000),
            amount0_min: Amount::ZERO,
            amount1_min: Amount::ZERO,
            to: provider,
            deadline,
        },
    )?;
    println!("\n--- Add Liquidity ---");
    println!("  Deposited:   {} + {}", added.amount0, added.amount1);
    println!("  LP minted:   {}", added.liquidity);
    println!("  Locked:      {}", pool.locked_liquidity());

    // ── 3. Quote, then swap 10 000 USDC for WETH ────────────────────────
    let path = vec![usdc, weth];
    let quoted = router.get_amounts_out(&registry, &path, Amount::new(10_000))?;
    let amounts = router.swap_exact_in(
        &registry,
        &mut ledger,
        &trader,
        &ExactInRoute {
            path,
            amount_in: Amount::new(10_000),
            amount_out_min: quoted[1],
            to: trader,
            deadline,
        },
    )?;
    let (r0, r1) = pool.reserves();
    println!("\n--- Swap: sell 10 000 USDC ---");
    println!("  Amount out:  {}", amounts[1]);
    println!("  Reserves:    {r0} / {r1}");
    println!("  WETH held:   {}", ledger.balance_of(&weth, &trader));

    // ── 4. Withdraw half of the position ────────────────────────────────
    let half = pool
        .liquidity_of(&provider)
        .safe_div(&Liquidity::new(2), Rounding::Down)?;
    let removed = pool.remove_liquidity(
        &mut ledger,
        &provider,
        &RemoveLiquidityRequest {
            liquidity: half,
            amount0_min: Amount::ZERO,
            amount1_min: Amount::ZERO,
            to: provider,
            deadline,
        },
    )?;
    println!("\n--- Remove Liquidity ---");
    println!("  Burned:      {}", removed.liquidity);
    println!("  Returned:    {} + {}", removed.amount0, removed.amount1);
    println!("  Total liq:   {}", pool.total_liquidity());

    println!("\n=== Done ===");
    Ok(())
}
