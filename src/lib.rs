//! # Hydra Pair
//!
//! Constant-product liquidity pair engine (Uniswap V2 style): pools of two
//! assets priced by `x · y = k`, fungible liquidity units, a registry with
//! one pool per asset pair, and a router for multi-hop swaps.
//!
//! Asset balances live outside the crate behind the
//! [`AssetLedger`](traits::AssetLedger) trait. Every mutating operation is
//! all-or-nothing: if any transfer fails, completed transfers are reversed
//! and no pool state changes.
//!
//! # Quick Start
//!
//! ```rust
//! use hydra_pair::prelude::*;
//!
//! let usdc = AssetId::from_bytes([1u8; 32]);
//! let weth = AssetId::from_bytes([2u8; 32]);
//! let alice = AccountId::from_bytes([0xa1; 32]);
//! let bob = AccountId::from_bytes([0xb0; 32]);
//!
//! // 1. One registry, one router
//! let registry = PoolRegistry::new(PoolConfig::default());
//! let router = SwapRouter::default();
//! let pool = registry.get_or_create_pool(usdc, weth).expect("distinct assets");
//!
//! // 2. Fund accounts and approve the pool and the router
//! let mut ledger = InMemoryLedger::new();
//! for asset in [usdc, weth] {
//!     for user in [alice, bob] {
//!         ledger.mint(&asset, &user, Amount::new(100_000)).expect("mint");
//!         ledger.approve(&asset, &user, &pool.account(), Amount::MAX).expect("approve");
//!         ledger.approve(&asset, &user, &router.account(), Amount::MAX).expect("approve");
//!     }
//! }
//!
//! // 3. Provide liquidity
//! let deadline = Deadline::after(registry.clock(), 86_400);
//! let added = pool
//!     .add_liquidity(&mut ledger, &alice, &AddLiquidityRequest {
//!         amount0_desired: Amount::new(10_000),
//!         amount1_desired: Amount::new(10_000),
//!         amount0_min: Amount::ZERO,
//!         amount1_min: Amount::ZERO,
//!         to: alice,
//!         deadline,
//!     })
//!     .expect("liquidity added");
//! assert_eq!(added.liquidity, Liquidity::new(9_000));
//!
//! // 4. Swap through the router
//! let amounts = router
//!     .swap_exact_in(&registry, &mut ledger, &bob, &ExactInRoute {
//!         path: vec![usdc, weth],
//!         amount_in: Amount::new(2_000),
//!         amount_out_min: Amount::new(1),
//!         to: bob,
//!         deadline,
//!     })
//!     .expect("swap");
//! assert_eq!(amounts[1], Amount::new(1_662));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │ SwapRouter  │  multi-hop paths, all pools locked in pair order
//! └──────┬──────┘
//!        │ pool_for(a, b)
//!        ▼
//! ┌─────────────┐
//! │PoolRegistry │  canonical AssetPair → Arc<LiquidityPool>
//! └──────┬──────┘
//!        │ get_or_create_pool
//!        ▼
//! ┌─────────────┐
//! │LiquidityPool│  reserves, liquidity units, add / remove / swap
//! └──────┬──────┘
//!        │ Settlement journal
//!        ▼
//! ┌─────────────┐
//! │ AssetLedger │  balances and allowances (external)
//! └─────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`Liquidity`](domain::Liquidity), [`AssetPair`](domain::AssetPair), etc. |
//! | [`math`]   | Checked 256-bit arithmetic, `isqrt`, pair formulas |
//! | [`pools`]  | [`LiquidityPool`](pools::LiquidityPool) and its request/outcome types |
//! | [`registry`] | [`PoolRegistry`](registry::PoolRegistry) |
//! | [`router`] | [`SwapRouter`](router::SwapRouter) |
//! | [`ledger`] | [`InMemoryLedger`](ledger::InMemoryLedger) and transfer settlement |
//! | [`traits`] | Seams: [`AssetLedger`](traits::AssetLedger), [`Clock`](traits::Clock) |
//! | [`config`] | [`PoolConfig`](config::PoolConfig) |
//! | [`error`]  | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod config;
pub mod domain;
pub mod error;
pub mod ledger;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod registry;
pub mod router;
pub mod traits;
