//! Domain value types used throughout the pair engine.
//!
//! Newtypes for amounts, liquidity units, fees, asset and account
//! identifiers, canonical pairs and deadlines. Constructors enforce their
//! invariants so the pool code can rely on them.

mod amount;
mod asset_id;
mod asset_pair;
mod basis_points;
mod deadline;
mod fee_tier;
mod liquidity;
mod rounding;

pub use amount::Amount;
pub use asset_id::{AccountId, AssetId};
pub use asset_pair::AssetPair;
pub use basis_points::{BasisPoints, BPS_DENOMINATOR};
pub use deadline::{Deadline, Timestamp};
pub use fee_tier::FeeTier;
pub use liquidity::Liquidity;
pub use rounding::Rounding;
