//! Canonically ordered pair of distinct assets.

use core::fmt;

use alloy_primitives::keccak256;
use serde::{Deserialize, Serialize};

use super::{AccountId, AssetId};
use crate::error::AmmError;

/// Domain separator mixed into pool custody account derivation.
const CUSTODY_SEED: &[u8] = b"hydra-pair";

/// An unordered pair of distinct assets stored in canonical order.
///
/// `asset0() < asset1()` always holds, so `(A, B)` and `(B, A)` produce the
/// same pair and therefore the same registry key.
///
/// # Examples
///
/// ```
/// use hydra_pair::domain::{AssetId, AssetPair};
///
/// let a = AssetId::from_bytes([1u8; 32]);
/// let b = AssetId::from_bytes([2u8; 32]);
///
/// let pair = AssetPair::new(b, a).expect("distinct assets");
/// assert_eq!(pair.asset0(), a);
/// assert_eq!(pair.asset1(), b);
/// assert_eq!(pair, AssetPair::new(a, b).expect("distinct assets"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AssetPair {
    asset0: AssetId,
    asset1: AssetId,
}

impl AssetPair {
    /// Creates a canonically ordered pair.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::IdenticalAssets`] if both identifiers are equal.
    pub fn new(asset_a: AssetId, asset_b: AssetId) -> Result<Self, AmmError> {
        if asset_a == asset_b {
            return Err(AmmError::IdenticalAssets);
        }
        let (asset0, asset1) = if asset_a < asset_b {
            (asset_a, asset_b)
        } else {
            (asset_b, asset_a)
        };
        Ok(Self { asset0, asset1 })
    }

    /// Returns the lower asset.
    #[must_use]
    pub const fn asset0(&self) -> AssetId {
        self.asset0
    }

    /// Returns the higher asset.
    #[must_use]
    pub const fn asset1(&self) -> AssetId {
        self.asset1
    }

    /// Returns `true` if `asset` is part of this pair.
    #[must_use]
    pub fn contains(&self, asset: &AssetId) -> bool {
        self.asset0 == *asset || self.asset1 == *asset
    }

    /// Returns `Ok(true)` if `asset` is `asset0`, `Ok(false)` if it is
    /// `asset1`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidPath`] if `asset` is not in the pair.
    pub fn is_asset0(&self, asset: &AssetId) -> Result<bool, AmmError> {
        if *asset == self.asset0 {
            Ok(true)
        } else if *asset == self.asset1 {
            Ok(false)
        } else {
            Err(AmmError::InvalidPath)
        }
    }

    /// Deterministic custody account of the pool serving this pair.
    ///
    /// `keccak256("hydra-pair" ‖ asset0 ‖ asset1)`.
    #[must_use]
    pub fn custody_account(&self) -> AccountId {
        let mut preimage = Vec::with_capacity(CUSTODY_SEED.len() + 64);
        preimage.extend_from_slice(CUSTODY_SEED);
        preimage.extend_from_slice(self.asset0.as_bytes());
        preimage.extend_from_slice(self.asset1.as_bytes());
        AccountId::from_bytes(keccak256(&preimage).0)
    }
}

impl fmt::Display for AssetPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.asset0, self.asset1)
    }
}
