//! Opaque identifiers for assets and account holders.

use core::fmt;

use alloy_primitives::hex;
use serde::{Deserialize, Serialize};

/// A chain-agnostic identifier of a fungible asset.
///
/// Wraps a fixed-size `[u8; 32]` byte array. The derived byte-wise ordering
/// is the total order used to canonicalise asset pairs.
///
/// # Examples
///
/// ```
/// use hydra_pair::domain::AssetId;
///
/// let lo = AssetId::from_bytes([1u8; 32]);
/// let hi = AssetId::from_bytes([2u8; 32]);
/// assert!(lo < hi);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AssetId([u8; 32]);

impl AssetId {
    /// Creates an `AssetId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode_prefixed(self.0))
    }
}

/// Identity of a holder on the asset ledger: a user, a pool's custody
/// account, or a router.
///
/// [`AccountId::ZERO`] is reserved and never accepted as a recipient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AccountId([u8; 32]);

impl AccountId {
    /// The reserved all-zero account.
    pub const ZERO: Self = Self([0u8; 32]);

    /// Creates an `AccountId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns `true` for the reserved zero account.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode_prefixed(self.0))
    }
}
