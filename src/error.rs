//! Unified error types for the pair engine.
//!
//! All fallible operations across the crate return [`AmmError`] as their
//! error type. Every variant describes a local, synchronous failure: the
//! operation that produced it has not mutated any pool state or moved any
//! asset.
//!
//! Broken constant-product invariants are not represented here. They are
//! unreachable with correct arithmetic and abort the operation with a panic
//! instead of travelling back to the caller as an ordinary error.

use thiserror::Error;

use crate::domain::{AssetId, Timestamp};

/// Failure reported by an [`AssetLedger`](crate::traits::AssetLedger)
/// transfer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransferError {
    /// The owner's balance does not cover the transfer.
    #[error("insufficient balance")]
    InsufficientBalance,

    /// The spender's allowance does not cover the transfer.
    #[error("insufficient allowance")]
    InsufficientAllowance,

    /// The asset is not known to the ledger.
    #[error("unknown asset")]
    UnknownAsset,

    /// The ledger refused the transfer for an implementation-specific reason.
    #[error("transfer rejected: {0}")]
    Rejected(String),
}

/// Unified error type for all pool, registry and router operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmmError {
    /// The call executed after its caller-supplied deadline.
    #[error("deadline {deadline} expired (now {now})")]
    DeadlineExpired {
        /// Deadline supplied by the caller.
        deadline: Timestamp,
        /// Clock reading at execution time.
        now: Timestamp,
    },

    /// Both sides of a pair refer to the same asset.
    #[error("identical assets")]
    IdenticalAssets,

    /// A ratio-adjusted or withdrawn amount fell below the caller's minimum.
    #[error("insufficient amount: {0}")]
    InsufficientAmount(&'static str),

    /// The swap output is zero or below the caller's minimum.
    #[error("insufficient output amount")]
    InsufficientOutputAmount,

    /// The swap input is zero.
    #[error("insufficient input amount")]
    InsufficientInputAmount,

    /// A reserve involved in the operation is empty or too small.
    #[error("insufficient liquidity")]
    InsufficientLiquidity,

    /// The deposit would mint zero liquidity units.
    #[error("insufficient liquidity minted")]
    InsufficientLiquidityMinted,

    /// The burn would return nothing of either asset.
    #[error("insufficient liquidity burned")]
    InsufficientLiquidityBurned,

    /// The owner holds fewer liquidity units than requested.
    #[error("insufficient liquidity balance")]
    InsufficientBalance,

    /// A swap path has fewer than two assets.
    #[error("invalid path")]
    InvalidPath,

    /// No pool exists for a pair on the path.
    #[error("pair not found")]
    PairNotFound,

    /// An exact-out route would need more input than the caller allows.
    #[error("excessive input amount")]
    ExcessiveInputAmount,

    /// Assets or liquidity units would be sent to the zero account.
    #[error("invalid recipient")]
    InvalidRecipient,

    /// The pool is held by another operation beyond the lock timeout.
    #[error("pool locked")]
    Locked,

    /// An asset transfer into or out of pool custody failed.
    #[error("transfer of asset {asset} failed: {source}")]
    TransferFailed {
        /// Asset whose transfer failed.
        asset: AssetId,
        /// Failure reported by the ledger.
        #[source]
        source: TransferError,
    },

    /// Checked arithmetic overflowed.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Checked arithmetic underflowed.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}

impl AmmError {
    /// Returns `true` if resubmitting the same request later, or with looser
    /// bounds, may succeed.
    ///
    /// Caller bugs such as [`IdenticalAssets`](Self::IdenticalAssets) or
    /// [`InvalidPath`](Self::InvalidPath) are never retryable as-is.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::DeadlineExpired { .. }
                | Self::InsufficientAmount(_)
                | Self::InsufficientOutputAmount
                | Self::ExcessiveInputAmount
                | Self::InsufficientLiquidity
                | Self::Locked
                | Self::TransferFailed { .. }
        )
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T, E = AmmError> = core::result::Result<T, E>;

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(AmmError::IdenticalAssets.to_string(), "identical assets");
        assert_eq!(
            AmmError::Overflow("reserve").to_string(),
            "arithmetic overflow: reserve"
        );
        let err = AmmError::DeadlineExpired {
            deadline: Timestamp::from_secs(10),
            now: Timestamp::from_secs(11),
        };
        assert_eq!(err.to_string(), "deadline 10 expired (now 11)");
    }

    #[test]
    fn transfer_failure_keeps_source() {
        use std::error::Error as _;
        let err = AmmError::TransferFailed {
            asset: AssetId::from_bytes([7u8; 32]),
            source: TransferError::InsufficientAllowance,
        };
        let Some(source) = err.source() else {
            panic!("expected a source error");
        };
        assert_eq!(source.to_string(), "insufficient allowance");
    }

    #[test]
    fn retry_classification() {
        assert!(AmmError::InsufficientOutputAmount.is_retryable());
        assert!(AmmError::Locked.is_retryable());
        assert!(!AmmError::IdenticalAssets.is_retryable());
        assert!(!AmmError::InvalidPath.is_retryable());
        assert!(!AmmError::InvalidRecipient.is_retryable());
    }
}
