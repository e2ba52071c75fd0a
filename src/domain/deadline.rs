//! Timestamps and caller-supplied deadlines.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AmmError;
use crate::traits::Clock;

/// Seconds since the unix epoch.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    /// Creates a timestamp from unix seconds.
    #[must_use]
    pub const fn from_secs(secs: u64) -> Self {
        Self(secs)
    }

    /// Returns the unix seconds.
    #[must_use]
    pub const fn as_secs(&self) -> u64 {
        self.0
    }

    /// Returns the timestamp `secs` later, saturating at `u64::MAX`.
    #[must_use]
    pub const fn saturating_add_secs(&self, secs: u64) -> Self {
        Self(self.0.saturating_add(secs))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The latest time at which a pool-mutating call may execute.
///
/// A call executing at `now` is rejected when `now > deadline`; a deadline
/// equal to the current time is still honoured.
///
/// # Examples
///
/// ```
/// use hydra_pair::domain::{Deadline, Timestamp};
///
/// let deadline = Deadline::at(Timestamp::from_secs(100));
/// assert!(deadline.check(Timestamp::from_secs(100)).is_ok());
/// assert!(deadline.check(Timestamp::from_secs(101)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deadline(Timestamp);

impl Deadline {
    /// A deadline that never expires.
    pub const NEVER: Self = Self(Timestamp(u64::MAX));

    /// Deadline at an absolute timestamp.
    #[must_use]
    pub const fn at(timestamp: Timestamp) -> Self {
        Self(timestamp)
    }

    /// Deadline `tolerance_secs` after the clock's current reading.
    #[must_use]
    pub fn after(clock: &dyn Clock, tolerance_secs: u64) -> Self {
        Self(clock.now().saturating_add_secs(tolerance_secs))
    }

    /// Returns the deadline timestamp.
    #[must_use]
    pub const fn timestamp(&self) -> Timestamp {
        self.0
    }

    /// Fails if `now` is past the deadline.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DeadlineExpired`] when `now > deadline`.
    pub fn check(&self, now: Timestamp) -> Result<(), AmmError> {
        if now > self.0 {
            return Err(AmmError::DeadlineExpired {
                deadline: self.0,
                now,
            });
        }
        Ok(())
    }
}
