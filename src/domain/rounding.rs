//! Explicit rounding direction for integer division.

/// Rounding direction for divisions on domain types.
///
/// Every division in the crate names its direction so that rounding always
/// favours the pool: outputs round down, required inputs round up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor).
    Down,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction() {
        assert!(Rounding::Up.is_up());
        assert!(!Rounding::Down.is_up());
    }
}
