//! All-or-nothing settlement of the transfers made by one operation.

use tracing::{error, warn};

use crate::domain::{AccountId, Amount, AssetId};
use crate::error::AmmError;
use crate::traits::AssetLedger;

/// One completed transfer, kept so it can be reversed.
#[derive(Debug, Clone, Copy)]
struct Movement {
    asset: AssetId,
    from: AccountId,
    to: AccountId,
    amount: Amount,
    /// Set for pulls, whose consumed allowance is refunded on unwind.
    spender: Option<AccountId>,
}

/// Journal of the transfers performed by a single pool or router operation.
///
/// Transfers are executed immediately and recorded. Calling
/// [`commit`](Self::commit) keeps them; dropping the settlement without
/// committing (including on early return through `?`) reverses every
/// recorded transfer in reverse order, so a failed operation leaves the
/// ledger as it found it.
pub(crate) struct Settlement<'l, L: AssetLedger + ?Sized> {
    ledger: &'l mut L,
    journal: Vec<Movement>,
    committed: bool,
}

impl<'l, L: AssetLedger + ?Sized> Settlement<'l, L> {
    pub(crate) fn new(ledger: &'l mut L) -> Self {
        Self {
            ledger,
            journal: Vec::new(),
            committed: false,
        }
    }

    /// Pulls `amount` of `asset` from `owner` into `to` on behalf of
    /// `spender`. Zero amounts are skipped.
    pub(crate) fn pull(
        &mut self,
        asset: AssetId,
        spender: AccountId,
        owner: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), AmmError> {
        if amount.is_zero() {
            return Ok(());
        }
        self.ledger
            .transfer_from(&asset, &spender, &owner, &to, amount)
            .map_err(|source| {
                warn!(%asset, %owner, %amount, %source, "pull into custody failed");
                AmmError::TransferFailed { asset, source }
            })?;
        self.journal.push(Movement {
            asset,
            from: owner,
            to,
            amount,
            spender: Some(spender),
        });
        Ok(())
    }

    /// Pushes `amount` of `asset` from `from` to `to`. Zero amounts are
    /// skipped.
    pub(crate) fn push(
        &mut self,
        asset: AssetId,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), AmmError> {
        if amount.is_zero() {
            return Ok(());
        }
        self.ledger
            .transfer(&asset, &from, &to, amount)
            .map_err(|source| {
                warn!(%asset, %to, %amount, %source, "push out of custody failed");
                AmmError::TransferFailed { asset, source }
            })?;
        self.journal.push(Movement {
            asset,
            from,
            to,
            amount,
            spender: None,
        });
        Ok(())
    }

    /// Keeps every recorded transfer.
    pub(crate) fn commit(mut self) {
        self.committed = true;
    }

    fn unwind(&mut self) {
        while let Some(m) = self.journal.pop() {
            if let Err(source) = self.ledger.transfer(&m.asset, &m.to, &m.from, m.amount) {
                error!(
                    asset = %m.asset,
                    from = %m.to,
                    to = %m.from,
                    amount = %m.amount,
                    %source,
                    "failed to reverse transfer during unwind"
                );
                continue;
            }
            if let Some(spender) = m.spender {
                self.refund_allowance(&m, &spender);
            }
        }
    }

    fn refund_allowance(&mut self, m: &Movement, spender: &AccountId) {
        let current = self.ledger.allowance(&m.asset, &m.from, spender);
        if current == Amount::MAX {
            return;
        }
        let restored = current.checked_add(&m.amount).unwrap_or(Amount::MAX);
        if let Err(source) = self.ledger.approve(&m.asset, &m.from, spender, restored) {
            error!(asset = %m.asset, owner = %m.from, %source, "failed to refund allowance");
        }
    }
}

impl<L: AssetLedger + ?Sized> Drop for Settlement<'_, L> {
    fn drop(&mut self) {
        if !self.committed && !self.journal.is_empty() {
            warn!(transfers = self.journal.len(), "unwinding uncommitted settlement");
            self.unwind();
        }
    }
}
