//! In-process asset ledger.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::domain::{AccountId, Amount, AssetId};
use crate::error::{AmmError, TransferError};
use crate::traits::AssetLedger;

/// A multi-asset ledger of balances and allowances kept in memory.
///
/// Behaves like a set of ERC-20 style tokens: an allowance of
/// [`Amount::MAX`] is treated as infinite and never decremented. Assets come
/// into existence on their first [`mint`](Self::mint); transfers of unknown
/// assets fail with [`TransferError::UnknownAsset`].
///
/// # Examples
///
/// ```
/// use hydra_pair::domain::{AccountId, Amount, AssetId};
/// use hydra_pair::ledger::InMemoryLedger;
/// use hydra_pair::traits::AssetLedger;
///
/// let usdt = AssetId::from_bytes([1u8; 32]);
/// let alice = AccountId::from_bytes([0xa1; 32]);
/// let bob = AccountId::from_bytes([0xb0; 32]);
///
/// let mut ledger = InMemoryLedger::new();
/// ledger.mint(&usdt, &alice, Amount::new(100)).expect("mint");
/// ledger.transfer(&usdt, &alice, &bob, Amount::new(40)).expect("transfer");
/// assert_eq!(ledger.balance_of(&usdt, &bob), Amount::new(40));
/// ```
#[derive(Debug, Default, Clone)]
pub struct InMemoryLedger {
    supplies: HashMap<AssetId, Amount>,
    balances: HashMap<(AssetId, AccountId), Amount>,
    allowances: HashMap<(AssetId, AccountId, AccountId), Amount>,
    halted: HashSet<AssetId>,
}

impl InMemoryLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues `amount` new units of `asset` to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the total supply would exceed 256 bits.
    pub fn mint(&mut self, asset: &AssetId, to: &AccountId, amount: Amount) -> Result<(), AmmError> {
        let supply = self.supplies.entry(*asset).or_default();
        *supply = supply
            .checked_add(&amount)
            .ok_or(AmmError::Overflow("total supply overflow"))?;
        let balance = self.balances.entry((*asset, *to)).or_default();
        *balance = balance
            .checked_add(&amount)
            .ok_or(AmmError::Overflow("balance overflow"))?;
        debug!(%asset, %to, %amount, "minted");
        Ok(())
    }

    /// Total issued supply of `asset`.
    #[must_use]
    pub fn total_supply(&self, asset: &AssetId) -> Amount {
        self.supplies.get(asset).copied().unwrap_or_default()
    }

    /// Makes every subsequent transfer of `asset` fail.
    pub fn halt_transfers(&mut self, asset: &AssetId) {
        self.halted.insert(*asset);
    }

    /// Re-enables transfers of `asset`.
    pub fn resume_transfers(&mut self, asset: &AssetId) {
        self.halted.remove(asset);
    }

    fn ensure_transferable(&self, asset: &AssetId) -> Result<(), TransferError> {
        if !self.supplies.contains_key(asset) {
            return Err(TransferError::UnknownAsset);
        }
        if self.halted.contains(asset) {
            return Err(TransferError::Rejected("transfers halted".to_owned()));
        }
        Ok(())
    }

    fn move_balance(
        &mut self,
        asset: &AssetId,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), TransferError> {
        let from_balance = self.balance_of(asset, from);
        let new_from = from_balance
            .checked_sub(&amount)
            .ok_or(TransferError::InsufficientBalance)?;
        self.balances.insert((*asset, *from), new_from);

        // Total supply bounds every balance, so the credit cannot overflow.
        let to_balance = self.balances.entry((*asset, *to)).or_default();
        *to_balance = to_balance.checked_add(&amount).unwrap_or(Amount::MAX);
        Ok(())
    }
}

impl AssetLedger for InMemoryLedger {
    fn balance_of(&self, asset: &AssetId, owner: &AccountId) -> Amount {
        self.balances
            .get(&(*asset, *owner))
            .copied()
            .unwrap_or_default()
    }

    fn allowance(&self, asset: &AssetId, owner: &AccountId, spender: &AccountId) -> Amount {
        self.allowances
            .get(&(*asset, *owner, *spender))
            .copied()
            .unwrap_or_default()
    }

    fn approve(
        &mut self,
        asset: &AssetId,
        owner: &AccountId,
        spender: &AccountId,
        amount: Amount,
    ) -> Result<(), TransferError> {
        if !self.supplies.contains_key(asset) {
            return Err(TransferError::UnknownAsset);
        }
        self.allowances.insert((*asset, *owner, *spender), amount);
        Ok(())
    }

    fn transfer(
        &mut self,
        asset: &AssetId,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), TransferError> {
        self.ensure_transferable(asset)?;
        self.move_balance(asset, from, to, amount)
    }

    fn transfer_from(
        &mut self,
        asset: &AssetId,
        spender: &AccountId,
        owner: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), TransferError> {
        self.ensure_transferable(asset)?;
        let allowance = self.allowance(asset, owner, spender);
        let remaining = if allowance == Amount::MAX {
            allowance
        } else {
            allowance
                .checked_sub(&amount)
                .ok_or(TransferError::InsufficientAllowance)?
        };
        self.move_balance(asset, owner, to, amount)?;
        self.allowances.insert((*asset, *owner, *spender), remaining);
        Ok(())
    }
}
