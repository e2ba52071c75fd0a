//! Fungible-asset interface consumed by pools and the router.
//!
//! The pool never holds asset balances itself. Deposits are pulled into the
//! pool's custody account with [`AssetLedger::transfer_from`] and outputs are
//! pushed with [`AssetLedger::transfer`]. Neither call is assumed to
//! succeed; a failure aborts the whole operation.

use crate::domain::{AccountId, Amount, AssetId};
use crate::error::TransferError;

/// Balance, allowance and transfer operations over many assets.
///
/// One ledger instance multiplexes every asset by [`AssetId`], which is how
/// a pool reaches both sides of its pair through a single handle.
pub trait AssetLedger {
    /// Balance of `owner` in `asset`.
    fn balance_of(&self, asset: &AssetId, owner: &AccountId) -> Amount;

    /// Remaining amount `spender` may move out of `owner`'s balance.
    fn allowance(&self, asset: &AssetId, owner: &AccountId, spender: &AccountId) -> Amount;

    /// Grants `spender` an allowance of `amount` over `owner`'s balance.
    ///
    /// # Errors
    ///
    /// Returns a [`TransferError`] if the ledger rejects the approval.
    fn approve(
        &mut self,
        asset: &AssetId,
        owner: &AccountId,
        spender: &AccountId,
        amount: Amount,
    ) -> Result<(), TransferError>;

    /// Moves `amount` from `from` (the acting holder) to `to`.
    ///
    /// # Errors
    ///
    /// Returns a [`TransferError`] if the transfer cannot be performed.
    fn transfer(
        &mut self,
        asset: &AssetId,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), TransferError>;

    /// Moves `amount` from `owner` to `to` on behalf of `spender`,
    /// consuming allowance.
    ///
    /// # Errors
    ///
    /// Returns a [`TransferError`] if the balance or allowance is
    /// insufficient, or if the ledger rejects the transfer.
    fn transfer_from(
        &mut self,
        asset: &AssetId,
        spender: &AccountId,
        owner: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), TransferError>;
}
