//! Coin ledger — the underlying asset the wrapper takes custody of
//!
//! The wrapper core never manipulates coin balances directly; it goes through
//! the [`AssetLedger`] trait. [`CoinLedger`] is the in-memory implementation
//! used in production flows and tests. Test suites substitute their own
//! implementations to inject failures or record call ordering.

use std::collections::HashMap;

use types::ids::Address;
use types::numeric::Amount;

use crate::errors::AssetError;

/// Interface the wrapper uses to move the underlying coin.
///
/// Implementations must debit the sender and credit the receiver atomically:
/// a returned error means no balance changed.
pub trait AssetLedger {
    /// Current coin balance of `owner`. Unknown addresses hold zero.
    fn balance_of(&self, owner: Address) -> Amount;

    /// Move `amount` coins from `sender` to `receiver`.
    fn transfer(
        &mut self,
        sender: Address,
        amount: Amount,
        receiver: Address,
    ) -> Result<(), AssetError>;
}

/// In-memory coin ledger keyed by address.
#[derive(Debug, Default)]
pub struct CoinLedger {
    balances: HashMap<Address, Amount>,
}

impl CoinLedger {
    pub fn new() -> Self {
        Self {
            balances: HashMap::new(),
        }
    }

    /// Issue `amount` new coins to `owner`.
    ///
    /// Issuance sits outside the wrapper protocol; it exists so flows and
    /// tests can fund accounts.
    pub fn credit(&mut self, owner: Address, amount: Amount) -> Result<(), AssetError> {
        let balance = self.balances.entry(owner).or_insert(0);
        *balance = balance.checked_add(amount).ok_or(AssetError::Overflow)?;
        Ok(())
    }
}

impl AssetLedger for CoinLedger {
    fn balance_of(&self, owner: Address) -> Amount {
        self.balances.get(&owner).copied().unwrap_or(0)
    }

    fn transfer(
        &mut self,
        sender: Address,
        amount: Amount,
        receiver: Address,
    ) -> Result<(), AssetError> {
        let available = self.balance_of(sender);
        if available < amount {
            return Err(AssetError::InsufficientBalance {
                owner: sender.to_string(),
                required: amount,
                available,
            });
        }

        if sender == receiver {
            return Ok(());
        }

        // Check the credit side before touching either balance so a failed
        // transfer leaves the ledger untouched.
        let receiver_balance = self.balance_of(receiver);
        let credited = receiver_balance
            .checked_add(amount)
            .ok_or(AssetError::Overflow)?;

        self.balances.insert(sender, available - amount);
        self.balances.insert(receiver, credited);
        Ok(())
    }
}
