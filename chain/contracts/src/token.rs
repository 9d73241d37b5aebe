//! Synthetic token ledger — mint, burn, transfer, supply tracking
//!
//! Tracks per-holder balances and the total synthetic supply. The wrapper is
//! the only component allowed to mint and burn, which it does strictly in
//! lockstep with coins entering and leaving its reserve.

use std::collections::HashMap;

use types::ids::Address;
use types::numeric::{checked_sum, Amount};

use crate::errors::TokenError;

/// Synthetic tokens are whole units, no fractional subdivision.
pub const DECIMALS: u8 = 0;

/// Balance book for the synthetic token.
///
/// `total_supply` is maintained redundantly alongside the balance map;
/// `supply_consistent` cross-checks the two. Zero balances are pruned so the
/// map only carries live holders.
#[derive(Debug, Default)]
pub struct TokenLedger {
    balances: HashMap<Address, Amount>,
    total_supply: Amount,
}

impl TokenLedger {
    pub fn new() -> Self {
        Self {
            balances: HashMap::new(),
            total_supply: 0,
        }
    }

    // ───────────────────────── Supply Changes ─────────────────────────

    /// Create `amount` tokens for `receiver`, growing the total supply.
    pub fn mint(&mut self, receiver: Address, amount: Amount) -> Result<(), TokenError> {
        if amount == 0 {
            return Err(TokenError::ZeroAmount);
        }

        let supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(TokenError::Overflow)?;

        // Supply bounds every individual balance, so this add cannot wrap
        // once the supply add succeeded.
        let balance = self.balances.entry(receiver).or_insert(0);
        *balance += amount;
        self.total_supply = supply;
        Ok(())
    }

    /// Destroy `amount` tokens held by `holder`, shrinking the total supply.
    pub fn burn(&mut self, holder: Address, amount: Amount) -> Result<(), TokenError> {
        if amount == 0 {
            return Err(TokenError::ZeroAmount);
        }

        let available = self.balance_of(holder);
        if available < amount {
            return Err(TokenError::InsufficientBalance {
                holder: holder.to_string(),
                required: amount,
                available,
            });
        }

        let supply = self
            .total_supply
            .checked_sub(amount)
            .ok_or(TokenError::Overflow)?;

        let remaining = available - amount;
        if remaining == 0 {
            self.balances.remove(&holder);
        } else {
            self.balances.insert(holder, remaining);
        }
        self.total_supply = supply;
        Ok(())
    }

    // ───────────────────────── Transfers ─────────────────────────

    /// Move `amount` tokens from `sender` to `receiver`. Supply is unchanged.
    pub fn transfer(
        &mut self,
        sender: Address,
        amount: Amount,
        receiver: Address,
    ) -> Result<(), TokenError> {
        if amount == 0 {
            return Err(TokenError::ZeroAmount);
        }

        let available = self.balance_of(sender);
        if available < amount {
            return Err(TokenError::InsufficientBalance {
                holder: sender.to_string(),
                required: amount,
                available,
            });
        }

        if sender == receiver {
            return Ok(());
        }

        let remaining = available - amount;
        if remaining == 0 {
            self.balances.remove(&sender);
        } else {
            self.balances.insert(sender, remaining);
        }
        // Receiver balance stays under total_supply, which already fits u64.
        let balance = self.balances.entry(receiver).or_insert(0);
        *balance += amount;
        Ok(())
    }

    // ───────────────────────── Queries ─────────────────────────

    /// Token balance of `holder`. Unknown addresses hold zero.
    pub fn balance_of(&self, holder: Address) -> Amount {
        self.balances.get(&holder).copied().unwrap_or(0)
    }

    /// Total tokens in circulation.
    pub fn total_supply(&self) -> Amount {
        self.total_supply
    }

    /// Number of addresses holding a nonzero balance.
    pub fn holder_count(&self) -> usize {
        self.balances.len()
    }

    /// Sum of every holder balance, checked against overflow.
    pub fn summed_balances(&self) -> Option<Amount> {
        checked_sum(self.balances.values().copied())
    }

    /// True when the balance map and the running total agree.
    pub fn supply_consistent(&self) -> bool {
        self.summed_balances() == Some(self.total_supply)
    }
}
