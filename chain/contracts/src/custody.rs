//! Custody accounts — per-user coin deposit addresses under wrapper control
//!
//! A custody account is a coin address users deposit into. Only its
//! controller (the wrapper that created it) can move funds out, through
//! [`CustodyAccount::collect`].

use serde::{Deserialize, Serialize};
use types::ids::Address;
use types::numeric::Amount;

use crate::coin::AssetLedger;
use crate::errors::CustodyError;

/// A coin address whose outflows are gated on a single controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustodyAccount {
    address: Address,
    controller: Address,
}

impl CustodyAccount {
    /// Provision a custody account controlled by `controller`.
    ///
    /// Construction is restricted to the wrapper so every live account is
    /// registered and controlled by it.
    pub(crate) fn new(controller: Address) -> Self {
        Self {
            address: Address::new(),
            controller,
        }
    }

    /// The coin address users deposit into.
    pub fn address(&self) -> Address {
        self.address
    }

    /// The sole address allowed to collect from this account.
    pub fn controller(&self) -> Address {
        self.controller
    }

    /// Coins currently sitting at this account's address.
    pub fn balance(&self, coin: &dyn AssetLedger) -> Amount {
        coin.balance_of(self.address)
    }

    /// Release `amount` coins from this account to the controller.
    ///
    /// Rejects any caller other than the controller before touching the coin
    /// ledger.
    pub fn collect(
        &self,
        coin: &mut dyn AssetLedger,
        caller: Address,
        amount: Amount,
    ) -> Result<(), CustodyError> {
        if caller != self.controller {
            return Err(CustodyError::NotController {
                caller: caller.to_string(),
                controller: self.controller.to_string(),
            });
        }

        coin.transfer(self.address, amount, self.controller)?;
        Ok(())
    }
}
