//! Wrapper ledger — custody registry, wrap/unwrap protocol, synthetic issuance
//!
//! The wrapper provisions one custody account per user, pulls deposited coins
//! into its own reserve on wrap, and issues synthetic tokens 1:1. Unwrap burns
//! synthetic tokens first and only then releases coins, so a re-entering
//! external ledger always observes the already-reduced balance.

use std::collections::HashMap;

use tracing::{debug, info, warn};
use types::ids::Address;
use types::numeric::Amount;

use crate::coin::AssetLedger;
use crate::custody::CustodyAccount;
use crate::errors::{AssetError, WrapperError};
use crate::events::{ContractEvent, CustodyAccountCreated, Unwrapped, Wrapped};
use crate::token::{TokenLedger, DECIMALS};

/// Core wrapper contract managing custody accounts and synthetic issuance.
///
/// The registry maps each user to at most one custody account, created on
/// request and never reassigned. Coins the wrapper has collected sit at its
/// own address in the external coin ledger and back the synthetic supply one
/// to one.
///
/// Both state transitions keep the backing relation one-sided at every step:
/// wrap collects coins before minting, unwrap burns before releasing.
#[derive(Debug)]
pub struct WrapperLedger {
    /// The wrapper's own address in the external coin ledger (its reserve).
    address: Address,
    /// Address of the underlying coin asset this wrapper is bound to.
    underlying: Address,
    /// Registry: user -> custody account. At most one entry per user.
    registry: HashMap<Address, CustodyAccount>,
    /// Embedded synthetic token ledger. Mint and burn happen only here.
    token: TokenLedger,
    /// Emitted events log (append-only)
    events: Vec<ContractEvent>,
    /// Cumulative units ever wrapped (observational counter)
    total_wrapped: Amount,
    /// Cumulative units ever unwrapped (observational counter)
    total_unwrapped: Amount,
}

impl WrapperLedger {
    /// Create a wrapper bound to the given underlying coin asset.
    pub fn new(underlying: Address) -> Self {
        Self {
            address: Address::new(),
            underlying,
            registry: HashMap::new(),
            token: TokenLedger::new(),
            events: Vec::new(),
            total_wrapped: 0,
            total_unwrapped: 0,
        }
    }

    // ───────────────────────── Custody Accounts ─────────────────────────

    /// Provision a custody account for `caller`.
    ///
    /// One account per user for the lifetime of the ledger; a second call for
    /// the same user fails and leaves the registry untouched. Emits
    /// `CustodyAccountCreated`.
    pub fn create_custody_account(
        &mut self,
        caller: Address,
    ) -> Result<ContractEvent, WrapperError> {
        if self.registry.contains_key(&caller) {
            return Err(WrapperError::AccountAlreadyExists {
                user: caller.to_string(),
            });
        }

        let account = CustodyAccount::new(self.address);
        self.registry.insert(caller, account);

        let event = ContractEvent::CustodyAccountCreated(CustodyAccountCreated {
            user: caller,
            account: account.address(),
        });
        self.events.push(event.clone());
        info!(user = %caller, account = %account.address(), "Custody account created");
        Ok(event)
    }

    /// Look up the custody account registered for `user`, if any.
    pub fn custody_account_of(&self, user: &Address) -> Option<&CustodyAccount> {
        self.registry.get(user)
    }

    /// Full user -> custody account registry.
    pub fn registry(&self) -> &HashMap<Address, CustodyAccount> {
        &self.registry
    }

    // ───────────────────────── Wrap ─────────────────────────

    /// Convert `amount` custodied coins of `caller` into synthetic tokens.
    ///
    /// Validates: amount positive, custody account exists, custody balance
    /// sufficient. Collects the coins into the wrapper's reserve, then mints
    /// 1:1 to the caller. Emits `Wrapped`.
    pub fn wrap(
        &mut self,
        coin: &mut dyn AssetLedger,
        caller: Address,
        amount: Amount,
    ) -> Result<ContractEvent, WrapperError> {
        if amount == 0 {
            return Err(WrapperError::InvalidAmount);
        }

        let account = self
            .registry
            .get(&caller)
            .copied()
            .ok_or_else(|| WrapperError::NoCustodyAccount {
                user: caller.to_string(),
            })?;

        let available = account.balance(coin);
        if available < amount {
            return Err(WrapperError::InsufficientCustodyFunds {
                required: amount,
                available,
            });
        }

        // Mint must be infallible once the coins have been collected.
        if self.token.total_supply().checked_add(amount).is_none() {
            return Err(WrapperError::Overflow);
        }

        // Collect before minting; synthetic units only exist once the
        // backing coins sit in the reserve.
        account.collect(coin, self.address, amount)?;
        self.token.mint(caller, amount)?;

        self.total_wrapped = self.total_wrapped.saturating_add(amount);
        let event = ContractEvent::Wrapped(Wrapped {
            amount,
            user: caller,
        });
        self.events.push(event.clone());
        debug!(user = %caller, amount, "Wrapped custody funds");
        Ok(event)
    }

    // ───────────────────────── Unwrap ─────────────────────────

    /// Convert `amount` synthetic tokens of `caller` back into coins.
    ///
    /// Burns the caller's tokens first, then releases coins from the
    /// wrapper's reserve. If the release fails the burn is reversed, so a
    /// failed unwrap never costs the caller synthetic balance. Emits
    /// `Unwrapped`.
    pub fn unwrap(
        &mut self,
        coin: &mut dyn AssetLedger,
        caller: Address,
        amount: Amount,
    ) -> Result<ContractEvent, WrapperError> {
        if amount == 0 {
            return Err(WrapperError::InvalidAmount);
        }

        let available = self.token.balance_of(caller);
        if available < amount {
            return Err(WrapperError::InsufficientSyntheticBalance {
                required: amount,
                available,
            });
        }

        // Burn before the external release; a call re-entering through the
        // coin ledger already sees the reduced synthetic balance.
        self.token.burn(caller, amount)?;

        if let Err(err) = coin.transfer(self.address, amount, caller) {
            // Restore the burned units; no partial effect may survive a
            // failed release.
            self.token.mint(caller, amount)?;
            return Err(match err {
                AssetError::InsufficientBalance { available, .. } => {
                    warn!(
                        required = amount,
                        available, "Wrapper reserve below unwrap amount"
                    );
                    WrapperError::InsufficientWrapperReserve {
                        required: amount,
                        available,
                    }
                }
                other => other.into(),
            });
        }

        self.total_unwrapped = self.total_unwrapped.saturating_add(amount);
        let event = ContractEvent::Unwrapped(Unwrapped {
            amount,
            user: caller,
        });
        self.events.push(event.clone());
        debug!(user = %caller, amount, "Unwrapped to coin");
        Ok(event)
    }

    // ───────────────────────── Token Surface ─────────────────────────

    /// Synthetic token balance of `holder`.
    pub fn balance_of(&self, holder: Address) -> Amount {
        self.token.balance_of(holder)
    }

    /// Total synthetic tokens in circulation.
    pub fn total_supply(&self) -> Amount {
        self.token.total_supply()
    }

    /// Synthetic token precision. Always zero: whole units only.
    pub fn decimals(&self) -> u8 {
        DECIMALS
    }

    /// Transfer synthetic tokens between holders. Plain delegation; the
    /// backing reserve is untouched.
    pub fn transfer(
        &mut self,
        sender: Address,
        amount: Amount,
        receiver: Address,
    ) -> Result<(), WrapperError> {
        self.token.transfer(sender, amount, receiver)?;
        Ok(())
    }

    /// Read access to the embedded token ledger.
    pub fn token(&self) -> &TokenLedger {
        &self.token
    }

    // ───────────────────────── Queries ─────────────────────────

    /// The wrapper's own coin address (where the reserve is held).
    pub fn address(&self) -> Address {
        self.address
    }

    /// Address of the underlying coin asset.
    pub fn underlying(&self) -> Address {
        self.underlying
    }

    /// Cumulative units wrapped over the ledger's lifetime.
    pub fn total_wrapped(&self) -> Amount {
        self.total_wrapped
    }

    /// Cumulative units unwrapped over the ledger's lifetime.
    pub fn total_unwrapped(&self) -> Amount {
        self.total_unwrapped
    }

    /// True when the synthetic supply is internally consistent and fully
    /// backed by the wrapper's coin reserve.
    pub fn conservation_holds(&self, coin: &dyn AssetLedger) -> bool {
        self.token.supply_consistent() && self.token.total_supply() == coin.balance_of(self.address)
    }

    // ───────────────────────── Events ─────────────────────────

    /// Get all emitted events.
    pub fn events(&self) -> &[ContractEvent] {
        &self.events
    }

    /// Drain all events (consume and clear).
    pub fn drain_events(&mut self) -> Vec<ContractEvent> {
        std::mem::take(&mut self.events)
    }
}
