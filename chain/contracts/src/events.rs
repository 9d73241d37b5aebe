//! Contract event types
//!
//! Events emitted by the wrapper for off-chain indexing. Each operation that
//! changes observable state appends exactly one event record, in the order
//! the operations completed.

use serde::{Deserialize, Serialize};
use types::ids::Address;
use types::numeric::Amount;

/// Emitted when a custody account is provisioned for a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustodyAccountCreated {
    pub user: Address,
    pub account: Address,
}

/// Emitted when underlying coins are collected and synthetic tokens minted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wrapped {
    pub amount: Amount,
    pub user: Address,
}

/// Emitted when synthetic tokens are burned and underlying coins returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unwrapped {
    pub amount: Amount,
    pub user: Address,
}

/// Enum wrapper for all contract events, enabling uniform handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractEvent {
    CustodyAccountCreated(CustodyAccountCreated),
    Wrapped(Wrapped),
    Unwrapped(Unwrapped),
}
