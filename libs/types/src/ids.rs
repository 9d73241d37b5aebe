//! Identity types for ledger participants
//!
//! Every addressable entity (users, custody accounts, the wrapper ledger
//! itself) is identified by an `Address`. Addresses use UUID v7 for
//! time-sortable ordering, enabling chronological queries over account
//! creation.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identity of a ledger participant.
///
/// Users, custody accounts, and the wrapper ledger all live in the same
/// address space: the underlying coin ledger keys balances by `Address`, and
/// the wrapper's registry maps user addresses to custody-account addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(Uuid);

impl Address {
    /// Allocate a fresh, unique address.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Create from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for Address {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
