//! Contract-specific error types
//!
//! Comprehensive error taxonomy for the coin ledger, synthetic token ledger,
//! custody accounts, and the wrapper protocol.

use thiserror::Error;
use types::numeric::Amount;

/// Failures reported by an underlying asset ledger.
///
/// The coin ledger is external to the wrapper core; apart from
/// `InsufficientBalance` (which the wrapper interprets), every failure is
/// treated as an opaque abort of the current operation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssetError {
    #[error("Insufficient coin balance for {owner}: required {required}, available {available}")]
    InsufficientBalance {
        owner: String,
        required: Amount,
        available: Amount,
    },

    #[error("Arithmetic overflow in coin balance calculation")]
    Overflow,

    #[error("Coin ledger rejected the transfer: {reason}")]
    Rejected { reason: String },
}

/// Synthetic token ledger errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TokenError {
    #[error(
        "Insufficient synthetic balance for {holder}: required {required}, available {available}"
    )]
    InsufficientBalance {
        holder: String,
        required: Amount,
        available: Amount,
    },

    #[error("Token amount must be positive")]
    ZeroAmount,

    #[error("Arithmetic overflow in supply calculation")]
    Overflow,
}

/// Custody-account-specific errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CustodyError {
    #[error("Unauthorized: caller {caller} is not the custody controller {controller}")]
    NotController { caller: String, controller: String },

    #[error("Asset ledger error: {0}")]
    Asset(#[from] AssetError),
}

/// Wrapper-protocol errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WrapperError {
    #[error("Amount must be positive")]
    InvalidAmount,

    #[error("Custody account already exists for {user}")]
    AccountAlreadyExists { user: String },

    #[error("No custody account for {user}")]
    NoCustodyAccount { user: String },

    #[error("Insufficient custody funds: required {required}, available {available}")]
    InsufficientCustodyFunds {
        required: Amount,
        available: Amount,
    },

    #[error("Insufficient synthetic balance: required {required}, available {available}")]
    InsufficientSyntheticBalance {
        required: Amount,
        available: Amount,
    },

    #[error("Wrapper reserve below requested amount: required {required}, available {available}")]
    InsufficientWrapperReserve {
        required: Amount,
        available: Amount,
    },

    #[error("Synthetic supply overflow")]
    Overflow,

    #[error("Custody error: {0}")]
    Custody(#[from] CustodyError),

    #[error("Token ledger error: {0}")]
    Token(#[from] TokenError),

    #[error("Asset ledger error: {0}")]
    Asset(#[from] AssetError),
}
