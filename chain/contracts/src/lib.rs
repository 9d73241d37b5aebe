//! Smart Contract Logic for Coin Custody & Wrapping
//!
//! This crate implements the contract layer of the 1:1-backed wrapper,
//! covering per-user custody accounts, collection of deposited coins, and the
//! wrap/unwrap protocol that keeps the synthetic supply fully backed.
//!
//! # Modules
//! - `events`: Contract events emitted on state changes
//! - `errors`: Contract-specific error types
//! - `coin`: Underlying asset ledger interface and in-memory implementation
//! - `token`: Synthetic token ledger (mint, burn, transfer, supply)
//! - `custody`: Per-user custody accounts with controller-gated collection
//! - `wrapper`: Custody registry and the wrap/unwrap protocol
//!
//! # Version
//! v0.1.0 — Initial implementation

pub mod coin;
pub mod custody;
pub mod errors;
pub mod events;
pub mod token;
pub mod wrapper;

/// Contract ABI version — frozen after release
pub const CONTRACT_ABI_VERSION: &str = "1.0.0";
