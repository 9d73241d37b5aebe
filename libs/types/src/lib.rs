//! Types library for the coin-wrapping ledger
//!
//! This library provides the core type definitions shared across the wrapper
//! system, ensuring type safety and deterministic integer-unit arithmetic.
//!
//! # Version
//! v1.0.0 - Frozen initial release
//!
//! # Modules
//! - `ids`: Participant identities (`Address`)
//! - `numeric`: Integer unit amounts (`Amount`) and checked summation

// Public modules
pub mod ids;
pub mod numeric;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ids::*;
    pub use crate::numeric::*;
}
