//! Integer unit amounts
//!
//! The synthetic token is 0-decimal: every balance, supply figure, and
//! transfer amount is a whole number of units. Amounts are plain `u64`
//! values with explicit overflow checks; no fractional value is
//! representable anywhere in the system.

/// A whole number of asset units (underlying coin or synthetic token).
pub type Amount = u64;

/// Sum an iterator of amounts, failing on overflow.
///
/// Used for whole-ledger consistency checks, e.g. comparing the sum of all
/// holder balances against the recorded total supply.
pub fn checked_sum<I>(amounts: I) -> Option<Amount>
where
    I: IntoIterator<Item = Amount>,
{
    amounts
        .into_iter()
        .try_fold(0u64, |acc, amount| acc.checked_add(amount))
}
