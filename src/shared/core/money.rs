// Monetary amounts are Decimal with three fractional digits (millimes).
// Wire serialization uses rust_decimal::serde::float so JSON carries
// plain numbers, never 2-digit-rounded strings.

use rust_decimal::Decimal;

use crate::shared::core::errors::LedgerError;

/// Millime precision of every stored amount.
pub const SCALE: u32 = 3;

/// Tolerance used when matching a historical posting amount against a
/// charge amount (0.010).
pub fn match_tolerance() -> Decimal {
    Decimal::new(1, 2)
}

pub fn round_millimes(value: Decimal) -> Decimal {
    value.round_dp(SCALE)
}

/// Rejects negative values. Zero is allowed: the forced-zero side of a
/// classified charge is stored as 0.
pub fn require_non_negative(field: &str, value: Decimal) -> Result<Decimal, LedgerError> {
    if value < Decimal::ZERO {
        return Err(LedgerError::InvalidAmount(format!(
            "{field} must not be negative, got {value}"
        )));
    }
    Ok(round_millimes(value))
}

/// Rejects zero and negative values. Cash register operations and
/// posting amounts must be strictly positive.
pub fn require_positive(field: &str, value: Decimal) -> Result<Decimal, LedgerError> {
    if value <= Decimal::ZERO {
        return Err(LedgerError::InvalidAmount(format!(
            "{field} must be strictly positive, got {value}"
        )));
    }
    Ok(round_millimes(value))
}

/// Equality within the compatibility-matching tolerance.
pub fn within_match_tolerance(a: Decimal, b: Decimal) -> bool {
    (a - b).abs() <= match_tolerance()
}
