//! Shared numeric helpers for the calculators.
//!
//! Calculations carry full precision end to end; [`round_half_up`] exists for
//! display and final presentation only, never between steps.

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use thiserror::Error;

/// Errors raised when converting raw numeric input into an amount.
#[derive(Debug, Error, PartialEq)]
pub enum AmountError {
    /// NaN or infinite input. Surfaced rather than coerced to 0, since a
    /// non-finite amount is a caller bug, not a zero-tax situation.
    #[error("amount must be finite, got {0}")]
    NotFinite(f64),

    #[error("amount {0} cannot be represented as a decimal")]
    OutOfRange(f64),
}

/// Converts a raw `f64` (form input, typically) into a [`Decimal`] amount.
///
/// Negative values pass through unchanged; the calculators define their own
/// behavior for them. Only non-finite and unrepresentable values are errors.
pub fn amount_from_f64(value: f64) -> Result<Decimal, AmountError> {
    if !value.is_finite() {
        return Err(AmountError::NotFinite(value));
    }
    Decimal::from_f64(value).ok_or(AmountError::OutOfRange(value))
}

/// Rounds to two decimal places using half-up (midpoint away from zero),
/// the standard convention for displayed currency amounts.
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}
