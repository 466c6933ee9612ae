//! The marginal bracket walk shared by every progressive calculator.
//!
//! Income tax (federal and Quebec schedules) and the land-transfer tax use
//! the same primitive: each bracket's rate applies only to the slice of the
//! amount falling inside that bracket, never to the whole amount.

use rust_decimal::Decimal;

use crate::models::{BracketTable, CalculationResult};

/// Applies each bracket's marginal rate to the slice of `amount` inside it.
///
/// Zero or negative input is not an error: it yields a zero total, zero
/// per-bracket amounts, and a zero effective rate. The per-bracket breakdown
/// is always populated for the full table so callers can render it alongside
/// the schedule.
///
/// No intermediate rounding is applied; round the total for display only.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use impot_core::calculations::compute_progressive_amount;
/// use impot_core::models::{Bracket, BracketTable};
///
/// let table = BracketTable::new(vec![
///     Bracket::new(dec!(0), Some(dec!(55867)), dec!(0.15)),
///     Bracket::new(dec!(55867), None, dec!(0.205)),
/// ])
/// .unwrap();
///
/// let result = compute_progressive_amount(dec!(100000), &table);
///
/// assert_eq!(result.total_amount_due, dec!(17427.315));
/// ```
pub fn compute_progressive_amount(
    amount: Decimal,
    table: &BracketTable,
) -> CalculationResult {
    let mut per_bracket_amounts = Vec::with_capacity(table.len());
    let mut remaining = amount.max(Decimal::ZERO);
    let mut total = Decimal::ZERO;

    for bracket in table.brackets() {
        if remaining <= Decimal::ZERO {
            per_bracket_amounts.push(Decimal::ZERO);
            continue;
        }

        let slice = match bracket.width() {
            Some(width) => remaining.min(width),
            // Unbounded top bracket absorbs whatever is left.
            None => remaining,
        };
        let due = slice * bracket.rate;

        total += due;
        remaining -= slice;
        per_bracket_amounts.push(due);
    }

    let effective_rate = if amount > Decimal::ZERO {
        total / amount
    } else {
        Decimal::ZERO
    };

    CalculationResult {
        input_amount: amount,
        total_amount_due: total,
        per_bracket_amounts,
        effective_rate,
    }
}
