//! Land-transfer tax ("taxe de bienvenue" / droits de mutation).
//!
//! Same marginal bracket walk as income tax, but the breakdown keeps one
//! labeled line per bracket of the municipal schedule for display.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::progressive::compute_progressive_amount;
use crate::format::bracket_label;
use crate::models::BracketTable;

/// Tax attributed to one bracket of the municipal schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferTaxLine {
    /// Price range of the bracket, e.g. `58 900 $ - 294 600 $`.
    pub label: String,
    pub rate: Decimal,
    pub tax: Decimal,
}

/// Result of a land-transfer tax calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferTaxResult {
    pub property_price: Decimal,
    pub total_tax: Decimal,
    /// One line per bracket of the schedule, including untouched brackets
    /// (their tax is 0); callers may filter those out for display.
    pub breakdown: Vec<TransferTaxLine>,
    /// Total tax over property price, as a decimal fraction.
    pub effective_rate: Decimal,
}

/// Computes the transfer tax owed on `property_price` under a municipal
/// bracket schedule.
pub fn compute_transfer_tax(
    property_price: Decimal,
    brackets: &BracketTable,
) -> TransferTaxResult {
    let result = compute_progressive_amount(property_price, brackets);

    let breakdown = brackets
        .brackets()
        .iter()
        .zip(&result.per_bracket_amounts)
        .map(|(bracket, tax)| TransferTaxLine {
            label: bracket_label(bracket.lower_bound, bracket.upper_bound),
            rate: bracket.rate,
            tax: *tax,
        })
        .collect();

    TransferTaxResult {
        property_price,
        total_tax: result.total_amount_due,
        breakdown,
        effective_rate: result.effective_rate,
    }
}
