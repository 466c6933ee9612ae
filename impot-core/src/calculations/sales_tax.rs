//! Quebec sales taxes (TPS/TVQ), forward and reverse.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Sales tax rates for one period; both are decimal fractions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesTaxRates {
    /// Federal GST (TPS).
    pub tps: Decimal,
    /// Quebec QST (TVQ).
    pub tvq: Decimal,
}

impl SalesTaxRates {
    pub fn combined(&self) -> Decimal {
        self.tps + self.tvq
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SalesTaxMode {
    /// Add taxes to a before-tax amount.
    Add,
    /// Extract taxes from a tax-included total.
    Reverse,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesTaxResult {
    pub mode: SalesTaxMode,
    pub amount_before_tax: Decimal,
    pub tps_amount: Decimal,
    pub tvq_amount: Decimal,
    pub total_amount: Decimal,
}

/// Adds TPS and TVQ to a before-tax amount.
pub fn add_taxes(
    amount_before_tax: Decimal,
    rates: &SalesTaxRates,
) -> SalesTaxResult {
    let tps_amount = amount_before_tax * rates.tps;
    let tvq_amount = amount_before_tax * rates.tvq;

    SalesTaxResult {
        mode: SalesTaxMode::Add,
        amount_before_tax,
        tps_amount,
        tvq_amount,
        total_amount: amount_before_tax + tps_amount + tvq_amount,
    }
}

/// Extracts TPS and TVQ from a tax-included total:
/// `before = total / (1 + tps + tvq)`.
pub fn extract_taxes(
    total_amount: Decimal,
    rates: &SalesTaxRates,
) -> SalesTaxResult {
    let amount_before_tax = total_amount / (Decimal::ONE + rates.combined());
    let tps_amount = amount_before_tax * rates.tps;
    let tvq_amount = amount_before_tax * rates.tvq;

    SalesTaxResult {
        mode: SalesTaxMode::Reverse,
        amount_before_tax,
        tps_amount,
        tvq_amount,
        total_amount,
    }
}

pub fn compute_sales_tax(
    amount: Decimal,
    mode: SalesTaxMode,
    rates: &SalesTaxRates,
) -> SalesTaxResult {
    match mode {
        SalesTaxMode::Add => add_taxes(amount, rates),
        SalesTaxMode::Reverse => extract_taxes(amount, rates),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn rates_2026() -> SalesTaxRates {
        SalesTaxRates {
            tps: dec!(0.05),
            tvq: dec!(0.09975),
        }
    }

    #[test]
    fn add_taxes_on_100() {
        let result = add_taxes(dec!(100), &rates_2026());

        assert_eq!(result.tps_amount, dec!(5.00));
        assert_eq!(result.tvq_amount, dec!(9.975));
        assert_eq!(result.total_amount, dec!(114.975));
    }

    #[test]
    fn extract_taxes_inverts_add() {
        let result = extract_taxes(dec!(114.975), &rates_2026());

        assert_eq!(result.amount_before_tax, dec!(100));
        assert_eq!(result.tps_amount, dec!(5.00));
        assert_eq!(result.tvq_amount, dec!(9.975));
    }

    #[test]
    fn add_taxes_on_zero() {
        let result = add_taxes(dec!(0), &rates_2026());

        assert_eq!(result.total_amount, dec!(0));
    }

    #[test]
    fn compute_dispatches_on_mode() {
        let rates = rates_2026();

        let added = compute_sales_tax(dec!(50), SalesTaxMode::Add, &rates);
        let extracted = compute_sales_tax(dec!(57.4875), SalesTaxMode::Reverse, &rates);

        assert_eq!(added.mode, SalesTaxMode::Add);
        assert_eq!(extracted.mode, SalesTaxMode::Reverse);
        assert_eq!(added.total_amount, dec!(57.4875));
        assert_eq!(extracted.amount_before_tax, dec!(50));
    }

    #[test]
    fn combined_rate() {
        assert_eq!(rates_2026().combined(), dec!(0.14975));
    }
}
