//! Daycare cost comparison: subsidized CPE rate vs. a private daycare net
//! of the income-tiered Quebec tax credit.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Private daycare is flagged "competitive" when its net daily cost is
/// within 20 % of the CPE rate.
const COMPETITIVE_FACTOR: Decimal = dec!(1.20);

/// One tier of the refundable tax-credit grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditTier {
    /// Exclusive family-income ceiling; `None` for the open-ended top tier.
    pub income_below: Option<Decimal>,
    /// Credit rate for the tier, as a decimal fraction.
    pub rate: Decimal,
}

/// Year-specific daycare parameters, injected from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaycareParameters {
    /// Daily rate in a subsidized CPE spot.
    pub cpe_daily_rate: Decimal,
    /// Credit tiers ordered by ascending ceiling, ending with an open tier.
    pub credit_tiers: Vec<CreditTier>,
}

impl DaycareParameters {
    /// Credit rate applicable to a family income.
    ///
    /// Returns 0 if the grid is empty or no tier matches (a grid without an
    /// open-ended top tier leaves high incomes uncovered).
    pub fn credit_rate(
        &self,
        family_income: Decimal,
    ) -> Decimal {
        for tier in &self.credit_tiers {
            match tier.income_below {
                Some(ceiling) if family_income < ceiling => return tier.rate,
                None => return tier.rate,
                _ => {}
            }
        }
        Decimal::ZERO
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaycareInputs {
    pub family_income: Decimal,
    pub private_daily_rate: Decimal,
    pub days_per_year: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaycareComparison {
    pub family_income: Decimal,
    pub days_per_year: u32,

    pub cpe_daily_rate: Decimal,
    pub cpe_annual_cost: Decimal,

    pub private_daily_rate: Decimal,
    pub private_annual_cost_before_credit: Decimal,
    pub tax_credit_rate: Decimal,
    pub tax_credit_amount: Decimal,
    pub private_net_daily_cost: Decimal,
    pub private_net_annual_cost: Decimal,

    /// Private net annual cost minus CPE annual cost.
    pub annual_difference: Decimal,
    /// Whether private lands within 20 % of the CPE daily rate after credit.
    pub is_private_competitive: bool,
}

/// Compares the annual cost of a subsidized CPE spot with a private daycare
/// once the tax credit is applied.
pub fn compare_daycare_costs(
    inputs: &DaycareInputs,
    params: &DaycareParameters,
) -> DaycareComparison {
    let days = Decimal::from(inputs.days_per_year);

    let cpe_annual_cost = params.cpe_daily_rate * days;

    let private_annual_cost_before_credit = inputs.private_daily_rate * days;
    let tax_credit_rate = params.credit_rate(inputs.family_income);
    let tax_credit_amount = private_annual_cost_before_credit * tax_credit_rate;
    let private_net_annual_cost = private_annual_cost_before_credit - tax_credit_amount;
    let private_net_daily_cost = if inputs.days_per_year > 0 {
        private_net_annual_cost / days
    } else {
        Decimal::ZERO
    };

    DaycareComparison {
        family_income: inputs.family_income,
        days_per_year: inputs.days_per_year,
        cpe_daily_rate: params.cpe_daily_rate,
        cpe_annual_cost,
        private_daily_rate: inputs.private_daily_rate,
        private_annual_cost_before_credit,
        tax_credit_rate,
        tax_credit_amount,
        private_net_daily_cost,
        private_net_annual_cost,
        annual_difference: private_net_annual_cost - cpe_annual_cost,
        is_private_competitive: private_net_daily_cost
            <= params.cpe_daily_rate * COMPETITIVE_FACTOR,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn params_2026() -> DaycareParameters {
        DaycareParameters {
            cpe_daily_rate: dec!(9.10),
            credit_tiers: vec![
                CreditTier {
                    income_below: Some(dec!(36500)),
                    rate: dec!(0.78),
                },
                CreditTier {
                    income_below: Some(dec!(100000)),
                    rate: dec!(0.70),
                },
                CreditTier {
                    income_below: None,
                    rate: dec!(0.67),
                },
            ],
        }
    }

    // =========================================================================
    // credit_rate tests
    // =========================================================================

    #[test]
    fn credit_rate_low_income() {
        assert_eq!(params_2026().credit_rate(dec!(30000)), dec!(0.78));
    }

    #[test]
    fn credit_rate_middle_income() {
        assert_eq!(params_2026().credit_rate(dec!(50000)), dec!(0.70));
    }

    #[test]
    fn credit_rate_high_income() {
        assert_eq!(params_2026().credit_rate(dec!(150000)), dec!(0.67));
    }

    #[test]
    fn credit_rate_at_tier_ceiling_moves_to_next_tier() {
        assert_eq!(params_2026().credit_rate(dec!(36500)), dec!(0.70));
        assert_eq!(params_2026().credit_rate(dec!(100000)), dec!(0.67));
    }

    // =========================================================================
    // compare_daycare_costs tests
    // =========================================================================

    #[test]
    fn comparison_at_middle_income() {
        let inputs = DaycareInputs {
            family_income: dec!(50000),
            private_daily_rate: dec!(40),
            days_per_year: 260,
        };

        let result = compare_daycare_costs(&inputs, &params_2026());

        assert_eq!(result.cpe_annual_cost, dec!(2366.00));
        assert_eq!(result.private_annual_cost_before_credit, dec!(10400));
        assert_eq!(result.tax_credit_amount, dec!(7280.00));
        assert_eq!(result.private_net_annual_cost, dec!(3120.00));
        assert_eq!(result.private_net_daily_cost, dec!(12));
        assert_eq!(result.annual_difference, dec!(754.00));
        // 12 $ per day is more than 20 % above the 9,10 $ CPE rate.
        assert!(!result.is_private_competitive);
    }

    #[test]
    fn cheap_private_daycare_is_competitive() {
        let inputs = DaycareInputs {
            family_income: dec!(30000),
            private_daily_rate: dec!(35),
            days_per_year: 260,
        };

        let result = compare_daycare_costs(&inputs, &params_2026());

        // Net daily: 35 * 0.22 = 7.70, below the CPE rate itself.
        assert_eq!(result.private_net_daily_cost, dec!(7.70));
        assert!(result.is_private_competitive);
    }

    #[test]
    fn zero_days_avoids_division() {
        let inputs = DaycareInputs {
            family_income: dec!(50000),
            private_daily_rate: dec!(40),
            days_per_year: 0,
        };

        let result = compare_daycare_costs(&inputs, &params_2026());

        assert_eq!(result.private_net_annual_cost, dec!(0));
        assert_eq!(result.private_net_daily_cost, dec!(0));
    }
}
