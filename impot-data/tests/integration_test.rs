//! End-to-end scenarios running the published 2026 tables through the
//! calculation engine.

use impot_core::calculations::{
    DaycareInputs, HeatingType, PayFrequency, PayrollCalculator, RentIncreaseInputs, SalesTaxMode,
    compare_daycare_costs, compute_contribution, compute_progressive_amount, compute_rent_increase,
    compute_sales_tax, compute_transfer_tax,
};
use impot_data::{DataError, Municipality, for_year};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// =========================================================================
// Progressive tax scenarios
// =========================================================================

#[test]
fn federal_tax_at_first_bracket_ceiling() {
    let tables = for_year(2026).unwrap();

    let result = compute_progressive_amount(dec!(55867), &tables.payroll.federal_brackets);

    // 55867 * 0.15, entirely in the first bracket
    assert_eq!(result.total_amount_due, dec!(8380.05));
    assert_eq!(result.per_bracket_amounts[0], dec!(8380.05));
    assert_eq!(result.per_bracket_amounts[1], dec!(0));
}

#[test]
fn federal_tax_spanning_two_brackets() {
    let tables = for_year(2026).unwrap();

    let result = compute_progressive_amount(dec!(100000), &tables.payroll.federal_brackets);

    // 8380.05 + (100000 - 55867) * 0.205
    assert_eq!(result.total_amount_due, dec!(17427.315));
}

// =========================================================================
// Contribution scenarios
// =========================================================================

#[test]
fn qpp_below_ceiling() {
    let tables = for_year(2026).unwrap();

    let amount = compute_contribution(dec!(40000), &tables.payroll.qpp);

    // (40000 - 3500) * 0.064
    assert_eq!(amount, dec!(2336.00));
}

#[test]
fn qpp_capped_at_maximum_insurable_earnings() {
    let tables = for_year(2026).unwrap();

    let amount = compute_contribution(dec!(100000), &tables.payroll.qpp);

    // (68500 - 3500) * 0.064, same as any income past the ceiling
    assert_eq!(amount, dec!(4160));
    assert_eq!(amount, compute_contribution(dec!(200000), &tables.payroll.qpp));
}

// =========================================================================
// Payroll scenarios
// =========================================================================

#[test]
fn payroll_60000_annual() {
    let tables = for_year(2026).unwrap();
    let calculator = PayrollCalculator::new(&tables.payroll);

    let result = calculator.calculate(dec!(60000));

    assert_eq!(result.total_deductions, dec!(17190.81));
    assert_eq!(result.net_income, dec!(42809.19));
}

#[test]
fn payroll_monthly_input_annualized() {
    let tables = for_year(2026).unwrap();
    let calculator = PayrollCalculator::new(&tables.payroll);

    let annual = calculator.calculate(dec!(60000));
    let monthly = calculator.calculate(PayFrequency::Monthly.annualize(dec!(5000)));

    assert_eq!(annual, monthly);
}

#[test]
fn payroll_zero_gross_is_all_zeros() {
    let tables = for_year(2026).unwrap();
    let calculator = PayrollCalculator::new(&tables.payroll);

    let result = calculator.calculate(Decimal::ZERO);

    assert_eq!(result.federal_tax, dec!(0));
    assert_eq!(result.provincial_tax, dec!(0));
    assert_eq!(result.qpp, dec!(0));
    assert_eq!(result.qpip, dec!(0));
    assert_eq!(result.ei, dec!(0));
    assert_eq!(result.total_deductions, dec!(0));
    assert_eq!(result.net_income, dec!(0));
    assert_eq!(result.effective_rate, dec!(0));
}

// =========================================================================
// Transfer tax scenarios
// =========================================================================

#[test]
fn montreal_transfer_tax_on_500000_property() {
    let tables = for_year(2026).unwrap();
    let schedule = tables.transfer_tax.for_municipality(Municipality::Montreal);

    let result = compute_transfer_tax(dec!(500000), schedule);

    // 58900*0.005 + 235700*0.01 + 205400*0.015
    assert_eq!(result.total_tax, dec!(5732.50));
    assert_eq!(result.breakdown[0].tax, dec!(294.50));
    assert_eq!(result.breakdown[1].tax, dec!(2357.00));
    assert_eq!(result.breakdown[2].tax, dec!(3081.00));
}

#[test]
fn quebec_schedule_cheaper_than_montreal_above_base_tiers() {
    let tables = for_year(2026).unwrap();

    let montreal = compute_transfer_tax(
        dec!(1500000),
        tables.transfer_tax.for_municipality(Municipality::Montreal),
    );
    let quebec = compute_transfer_tax(
        dec!(1500000),
        tables.transfer_tax.for_municipality(Municipality::Quebec),
    );

    assert!(montreal.total_tax > quebec.total_tax);
}

// =========================================================================
// Sales tax scenarios
// =========================================================================

#[test]
fn sales_tax_add_then_reverse_is_exact() {
    let tables = for_year(2026).unwrap();

    let added = compute_sales_tax(dec!(100), SalesTaxMode::Add, &tables.sales_tax);
    assert_eq!(added.total_amount, dec!(114.975));

    let reversed = compute_sales_tax(added.total_amount, SalesTaxMode::Reverse, &tables.sales_tax);
    assert_eq!(reversed.amount_before_tax, dec!(100));
}

// =========================================================================
// Household calculator scenarios
// =========================================================================

#[test]
fn daycare_comparison_with_2026_credit_tiers() {
    let tables = for_year(2026).unwrap();

    let comparison = compare_daycare_costs(
        &DaycareInputs {
            family_income: dec!(50000),
            private_daily_rate: dec!(40),
            days_per_year: 260,
        },
        &tables.daycare,
    );

    // CPE: 9.10 * 260; private net of the 70% credit tier
    assert_eq!(comparison.cpe_annual_cost, dec!(2366.00));
    assert_eq!(comparison.private_net_annual_cost, dec!(3120));
}

#[test]
fn rent_increase_with_2026_rates() {
    let tables = for_year(2026).unwrap();

    let result = compute_rent_increase(
        &RentIncreaseInputs {
            current_rent: dec!(1000),
            heated_by_landlord: false,
            heating_type: HeatingType::None,
            municipal_tax_increase: Decimal::ZERO,
            school_tax_increase: Decimal::ZERO,
            insurance_increase: Decimal::ZERO,
            major_renovations: Decimal::ZERO,
            maintenance_increase: Decimal::ZERO,
        },
        &tables.rent,
    );

    // 1000 * 0.04 base indexation, nothing else
    assert_eq!(result.total_increase, dec!(40));
    assert_eq!(result.new_rent, dec!(1040));
}

// =========================================================================
// Year registry
// =========================================================================

#[test]
fn unknown_year_is_rejected() {
    let result = for_year(2019);

    assert!(matches!(result, Err(DataError::UnsupportedYear(2019))));
}
