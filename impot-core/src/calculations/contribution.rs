//! Flat-rate contribution calculation (RRQ, RQAP, AE style deductions).

use rust_decimal::Decimal;

use crate::models::ContributionRule;

/// Contribution owed on `gross` under `rule`: the flat rate applied to the
/// slice of earnings between the basic exemption and the insurable ceiling.
///
/// Constant once gross reaches the ceiling, zero at or below the exemption,
/// and zero for any gross amount under a degenerate rule whose ceiling does
/// not exceed its exemption.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use impot_core::calculations::compute_contribution;
/// use impot_core::models::ContributionRule;
///
/// let qpp = ContributionRule::new(dec!(3500), dec!(68500), dec!(0.064)).unwrap();
///
/// assert_eq!(compute_contribution(dec!(40000), &qpp), dec!(2336.000));
/// ```
pub fn compute_contribution(
    gross: Decimal,
    rule: &ContributionRule,
) -> Decimal {
    rule.insurable_base(gross) * rule.rate
}
