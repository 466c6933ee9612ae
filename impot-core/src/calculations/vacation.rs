//! Quebec vacation pay: 4 % of annual salary under three years of service,
//! 6 % at three years or more (Loi sur les normes du travail).

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

const JUNIOR_RATE: Decimal = dec!(0.04);
const SENIOR_RATE: Decimal = dec!(0.06);
const SENIORITY_THRESHOLD_YEARS: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationPayResult {
    pub annual_salary: Decimal,
    pub years_of_service: u32,
    /// Rate actually applicable, as a decimal fraction.
    pub rate: Decimal,
    pub vacation_pay: Decimal,
    /// The other seniority tier's rate, for comparison display.
    pub alternative_rate: Decimal,
    pub alternative_vacation_pay: Decimal,
    pub difference: Decimal,
}

/// Computes vacation pay with the seniority rule, plus the other tier's
/// amount so callers can show what changes at the three-year mark.
pub fn compute_vacation_pay(
    annual_salary: Decimal,
    years_of_service: u32,
) -> VacationPayResult {
    let (rate, alternative_rate) = if years_of_service >= SENIORITY_THRESHOLD_YEARS {
        (SENIOR_RATE, JUNIOR_RATE)
    } else {
        (JUNIOR_RATE, SENIOR_RATE)
    };

    let vacation_pay = annual_salary * rate;
    let alternative_vacation_pay = annual_salary * alternative_rate;

    VacationPayResult {
        annual_salary,
        years_of_service,
        rate,
        vacation_pay,
        alternative_rate,
        alternative_vacation_pay,
        difference: (vacation_pay - alternative_vacation_pay).abs(),
    }
}
