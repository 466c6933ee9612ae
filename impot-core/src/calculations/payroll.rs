//! Net-salary calculation for Quebec employment income.
//!
//! Composes the five standard deductions (federal tax, Quebec tax, RRQ,
//! RQAP, AE) against an annualized gross salary.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::composer::{Deduction, NamedDeduction, compose_deductions};
use crate::models::TaxYearParameters;

/// How often a salary figure is paid; used to annualize periodic input
/// before any deduction is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayFrequency {
    Annual,
    Monthly,
    Biweekly,
    Weekly,
}

impl PayFrequency {
    pub fn periods_per_year(&self) -> Decimal {
        match self {
            Self::Annual => Decimal::ONE,
            Self::Monthly => Decimal::from(12),
            Self::Biweekly => Decimal::from(26),
            Self::Weekly => Decimal::from(52),
        }
    }

    /// Converts a per-period amount to its annual equivalent.
    pub fn annualize(
        &self,
        amount: Decimal,
    ) -> Decimal {
        amount * self.periods_per_year()
    }
}

/// Full deduction breakdown for one annual gross salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    pub gross_income: Decimal,
    pub federal_tax: Decimal,
    pub provincial_tax: Decimal,
    /// Quebec Pension Plan (RRQ) contribution.
    pub qpp: Decimal,
    /// Quebec Parental Insurance Plan (RQAP) premium.
    pub qpip: Decimal,
    /// Employment Insurance (AE) premium.
    pub ei: Decimal,
    pub total_deductions: Decimal,
    pub net_income: Decimal,
    /// Total deductions over gross income, as a decimal fraction.
    pub effective_rate: Decimal,
}

/// Calculator for one tax year's payroll deductions.
///
/// Builds its components once from [`TaxYearParameters`]; each call to
/// [`calculate`](Self::calculate) is then a pure function of the gross
/// amount.
#[derive(Debug, Clone)]
pub struct PayrollCalculator {
    components: Vec<NamedDeduction>,
}

impl PayrollCalculator {
    pub fn new(params: &TaxYearParameters) -> Self {
        // Order fixed: calculate() maps breakdown fields by position.
        let components = vec![
            NamedDeduction::new(
                "Impôt fédéral",
                Deduction::Progressive {
                    brackets: params.federal_brackets.clone(),
                    allowance: params.federal_basic_personal_amount,
                },
            ),
            NamedDeduction::new(
                "Impôt du Québec",
                Deduction::Progressive {
                    brackets: params.quebec_brackets.clone(),
                    allowance: params.quebec_basic_personal_amount,
                },
            ),
            NamedDeduction::new("RRQ", Deduction::Contribution(params.qpp.clone())),
            NamedDeduction::new("RQAP", Deduction::Contribution(params.qpip.clone())),
            NamedDeduction::new("AE", Deduction::Contribution(params.ei.clone())),
        ];
        Self { components }
    }

    /// Computes the full deduction breakdown for an annual gross salary.
    pub fn calculate(
        &self,
        gross_annual: Decimal,
    ) -> SalaryBreakdown {
        let aggregate = compose_deductions(gross_annual, &self.components);

        let effective_rate = if gross_annual > Decimal::ZERO {
            aggregate.total_deductions / gross_annual
        } else {
            Decimal::ZERO
        };

        SalaryBreakdown {
            gross_income: gross_annual,
            federal_tax: aggregate.lines[0].amount,
            provincial_tax: aggregate.lines[1].amount,
            qpp: aggregate.lines[2].amount,
            qpip: aggregate.lines[3].amount,
            ei: aggregate.lines[4].amount,
            total_deductions: aggregate.total_deductions,
            net_income: aggregate.net_amount,
            effective_rate,
        }
    }
}
