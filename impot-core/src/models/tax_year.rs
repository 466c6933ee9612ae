use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{BracketTable, ContributionRule};

/// One tax year's payroll deduction parameters for Quebec employment income.
///
/// Built from static configuration at load time and treated as read-only
/// afterward. Keeping the year explicit lets several years coexist (e.g. for
/// historical comparisons) without any ambient "current year" default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxYearParameters {
    pub tax_year: i32,

    pub federal_brackets: BracketTable,
    /// Federal basic personal amount, subtracted before the federal walk.
    pub federal_basic_personal_amount: Decimal,

    pub quebec_brackets: BracketTable,
    /// Quebec basic personal amount, subtracted before the provincial walk.
    pub quebec_basic_personal_amount: Decimal,

    /// Quebec Pension Plan (RRQ).
    pub qpp: ContributionRule,
    /// Quebec Parental Insurance Plan (RQAP).
    pub qpip: ContributionRule,
    /// Employment Insurance (AE).
    pub ei: ContributionRule,
}
