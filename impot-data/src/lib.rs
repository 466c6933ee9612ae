//! Static, tax-year-keyed configuration for the Quebec calculators.
//!
//! Tables are literal data validated through `impot-core`'s constructors at
//! load time; nothing here is mutated after construction. The year is always
//! explicit — there is no ambient "current year" default — so several years
//! can coexist for historical comparisons.

pub mod loader;
mod year2026;

use impot_core::calculations::{DaycareParameters, RentParameters, SalesTaxRates};
use impot_core::models::{
    BracketTable, BracketTableError, ContributionRuleError, TaxYearParameters,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when resolving or constructing year configuration.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("no configuration tables for tax year {0}")]
    UnsupportedYear(i32),

    #[error("invalid bracket table in static configuration: {0}")]
    Bracket(#[from] BracketTableError),

    #[error("invalid contribution rule in static configuration: {0}")]
    Contribution(#[from] ContributionRuleError),
}

/// Which land-transfer tax schedule applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Municipality {
    Montreal,
    /// Provincial base schedule, everywhere outside Montréal.
    Quebec,
}

impl Municipality {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Montreal => "Montréal",
            Self::Quebec => "Ailleurs au Québec",
        }
    }
}

/// Land-transfer tax schedules for one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferTaxTables {
    pub montreal: BracketTable,
    pub quebec: BracketTable,
}

impl TransferTaxTables {
    pub fn for_municipality(
        &self,
        municipality: Municipality,
    ) -> &BracketTable {
        match municipality {
            Municipality::Montreal => &self.montreal,
            Municipality::Quebec => &self.quebec,
        }
    }
}

/// Complete configuration bundle for one tax year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxYear {
    pub year: i32,
    pub payroll: TaxYearParameters,
    pub transfer_tax: TransferTaxTables,
    pub sales_tax: SalesTaxRates,
    pub daycare: DaycareParameters,
    pub rent: RentParameters,
}

/// Returns the full configuration bundle for `year`.
///
/// # Errors
///
/// [`DataError::UnsupportedYear`] when no tables exist for the year;
/// construction errors only if the static data itself is malformed.
pub fn for_year(year: i32) -> Result<TaxYear, DataError> {
    match year {
        2026 => year2026::tables(),
        _ => Err(DataError::UnsupportedYear(year)),
    }
}
