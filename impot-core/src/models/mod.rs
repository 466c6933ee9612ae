mod bracket;
mod contribution;
mod result;
mod tax_year;

pub use bracket::{Bracket, BracketTable, BracketTableError};
pub use contribution::{ContributionRule, ContributionRuleError};
pub use result::{AggregateResult, CalculationResult, DeductionLine};
pub use tax_year::TaxYearParameters;
