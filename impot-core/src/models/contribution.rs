use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a contribution rule fails construction-time validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContributionRuleError {
    #[error("basic exemption must be non-negative, got {0}")]
    NegativeExemption(Decimal),

    #[error("maximum insurable earnings must be non-negative, got {0}")]
    NegativeMaximum(Decimal),

    #[error("contribution rate must be between 0 and 1, got {0}")]
    RateOutOfRange(Decimal),
}

/// Flat-rate deduction rule with an exemption floor and an earnings ceiling.
///
/// Models pension- and insurance-style contributions (RRQ, RQAP, AE): the
/// rate applies only to the slice of gross earnings above `basic_exemption`
/// and below `maximum_insurable_earnings`.
///
/// A rule whose ceiling does not exceed its exemption is degenerate but
/// valid: it always yields a zero contribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionRule {
    pub basic_exemption: Decimal,
    pub maximum_insurable_earnings: Decimal,
    pub rate: Decimal,
}

impl ContributionRule {
    /// Builds a rule, validating that the exemption and ceiling are
    /// non-negative and the rate lies in `[0, 1]`.
    pub fn new(
        basic_exemption: Decimal,
        maximum_insurable_earnings: Decimal,
        rate: Decimal,
    ) -> Result<Self, ContributionRuleError> {
        if basic_exemption < Decimal::ZERO {
            return Err(ContributionRuleError::NegativeExemption(basic_exemption));
        }
        if maximum_insurable_earnings < Decimal::ZERO {
            return Err(ContributionRuleError::NegativeMaximum(
                maximum_insurable_earnings,
            ));
        }
        if rate < Decimal::ZERO || rate > Decimal::ONE {
            return Err(ContributionRuleError::RateOutOfRange(rate));
        }
        Ok(Self {
            basic_exemption,
            maximum_insurable_earnings,
            rate,
        })
    }

    /// Rule with a ceiling but no exemption (RQAP and AE have this shape).
    pub fn capped(
        maximum_insurable_earnings: Decimal,
        rate: Decimal,
    ) -> Result<Self, ContributionRuleError> {
        Self::new(Decimal::ZERO, maximum_insurable_earnings, rate)
    }

    /// Earnings slice the rate applies to: gross capped at the ceiling, less
    /// the exemption, floored at zero.
    pub fn insurable_base(
        &self,
        gross: Decimal,
    ) -> Decimal {
        (gross.min(self.maximum_insurable_earnings) - self.basic_exemption).max(Decimal::ZERO)
    }
}
