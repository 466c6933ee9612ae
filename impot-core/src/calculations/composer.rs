//! Combines independent deductions against one gross amount.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calculations::contribution::compute_contribution;
use crate::calculations::progressive::compute_progressive_amount;
use crate::models::{AggregateResult, BracketTable, ContributionRule, DeductionLine};

/// A single payroll-style deduction evaluated against gross income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Deduction {
    /// Progressive schedule with a personal allowance subtracted before the
    /// bracket walk (federal and Quebec income tax have this shape).
    Progressive {
        brackets: BracketTable,
        allowance: Decimal,
    },

    /// Flat-rate contribution with an exemption floor and earnings ceiling.
    Contribution(ContributionRule),
}

impl Deduction {
    /// Amount owed on `gross` under this deduction.
    pub fn amount_due(
        &self,
        gross: Decimal,
    ) -> Decimal {
        match self {
            Self::Progressive { brackets, allowance } => {
                let taxable = (gross - *allowance).max(Decimal::ZERO);
                compute_progressive_amount(taxable, brackets).total_amount_due
            }
            Self::Contribution(rule) => compute_contribution(gross, rule),
        }
    }
}

/// A deduction with its display name, e.g. "Impôt fédéral".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedDeduction {
    pub name: String,
    pub deduction: Deduction,
}

impl NamedDeduction {
    pub fn new(
        name: impl Into<String>,
        deduction: Deduction,
    ) -> Self {
        Self {
            name: name.into(),
            deduction,
        }
    }
}

/// Evaluates every component independently against the same `gross` amount
/// and sums the results.
///
/// Components never see each other's output, so their order affects only the
/// presentation of the breakdown lines, never the totals.
///
/// `net_amount` is not clamped: if the combined rates exceed 1 the negative
/// net is surfaced (and logged) as a diagnostic of bad table configuration
/// rather than silently corrected.
pub fn compose_deductions(
    gross: Decimal,
    components: &[NamedDeduction],
) -> AggregateResult {
    let lines: Vec<DeductionLine> = components
        .iter()
        .map(|component| DeductionLine {
            name: component.name.clone(),
            amount: component.deduction.amount_due(gross),
        })
        .collect();

    let total_deductions: Decimal = lines.iter().map(|line| line.amount).sum();
    let net_amount = gross - total_deductions;

    if gross >= Decimal::ZERO && net_amount < Decimal::ZERO {
        warn!(%gross, %net_amount, "deductions exceed gross amount; check rate tables");
    }

    AggregateResult {
        gross_amount: gross,
        lines,
        total_deductions,
        net_amount,
    }
}
