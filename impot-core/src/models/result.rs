use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Output of a single progressive-bracket calculation.
///
/// Values are unrounded; rounding happens only at display time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// The gross amount supplied to the calculation.
    pub input_amount: Decimal,

    /// Sum of the amounts owed across all brackets.
    pub total_amount_due: Decimal,

    /// Amount owed within each bracket, parallel to the table walked.
    /// Always fully populated; untouched brackets carry 0.
    pub per_bracket_amounts: Vec<Decimal>,

    /// Blended rate actually paid (`total / input`), as a decimal fraction.
    /// 0 when the input amount is zero or negative.
    pub effective_rate: Decimal,
}

/// One named deduction inside an aggregate breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionLine {
    pub name: String,
    pub amount: Decimal,
}

/// Summary of several independent deductions against the same gross amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateResult {
    pub gross_amount: Decimal,

    /// Per-component amounts in presentation order.
    pub lines: Vec<DeductionLine>,

    pub total_deductions: Decimal,

    /// `gross_amount - total_deductions`, never clamped. A negative value for
    /// ordinary non-negative gross input signals misconfigured rate tables.
    pub net_amount: Decimal,
}
