//! Calculation modules behind the Quebec personal-finance calculators.
//!
//! The progressive bracket walk in [`progressive`] is the shared primitive;
//! everything else is either a flat-rate variant ([`contribution`]), a
//! combinator ([`composer`]), or a thin per-calculator adapter.

pub mod common;
pub mod composer;
pub mod contribution;
pub mod daycare;
pub mod payroll;
pub mod progressive;
pub mod rent;
pub mod sales_tax;
pub mod transfer_tax;
pub mod vacation;

pub use common::{AmountError, amount_from_f64, round_half_up};
pub use composer::{Deduction, NamedDeduction, compose_deductions};
pub use contribution::compute_contribution;
pub use daycare::{
    CreditTier, DaycareComparison, DaycareInputs, DaycareParameters, compare_daycare_costs,
};
pub use payroll::{PayFrequency, PayrollCalculator, SalaryBreakdown};
pub use progressive::compute_progressive_amount;
pub use rent::{
    HeatingType, RentIncreaseInputs, RentIncreaseResult, RentParameters, compute_rent_increase,
};
pub use sales_tax::{
    SalesTaxMode, SalesTaxRates, SalesTaxResult, add_taxes, compute_sales_tax, extract_taxes,
};
pub use transfer_tax::{TransferTaxLine, TransferTaxResult, compute_transfer_tax};
pub use vacation::{VacationPayResult, compute_vacation_pay};
