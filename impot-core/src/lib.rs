//! Shared calculation engine for Quebec personal-finance calculators:
//! progressive income tax, payroll contributions, land-transfer tax, sales
//! taxes, and the smaller household calculators built on the same data.
//!
//! All money math uses [`rust_decimal::Decimal`] with no intermediate
//! rounding; formatting and rounding live in [`format`] and happen at
//! display time only.

pub mod calculations;
pub mod format;
pub mod models;

pub use models::*;
