//! 2026 rate tables and parameters for Quebec and Canada.

use impot_core::calculations::{CreditTier, DaycareParameters, RentParameters, SalesTaxRates};
use impot_core::models::{Bracket, BracketTable, ContributionRule, TaxYearParameters};
use rust_decimal_macros::dec;

use crate::{DataError, TaxYear, TransferTaxTables};

pub(crate) fn tables() -> Result<TaxYear, DataError> {
    Ok(TaxYear {
        year: 2026,
        payroll: payroll_parameters()?,
        transfer_tax: TransferTaxTables {
            montreal: montreal_transfer_brackets()?,
            quebec: quebec_transfer_brackets()?,
        },
        sales_tax: SalesTaxRates {
            tps: dec!(0.05),
            tvq: dec!(0.09975),
        },
        daycare: daycare_parameters(),
        rent: rent_parameters(),
    })
}

fn payroll_parameters() -> Result<TaxYearParameters, DataError> {
    Ok(TaxYearParameters {
        tax_year: 2026,
        federal_brackets: BracketTable::new(vec![
            Bracket::new(dec!(0), Some(dec!(55867)), dec!(0.15)),
            Bracket::new(dec!(55867), Some(dec!(111733)), dec!(0.205)),
            Bracket::new(dec!(111733), Some(dec!(173205)), dec!(0.26)),
            Bracket::new(dec!(173205), Some(dec!(246752)), dec!(0.29)),
            Bracket::new(dec!(246752), None, dec!(0.33)),
        ])?,
        federal_basic_personal_amount: dec!(15705),
        quebec_brackets: BracketTable::new(vec![
            Bracket::new(dec!(0), Some(dec!(51780)), dec!(0.14)),
            Bracket::new(dec!(51780), Some(dec!(103545)), dec!(0.19)),
            Bracket::new(dec!(103545), Some(dec!(126000)), dec!(0.24)),
            Bracket::new(dec!(126000), None, dec!(0.2575)),
        ])?,
        quebec_basic_personal_amount: dec!(18056),
        // RRQ
        qpp: ContributionRule::new(dec!(3500), dec!(68500), dec!(0.064))?,
        // RQAP
        qpip: ContributionRule::capped(dec!(94000), dec!(0.00494))?,
        // AE
        ei: ContributionRule::capped(dec!(63200), dec!(0.0127))?,
    })
}

/// Montréal schedule, with the extra tiers for high-value properties.
fn montreal_transfer_brackets() -> Result<BracketTable, DataError> {
    Ok(BracketTable::new(vec![
        Bracket::new(dec!(0), Some(dec!(58900)), dec!(0.005)),
        Bracket::new(dec!(58900), Some(dec!(294600)), dec!(0.01)),
        Bracket::new(dec!(294600), Some(dec!(589200)), dec!(0.015)),
        Bracket::new(dec!(589200), Some(dec!(1178500)), dec!(0.02)),
        Bracket::new(dec!(1178500), Some(dec!(2357000)), dec!(0.025)),
        Bracket::new(dec!(2357000), None, dec!(0.035)),
    ])?)
}

/// Provincial base schedule.
fn quebec_transfer_brackets() -> Result<BracketTable, DataError> {
    Ok(BracketTable::new(vec![
        Bracket::new(dec!(0), Some(dec!(58900)), dec!(0.005)),
        Bracket::new(dec!(58900), Some(dec!(294600)), dec!(0.01)),
        Bracket::new(dec!(294600), None, dec!(0.015)),
    ])?)
}

fn daycare_parameters() -> DaycareParameters {
    DaycareParameters {
        cpe_daily_rate: dec!(9.10),
        credit_tiers: vec![
            CreditTier {
                income_below: Some(dec!(36500)),
                rate: dec!(0.78),
            },
            CreditTier {
                income_below: Some(dec!(100000)),
                rate: dec!(0.70),
            },
            CreditTier {
                income_below: None,
                rate: dec!(0.67),
            },
        ],
    }
}

fn rent_parameters() -> RentParameters {
    RentParameters {
        base_index_rate: dec!(0.04),
        electricity_rate: dec!(0.015),
        gas_rate: dec!(0.012),
        oil_rate: dec!(0.018),
        renovation_amortization_rate: dec!(0.048),
    }
}
