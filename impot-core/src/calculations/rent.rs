//! Rent-increase estimate in the style of the TAL (Tribunal administratif du
//! logement) annual guideline.
//!
//! Annual pass-through amounts (taxes, insurance, maintenance) and the
//! renovation amortization are converted to monthly figures without any
//! intermediate rounding; only the displayed result gets rounded.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

const MONTHS_PER_YEAR: Decimal = dec!(12);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeatingType {
    None,
    Electricity,
    Gas,
    Oil,
}

/// Year-specific TAL adjustment factors, injected from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentParameters {
    /// Base index applied to the current rent of an unheated unit.
    pub base_index_rate: Decimal,
    /// Additional rate when the landlord provides electric heating.
    pub electricity_rate: Decimal,
    /// Additional rate when the landlord provides gas heating.
    pub gas_rate: Decimal,
    /// Additional rate when the landlord provides oil heating.
    pub oil_rate: Decimal,
    /// Share of a major renovation cost passed through per year.
    pub renovation_amortization_rate: Decimal,
}

impl RentParameters {
    pub fn heating_rate(
        &self,
        heating: HeatingType,
    ) -> Decimal {
        match heating {
            HeatingType::None => Decimal::ZERO,
            HeatingType::Electricity => self.electricity_rate,
            HeatingType::Gas => self.gas_rate,
            HeatingType::Oil => self.oil_rate,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentIncreaseInputs {
    /// Current monthly rent.
    pub current_rent: Decimal,
    pub heated_by_landlord: bool,
    pub heating_type: HeatingType,
    /// Annual increase in municipal taxes for the dwelling.
    pub municipal_tax_increase: Decimal,
    /// Annual increase in school taxes.
    pub school_tax_increase: Decimal,
    /// Annual increase in insurance premiums.
    pub insurance_increase: Decimal,
    /// One-time major renovation cost.
    pub major_renovations: Decimal,
    /// Annual increase in maintenance costs.
    pub maintenance_increase: Decimal,
}

/// Monthly breakdown of the estimated increase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentIncreaseResult {
    pub current_rent: Decimal,
    pub base_index_increase: Decimal,
    pub heating_adjustment: Decimal,
    pub monthly_municipal_tax: Decimal,
    pub monthly_school_tax: Decimal,
    pub monthly_insurance: Decimal,
    pub renovation_increase: Decimal,
    pub monthly_maintenance: Decimal,
    pub total_increase: Decimal,
    pub new_rent: Decimal,
    /// Total increase over current rent, as a decimal fraction.
    pub percentage_increase: Decimal,
}

/// Estimates the monthly rent increase from the year's TAL factors.
pub fn compute_rent_increase(
    inputs: &RentIncreaseInputs,
    params: &RentParameters,
) -> RentIncreaseResult {
    let base_index_increase = inputs.current_rent * params.base_index_rate;

    let heating_adjustment = if inputs.heated_by_landlord {
        inputs.current_rent * params.heating_rate(inputs.heating_type)
    } else {
        Decimal::ZERO
    };

    // Annual amounts pass through in full, spread over twelve months.
    let monthly_municipal_tax = inputs.municipal_tax_increase / MONTHS_PER_YEAR;
    let monthly_school_tax = inputs.school_tax_increase / MONTHS_PER_YEAR;
    let monthly_insurance = inputs.insurance_increase / MONTHS_PER_YEAR;
    let monthly_maintenance = inputs.maintenance_increase / MONTHS_PER_YEAR;

    let renovation_increase =
        inputs.major_renovations * params.renovation_amortization_rate / MONTHS_PER_YEAR;

    let total_increase = base_index_increase
        + heating_adjustment
        + monthly_municipal_tax
        + monthly_school_tax
        + monthly_insurance
        + monthly_maintenance
        + renovation_increase;

    let percentage_increase = if inputs.current_rent > Decimal::ZERO {
        total_increase / inputs.current_rent
    } else {
        Decimal::ZERO
    };

    RentIncreaseResult {
        current_rent: inputs.current_rent,
        base_index_increase,
        heating_adjustment,
        monthly_municipal_tax,
        monthly_school_tax,
        monthly_insurance,
        renovation_increase,
        monthly_maintenance,
        total_increase,
        new_rent: inputs.current_rent + total_increase,
        percentage_increase,
    }
}
