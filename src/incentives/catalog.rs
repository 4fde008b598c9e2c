//! Static table of the incentive programs and their declared inputs

use crate::error::{IncentiveError, Result};
use super::params::Param;
use super::params::Param::*;

/// Incentive family; decides the formula group and the aggregation bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Family {
    Exemption,
    Deduction,
    Credit,
    Refund,
}

impl Family {
    /// All families in output order
    pub const ALL: [Family; 4] = [Family::Exemption, Family::Deduction, Family::Credit, Family::Refund];

    /// Family owning incentive `number`
    pub fn of(number: i64) -> Result<Family> {
        match number {
            1..=5 => Ok(Family::Exemption),
            6 => Ok(Family::Deduction),
            7..=17 => Ok(Family::Credit),
            18..=20 => Ok(Family::Refund),
            other => Err(IncentiveError::UnknownIncentive(other)),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Family::Exemption => "exemption",
            Family::Deduction => "deduction",
            Family::Credit => "credit",
            Family::Refund => "refund",
        }
    }
}

/// One incentive program
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Incentive {
    pub number: u8,
    pub family: Family,
    /// Short description of the modeled program
    pub program: &'static str,
    /// Inputs the formula cannot run without
    pub required: &'static [Param],
}

const fn entry(number: u8, family: Family, program: &'static str, required: &'static [Param]) -> Incentive {
    Incentive { number, family, program, required }
}

static CATALOG: [Incentive; 20] = [
    entry(1, Family::Exemption, "Property tax exemption on value added, 20 years",
        &[ValueAdded, PropertyTaxableValue, PropertyTaxRate]),
    entry(2, Family::Exemption, "Full property tax exemption, 10 years",
        &[PropertyTaxableValue, PropertyTaxRate]),
    entry(3, Family::Exemption, "Property tax exemption on ethanol equipment, 10 years",
        &[EthanolEquipment, PropertyTaxableValue, PropertyTaxRate]),
    entry(4, Family::Exemption, "Fuel tax exemption, plant lifetime",
        &[FuelTaxableValue, FuelTaxRate]),
    entry(5, Family::Exemption, "Full property tax exemption, plant lifetime",
        &[PropertyTaxableValue, PropertyTaxRate]),
    entry(6, Family::Deduction, "Sales tax deduction on biomass equipment and materials",
        &[NmValue, SalesTaxableValue, SalesTaxRate]),
    entry(7, Family::Credit, "Income tax credit of 1.5% of capital investment, 10 years",
        &[TotalCapitalInvestment, StateIncomeTaxAssessed]),
    entry(8, Family::Credit, "Income tax credit of 3% of investment, 22 years, capped at $750k",
        &[TotalCapitalInvestment, StateIncomeTaxAssessed]),
    entry(9, Family::Credit, "Ethanol fuel content income tax credit, 5 years, capped at $3M",
        &[Ethanol, StateIncomeTaxAssessed]),
    entry(10, Family::Credit, "Income tax credit of 5% of investment over 5 years",
        &[TotalCapitalInvestment, StateIncomeTaxAssessed]),
    entry(11, Family::Credit, "Full state income tax credit, 15 years",
        &[StateIncomeTaxAssessed]),
    entry(12, Family::Credit, "Ethanol producer income tax credit of $1/gal, capped at $5M",
        &[Ethanol, StateIncomeTaxAssessed]),
    entry(13, Family::Credit, "Tiered capital investment credit, 2 years from peak liability, capped at $1M",
        &[TotalCapitalInvestment, StateIncomeTaxAssessed]),
    entry(14, Family::Credit, "Facility construction credit of 25% of investment over 7 years",
        &[TotalCapitalInvestment, PropertyTaxAssessed]),
    entry(15, Family::Credit, "Electricity equipment credit of 25%, 15 years, capped at $650k",
        &[ElectricityEquipment, StateIncomeTaxAssessed]),
    entry(16, Family::Credit, "Income tax credit of 75% of state income tax, 20 years",
        &[StateIncomeTaxAssessed]),
    entry(17, Family::Credit, "Jobs credit of $500 per job paying over $50k, 5 years",
        &[Jobs50, StateIncomeTaxAssessed]),
    entry(18, Family::Refund, "Sales tax refund on installation fees and fixtures",
        &[IaValue, SalesTaxRate, SalesTaxAssessed]),
    entry(19, Family::Refund, "Sales tax refund on building materials",
        &[BuildingMaterials, SalesTaxRate, SalesTaxAssessed]),
    entry(20, Family::Refund, "Ethanol production refund of $0.20/gal, capped at $6M",
        &[Ethanol, StateIncomeTaxAssessed]),
];

impl Incentive {
    /// Look up incentive `number`
    pub fn from_number(number: i64) -> Result<&'static Incentive> {
        Family::of(number)?;
        Ok(&CATALOG[(number - 1) as usize])
    }

    /// Look up incentive `number`, requiring it to belong to `family`
    pub(crate) fn in_family(number: i64, family: Family) -> Result<&'static Incentive> {
        let incentive = Self::from_number(number)?;
        if incentive.family != family {
            return Err(IncentiveError::UnknownIncentive(number));
        }
        Ok(incentive)
    }
}

/// All incentive programs in ascending order
pub fn catalog() -> &'static [Incentive] {
    &CATALOG
}
