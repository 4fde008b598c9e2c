//! Named parameter bag consumed by the incentive formulas
//!
//! Every formula input is optional here; each formula declares which names it
//! needs (see [`super::catalog`]) and a missing one is reported by name.

use serde::{Deserialize, Serialize};

use crate::error::{IncentiveError, Result};

/// Name of a single formula input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Param {
    ValueAdded,
    PropertyTaxableValue,
    PropertyTaxRate,
    EthanolEquipment,
    FuelTaxableValue,
    FuelTaxRate,
    NmValue,
    SalesTaxableValue,
    SalesTaxRate,
    SalesTaxAssessed,
    TotalCapitalInvestment,
    Ethanol,
    ElectricityEquipment,
    Jobs50,
    StateIncomeTaxAssessed,
    PropertyTaxAssessed,
    IaValue,
    BuildingMaterials,
}

impl Param {
    /// Wire name, as used in the JSON parameter bag and in error messages
    pub fn name(self) -> &'static str {
        match self {
            Param::ValueAdded => "value_added",
            Param::PropertyTaxableValue => "property_taxable_value",
            Param::PropertyTaxRate => "property_tax_rate",
            Param::EthanolEquipment => "ethanol_eq",
            Param::FuelTaxableValue => "fuel_taxable_value",
            Param::FuelTaxRate => "fuel_tax_rate",
            Param::NmValue => "NM_value",
            Param::SalesTaxableValue => "sales_taxable_value",
            Param::SalesTaxRate => "sales_tax_rate",
            Param::SalesTaxAssessed => "sales_tax_assessed",
            Param::TotalCapitalInvestment => "TCI",
            Param::Ethanol => "ethanol",
            Param::ElectricityEquipment => "elec_eq",
            Param::Jobs50 => "jobs_50",
            Param::StateIncomeTaxAssessed => "state_income_tax_assessed",
            Param::PropertyTaxAssessed => "property_tax_assessed",
            Param::IaValue => "IA_value",
            Param::BuildingMaterials => "building_mats",
        }
    }
}

impl std::fmt::Display for Param {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Flat parameter bag shared by all incentive families
///
/// Per-year series are expected to be `plant_years` long. Years past the end
/// of a shorter series are treated as zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IncentiveParams {
    /// Number of years the plant operates; length of every output vector
    pub plant_years: usize,

    /// Year the incentive starts
    #[serde(default)]
    pub start: usize,

    // Property
    /// Value added to property [$], assumed similar to FCI
    #[serde(default)]
    pub value_added: Option<f64>,
    /// Value of property on which property tax can be assessed [$/yr]
    #[serde(default)]
    pub property_taxable_value: Option<Vec<f64>>,
    /// Property tax rate [-]
    #[serde(default)]
    pub property_tax_rate: Option<f64>,
    /// Property tax per year [$/yr]
    #[serde(default)]
    pub property_tax_assessed: Option<Vec<f64>>,
    /// Value of equipment used for producing ethanol [$]
    #[serde(default, rename = "ethanol_eq")]
    pub ethanol_equipment: Option<Vec<f64>>,

    // Fuel
    /// Amount of fuel on which fuel tax can be assessed [$/yr]
    #[serde(default)]
    pub fuel_taxable_value: Option<Vec<f64>>,
    /// Fuel tax rate [-]
    #[serde(default)]
    pub fuel_tax_rate: Option<f64>,

    // Sales
    /// Value of biomass boilers, gasifiers, turbine-generators, storage and
    /// feedstock handling equipment plus biomass materials [$/yr]
    #[serde(default, rename = "NM_value")]
    pub nm_value: Option<Vec<f64>>,
    /// Value of purchases on which sales tax can be assessed [$/yr]
    #[serde(default)]
    pub sales_taxable_value: Option<Vec<f64>>,
    /// Sales tax rate [-]
    #[serde(default)]
    pub sales_tax_rate: Option<f64>,
    /// Sales tax per year [$/yr]
    #[serde(default)]
    pub sales_tax_assessed: Option<Vec<f64>>,
    /// Fees paid to (sub)contractors plus racks, shelving and conveyors [$]
    #[serde(default, rename = "IA_value")]
    pub ia_value: Option<Vec<f64>>,
    /// Cost of building and construction materials [$]
    #[serde(default)]
    pub building_mats: Option<Vec<f64>>,

    // Income
    /// Total capital investment [$]
    #[serde(default, rename = "TCI")]
    pub tci: Option<f64>,
    /// Volume of ethanol produced [gal/yr]
    #[serde(default)]
    pub ethanol: Option<Vec<f64>>,
    /// Value of equipment used for producing electricity [$]
    #[serde(default, rename = "elec_eq")]
    pub electricity_equipment: Option<Vec<f64>>,
    /// Number of jobs paying more than 50,000 USD/yr
    #[serde(default)]
    pub jobs_50: Option<u32>,
    /// State income tax per year [$/yr]
    #[serde(default)]
    pub state_income_tax_assessed: Option<Vec<f64>>,
}

impl IncentiveParams {
    /// Empty parameter bag for a plant operating `plant_years` years
    pub fn new(plant_years: usize) -> Self {
        Self {
            plant_years,
            ..Default::default()
        }
    }

    /// Set the year incentives start
    pub fn with_start(mut self, start: usize) -> Self {
        self.start = start;
        self
    }

    /// Parse a parameter bag from JSON; unknown keys are ignored
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Whether a value was supplied for `param`
    pub fn has(&self, param: Param) -> bool {
        match param {
            Param::ValueAdded => self.value_added.is_some(),
            Param::PropertyTaxableValue => self.property_taxable_value.is_some(),
            Param::PropertyTaxRate => self.property_tax_rate.is_some(),
            Param::EthanolEquipment => self.ethanol_equipment.is_some(),
            Param::FuelTaxableValue => self.fuel_taxable_value.is_some(),
            Param::FuelTaxRate => self.fuel_tax_rate.is_some(),
            Param::NmValue => self.nm_value.is_some(),
            Param::SalesTaxableValue => self.sales_taxable_value.is_some(),
            Param::SalesTaxRate => self.sales_tax_rate.is_some(),
            Param::SalesTaxAssessed => self.sales_tax_assessed.is_some(),
            Param::TotalCapitalInvestment => self.tci.is_some(),
            Param::Ethanol => self.ethanol.is_some(),
            Param::ElectricityEquipment => self.electricity_equipment.is_some(),
            Param::Jobs50 => self.jobs_50.is_some(),
            Param::StateIncomeTaxAssessed => self.state_income_tax_assessed.is_some(),
            Param::PropertyTaxAssessed => self.property_tax_assessed.is_some(),
            Param::IaValue => self.ia_value.is_some(),
            Param::BuildingMaterials => self.building_mats.is_some(),
        }
    }

    /// Fail on the first name in `required` that has no value
    pub fn require_all(&self, required: &[Param]) -> Result<()> {
        match required.iter().find(|&&p| !self.has(p)) {
            Some(p) => Err(IncentiveError::MissingParameter(p.name())),
            None => Ok(()),
        }
    }

    /// Per-year series for `param`
    pub fn series(&self, param: Param) -> Result<&[f64]> {
        let series = match param {
            Param::PropertyTaxableValue => self.property_taxable_value.as_deref(),
            Param::EthanolEquipment => self.ethanol_equipment.as_deref(),
            Param::FuelTaxableValue => self.fuel_taxable_value.as_deref(),
            Param::NmValue => self.nm_value.as_deref(),
            Param::SalesTaxableValue => self.sales_taxable_value.as_deref(),
            Param::SalesTaxAssessed => self.sales_tax_assessed.as_deref(),
            Param::Ethanol => self.ethanol.as_deref(),
            Param::ElectricityEquipment => self.electricity_equipment.as_deref(),
            Param::StateIncomeTaxAssessed => self.state_income_tax_assessed.as_deref(),
            Param::PropertyTaxAssessed => self.property_tax_assessed.as_deref(),
            Param::IaValue => self.ia_value.as_deref(),
            Param::BuildingMaterials => self.building_mats.as_deref(),
            _ => None,
        };
        series.ok_or(IncentiveError::MissingParameter(param.name()))
    }

    /// Scalar value for `param`
    pub fn scalar(&self, param: Param) -> Result<f64> {
        let value = match param {
            Param::ValueAdded => self.value_added,
            Param::PropertyTaxRate => self.property_tax_rate,
            Param::FuelTaxRate => self.fuel_tax_rate,
            Param::SalesTaxRate => self.sales_tax_rate,
            Param::TotalCapitalInvestment => self.tci,
            Param::Jobs50 => self.jobs_50.map(f64::from),
            _ => None,
        };
        value.ok_or(IncentiveError::MissingParameter(param.name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_uses_wire_names() {
        let json = r#"{
            "plant_years": 3,
            "TCI": 2.5e8,
            "NM_value": [1.0, 2.0, 3.0],
            "IA_value": [4.0, 0.0, 0.0],
            "elec_eq": [5.0, 5.0, 5.0],
            "jobs_50": 12,
            "wages": [1.0, 1.0, 1.0]
        }"#;
        let params = IncentiveParams::from_json(json).unwrap();

        assert_eq!(params.plant_years, 3);
        assert_eq!(params.start, 0);
        assert_eq!(params.tci, Some(2.5e8));
        assert_eq!(params.nm_value.as_deref(), Some(&[1.0, 2.0, 3.0][..]));
        assert_eq!(params.ia_value.as_deref(), Some(&[4.0, 0.0, 0.0][..]));
        assert_eq!(params.electricity_equipment.as_deref(), Some(&[5.0, 5.0, 5.0][..]));
        assert_eq!(params.scalar(Param::Jobs50).unwrap(), 12.0);
    }

    #[test]
    fn test_require_all_names_first_missing() {
        let params = IncentiveParams {
            tci: Some(1.0),
            ..IncentiveParams::new(5)
        };

        assert!(params
            .require_all(&[Param::TotalCapitalInvestment])
            .is_ok());

        let err = params
            .require_all(&[Param::TotalCapitalInvestment, Param::StateIncomeTaxAssessed, Param::Ethanol])
            .unwrap_err();
        assert!(matches!(err, IncentiveError::MissingParameter("state_income_tax_assessed")));
        assert_eq!(err.to_string(), "missing parameter 'state_income_tax_assessed'");
    }

    #[test]
    fn test_series_and_scalar_lookup() {
        let params = IncentiveParams {
            ethanol: Some(vec![1.0; 4]),
            property_tax_rate: Some(0.013),
            ..IncentiveParams::new(4)
        };

        assert_eq!(params.series(Param::Ethanol).unwrap().len(), 4);
        assert_eq!(params.scalar(Param::PropertyTaxRate).unwrap(), 0.013);
        assert!(matches!(
            params.series(Param::BuildingMaterials),
            Err(IncentiveError::MissingParameter("building_mats"))
        ));
    }
}
