//! Plant-side inputs supplied by the process simulation / TEA model

use serde::{Deserialize, Serialize};

use crate::incentives::IncentiveParams;
use super::loader::StateTaxData;

/// Per-year tax bases and financial scalars for one plant design
///
/// Series are untaxed bases; [`PlantProfile::assess`] applies a state's rates
/// to produce the assessed-tax series the incentive formulas are limited by.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlantProfile {
    pub plant_years: usize,
    #[serde(default)]
    pub start: usize,

    /// Total capital investment before location adjustment [$]
    #[serde(rename = "TCI")]
    pub tci: f64,
    /// Value added to property [$], typically FCI
    pub value_added: f64,
    #[serde(default)]
    pub jobs_50: u32,

    /// Income subject to state income tax [$/yr]
    pub taxable_income: Vec<f64>,
    /// Value of property on which property tax can be assessed [$/yr]
    pub property_taxable_value: Vec<f64>,
    /// Purchases on which sales tax can be assessed [$/yr]
    pub sales_taxable_value: Vec<f64>,
    /// Ethanol produced [gal/yr]
    pub ethanol: Vec<f64>,

    // Bases only some programs use; left unset they stay missing so the
    // programs that need them fail by name.
    /// Fuel on which fuel tax can be assessed [$/yr]
    #[serde(default)]
    pub fuel_taxable_value: Option<Vec<f64>>,
    #[serde(default, rename = "ethanol_eq")]
    pub ethanol_equipment: Option<Vec<f64>>,
    #[serde(default, rename = "elec_eq")]
    pub electricity_equipment: Option<Vec<f64>>,
    #[serde(default, rename = "NM_value")]
    pub nm_value: Option<Vec<f64>>,
    #[serde(default, rename = "IA_value")]
    pub ia_value: Option<Vec<f64>>,
    #[serde(default)]
    pub building_mats: Option<Vec<f64>>,
}

fn times(series: &[f64], rate: f64) -> Vec<f64> {
    series.iter().map(|v| v * rate).collect()
}

impl PlantProfile {
    /// Parameter bag for this plant under `state`'s tax regime
    ///
    /// Capital investment and value added are scaled by the location capital
    /// cost factor. Losses carry no income tax. Optional bases the profile
    /// leaves unset stay unset in the parameter bag.
    pub fn assess(&self, state: &StateTaxData) -> IncentiveParams {
        let factor = state.capital_cost_factor;
        let taxable_income: Vec<f64> = self.taxable_income.iter().map(|v| v.max(0.0)).collect();

        IncentiveParams {
            plant_years: self.plant_years,
            start: self.start,
            value_added: Some(self.value_added * factor),
            property_taxable_value: Some(self.property_taxable_value.clone()),
            property_tax_rate: Some(state.property_tax_rate),
            property_tax_assessed: Some(times(&self.property_taxable_value, state.property_tax_rate)),
            ethanol_equipment: self.ethanol_equipment.clone(),
            fuel_taxable_value: self.fuel_taxable_value.clone(),
            fuel_tax_rate: Some(state.fuel_tax_rate),
            nm_value: self.nm_value.clone(),
            sales_taxable_value: Some(self.sales_taxable_value.clone()),
            sales_tax_rate: Some(state.sales_tax_rate),
            sales_tax_assessed: Some(times(&self.sales_taxable_value, state.sales_tax_rate)),
            ia_value: self.ia_value.clone(),
            building_mats: self.building_mats.clone(),
            tci: Some(self.tci * factor),
            ethanol: Some(self.ethanol.clone()),
            electricity_equipment: self.electricity_equipment.clone(),
            jobs_50: Some(self.jobs_50),
            state_income_tax_assessed: Some(times(&taxable_income, state.income_tax_rate)),
        }
    }
}
