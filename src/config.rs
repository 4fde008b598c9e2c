//! Default tax regime and discounting, overridable from the environment

use std::env;

use log::warn;

use crate::scenario::StateTaxData;

pub const DEFAULT_STATE_INCOME_TAX: f64 = 0.065;
pub const DEFAULT_PROPERTY_TAX: f64 = 0.013;
pub const DEFAULT_FUEL_TAX: f64 = 0.0;
pub const DEFAULT_SALES_TAX: f64 = 0.0;
pub const DEFAULT_ELECTRICITY_PRICE: f64 = 0.0685;
pub const DEFAULT_DISCOUNT_RATE: f64 = 0.10;

/// Tax rates applied when no state table row is used, plus the discount rate
/// for present values of incentive cash flows
#[derive(Debug, Clone, PartialEq)]
pub struct TaxConfig {
    pub state_income_tax: f64,
    pub property_tax: f64,
    pub fuel_tax: f64,
    pub sales_tax: f64,
    pub electricity_price: f64,
    pub discount_rate: f64,
}

impl Default for TaxConfig {
    fn default() -> Self {
        Self {
            state_income_tax: DEFAULT_STATE_INCOME_TAX,
            property_tax: DEFAULT_PROPERTY_TAX,
            fuel_tax: DEFAULT_FUEL_TAX,
            sales_tax: DEFAULT_SALES_TAX,
            electricity_price: DEFAULT_ELECTRICITY_PRICE,
            discount_rate: DEFAULT_DISCOUNT_RATE,
        }
    }
}

impl TaxConfig {
    /// Defaults overridden by `STATE_INCOME_TAX`, `PROPERTY_TAX`, `FUEL_TAX`,
    /// `SALES_TAX`, `ELECTRICITY_PRICE` and `DISCOUNT_RATE`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable name
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let read = |key: &str, default: f64| -> f64 {
            match lookup(key) {
                Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                    warn!("ignoring {}={:?}: not a number, using {}", key, raw, default);
                    default
                }),
                None => default,
            }
        };

        Self {
            state_income_tax: read("STATE_INCOME_TAX", defaults.state_income_tax),
            property_tax: read("PROPERTY_TAX", defaults.property_tax),
            fuel_tax: read("FUEL_TAX", defaults.fuel_tax),
            sales_tax: read("SALES_TAX", defaults.sales_tax),
            electricity_price: read("ELECTRICITY_PRICE", defaults.electricity_price),
            discount_rate: read("DISCOUNT_RATE", defaults.discount_rate),
        }
    }

    /// State row carrying these rates, with no location cost adjustment
    pub fn baseline_state(&self, name: &str) -> StateTaxData {
        StateTaxData {
            state: name.to_string(),
            income_tax_rate: self.state_income_tax,
            property_tax_rate: self.property_tax,
            fuel_tax_rate: self.fuel_tax,
            sales_tax_rate: self.sales_tax,
            electricity_price: self.electricity_price,
            capital_cost_factor: 1.0,
        }
    }
}
