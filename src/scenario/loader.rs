//! Load per-state tax data from CSV

use std::collections::HashSet;
use std::path::Path;

use csv::Reader;
use serde::{Deserialize, Serialize};

use crate::error::{IncentiveError, Result};

/// Tax regime and location factors for one state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateTaxData {
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Income Tax Rate (decimal)")]
    pub income_tax_rate: f64,
    #[serde(rename = "Property Tax Rate (decimal)")]
    pub property_tax_rate: f64,
    #[serde(rename = "State Motor Fuel Tax (decimal)")]
    pub fuel_tax_rate: f64,
    #[serde(rename = "State Sales Tax Rate (decimal)")]
    pub sales_tax_rate: f64,
    #[serde(rename = "Electricity Price (USD/kWh)")]
    pub electricity_price: f64,
    #[serde(rename = "Location Capital Cost Factor (dimensionless)")]
    pub capital_cost_factor: f64,
}

/// State rows in file order, unique by name
#[derive(Debug, Clone, Default)]
pub struct StateTable {
    rows: Vec<StateTaxData>,
}

impl StateTable {
    /// Build from rows, rejecting blank or repeated state names
    pub fn new(rows: Vec<StateTaxData>) -> Result<Self> {
        let mut seen = HashSet::new();
        for row in &rows {
            let name = row.state.trim();
            if name.is_empty() {
                return Err(IncentiveError::InvalidStateTable("blank state name".to_string()));
            }
            if !seen.insert(name.to_string()) {
                return Err(IncentiveError::InvalidStateTable(format!("duplicate state '{}'", name)));
            }
        }
        Ok(Self { rows })
    }

    pub fn get(&self, state: &str) -> Option<&StateTaxData> {
        self.rows.iter().find(|row| row.state.trim() == state)
    }

    pub fn rows(&self) -> &[StateTaxData] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Load a state table from a CSV file
pub fn load_state_table<P: AsRef<Path>>(path: P) -> Result<StateTable> {
    let reader = Reader::from_path(path)?;
    read_rows(reader)
}

/// Load a state table from any reader (e.g., string buffer)
pub fn load_state_table_from_reader<R: std::io::Read>(reader: R) -> Result<StateTable> {
    read_rows(Reader::from_reader(reader))
}

fn read_rows<R: std::io::Read>(mut reader: Reader<R>) -> Result<StateTable> {
    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: StateTaxData = result?;
        rows.push(row);
    }
    StateTable::new(rows)
}
