//! State scenario runner for comparing incentive regimes
//!
//! Holds one plant profile and a state tax table, then evaluates the incentive
//! programs each state offers without re-reading any inputs.

mod loader;
mod plant;
mod states;

pub use loader::{load_state_table, load_state_table_from_reader, StateTable, StateTaxData};
pub use plant::PlantProfile;
pub use states::{state_incentives, STATES_WITH_INCENTIVES};

use log::info;
use rayon::prelude::*;
use serde::Serialize;

use crate::config::TaxConfig;
use crate::error::{IncentiveError, Result};
use crate::incentives::{determine_tax_incentives, IncentiveSummary, TaxIncentives};

/// Incentive outcome for one state
#[derive(Debug, Clone, Serialize)]
pub struct StateResult {
    pub state: String,
    pub incentive_numbers: Vec<u8>,
    pub incentives: TaxIncentives,
    pub summary: IncentiveSummary,
    /// Present value of all incentives at the runner's discount rate
    pub present_value: f64,
}

/// Pre-loaded scenario runner
///
/// # Example
/// ```ignore
/// let table = load_state_table("state_scenarios.csv")?;
/// let runner = ScenarioRunner::new(plant, table, TaxConfig::from_env());
///
/// for result in runner.run_all()? {
///     println!("{}: {:.0}", result.state, result.present_value);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    plant: PlantProfile,
    table: StateTable,
    config: TaxConfig,
}

impl ScenarioRunner {
    pub fn new(plant: PlantProfile, table: StateTable, config: TaxConfig) -> Self {
        Self { plant, table, config }
    }

    /// Evaluate one state row with the programs mapped to its name
    pub fn run_state(&self, state: &StateTaxData) -> Result<StateResult> {
        self.run_with(state, state_incentives(state.state.trim()))
    }

    /// Evaluate one state row with an explicit set of incentive numbers
    pub fn run_with(&self, state: &StateTaxData, incentive_numbers: &[u8]) -> Result<StateResult> {
        let params = self.plant.assess(state);
        let incentives = determine_tax_incentives(incentive_numbers.iter().copied(), &params)?;
        let summary = incentives.summary();
        let present_value = incentives.present_value(self.config.discount_rate);

        info!(
            "{}: incentives {:?}, lifetime total ${:.0}, PV ${:.0}",
            state.state, incentive_numbers, summary.total, present_value
        );

        Ok(StateResult {
            state: state.state.clone(),
            incentive_numbers: incentive_numbers.to_vec(),
            incentives,
            summary,
            present_value,
        })
    }

    /// Evaluate a state from the table by name
    pub fn run(&self, state: &str) -> Result<StateResult> {
        let row = self
            .table
            .get(state)
            .ok_or_else(|| IncentiveError::InvalidStateTable(format!("state '{}' not in table", state)))?;
        self.run_state(row)
    }

    /// Evaluate the named states in parallel; results keep the input order
    pub fn run_states<S: AsRef<str> + Sync>(&self, states: &[S]) -> Result<Vec<StateResult>> {
        states.par_iter().map(|state| self.run(state.as_ref())).collect()
    }

    /// Evaluate every state in the table in parallel
    pub fn run_all(&self) -> Result<Vec<StateResult>> {
        self.table.rows().par_iter().map(|row| self.run_state(row)).collect()
    }

    /// Evaluate the configured baseline rates with no incentives
    pub fn run_baseline(&self) -> Result<StateResult> {
        self.run_with(&self.config.baseline_state("Baseline"), &[])
    }

    pub fn plant(&self) -> &PlantProfile {
        &self.plant
    }

    pub fn table(&self) -> &StateTable {
        &self.table
    }

    pub fn config(&self) -> &TaxConfig {
        &self.config
    }
}
