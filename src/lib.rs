//! Tax Incentives - state incentive cash flows for biorefinery techno-economic analysis
//!
//! This library provides:
//! - Per-year exemption, deduction, credit and refund amounts for 20 state programs
//! - Aggregation of selected programs into four fixed-shape cash flow vectors
//! - State scenario comparison from a state tax table and a plant profile

pub mod config;
pub mod error;
pub mod incentives;
pub mod scenario;

// Re-export commonly used types
pub use config::TaxConfig;
pub use error::{IncentiveError, Result};
pub use incentives::{determine_tax_incentives, Family, Incentive, IncentiveParams, TaxIncentives};
pub use scenario::{PlantProfile, ScenarioRunner, StateTaxData};
