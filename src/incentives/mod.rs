//! Incentive calculator: per-year exemptions, deductions, credits and refunds
//!
//! Each incentive number maps to exactly one family and one formula. The
//! aggregate entry point partitions the requested numbers by family, runs each
//! formula over the plant horizon and sums the results per family.

mod catalog;
mod cashflows;
mod credit;
mod deduction;
mod exemption;
mod params;
mod refund;
pub mod window;

use std::collections::{BTreeMap, BTreeSet};

use log::debug;

use crate::error::Result;

pub use catalog::{catalog, Family, Incentive};
pub use cashflows::{present_value, IncentiveRow, IncentiveSummary, TaxIncentives};
pub use credit::{credit_amount, tiered_investment_credit};
pub use deduction::deduction_amount;
pub use exemption::exemption_amount;
pub use params::{IncentiveParams, Param};
pub use refund::refund_amount;

/// Cash flow vector for a single incentive, routed to its family formula
pub fn incentive_amount(number: i64, params: &IncentiveParams) -> Result<Vec<f64>> {
    match Family::of(number)? {
        Family::Exemption => exemption_amount(number, params),
        Family::Deduction => deduction_amount(number, params),
        Family::Credit => credit_amount(number, params),
        Family::Refund => refund_amount(number, params),
    }
}

/// Tax exemptions, deductions, credits and refunds for a set of incentives
///
/// Duplicate numbers count once. Every number is checked against the known
/// families before any formula runs; a family with nothing selected comes back
/// as zeros over the plant horizon.
pub fn determine_tax_incentives<I>(incentive_numbers: I, params: &IncentiveParams) -> Result<TaxIncentives>
where
    I: IntoIterator,
    I::Item: Into<i64>,
{
    let numbers: BTreeSet<i64> = incentive_numbers.into_iter().map(Into::into).collect();

    let mut by_family: BTreeMap<Family, Vec<i64>> = BTreeMap::new();
    for number in numbers {
        by_family.entry(Family::of(number)?).or_default().push(number);
    }

    let mut incentives = TaxIncentives::zeros(params.plant_years);
    for (family, numbers) in &by_family {
        debug!("evaluating {} {:?} over {} years", family.name(), numbers, params.plant_years);
        let totals = incentives.family_mut(*family);
        for &number in numbers {
            let amounts = incentive_amount(number, params)?;
            for (total, amount) in totals.iter_mut().zip(amounts) {
                *total += amount;
            }
        }
    }

    Ok(incentives)
}
