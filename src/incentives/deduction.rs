//! Sales tax deduction (incentive 6)

use log::debug;

use crate::error::{IncentiveError, Result};
use super::catalog::{Family, Incentive};
use super::params::{IncentiveParams, Param};
use super::window::{clip_to, fill_from, leading_window, scale};

/// Tax deductions per year for deduction `number`
pub fn deduction_amount(number: i64, params: &IncentiveParams) -> Result<Vec<f64>> {
    let incentive = Incentive::in_family(number, Family::Deduction)?;
    params.require_all(incentive.required)?;

    let plant_years = params.plant_years;
    let mut deduction = vec![0.0; plant_years];

    match incentive.number {
        6 => {
            let years = leading_window(params.start, plant_years, plant_years);
            fill_from(&mut deduction, years, params.series(Param::NmValue)?, |v| v);
            clip_to(&mut deduction, params.series(Param::SalesTaxableValue)?);
            scale(&mut deduction, params.scalar(Param::SalesTaxRate)?);
        }
        other => return Err(IncentiveError::UnknownIncentive(other.into())),
    }

    debug!("deduction {} over {} years: total {:.2}", number, plant_years, deduction.iter().sum::<f64>());
    Ok(deduction)
}
