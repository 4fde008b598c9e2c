//! Sales tax and production refunds (incentives 18-20)

use log::debug;

use crate::error::{IncentiveError, Result};
use super::catalog::{Family, Incentive};
use super::params::{IncentiveParams, Param};
use super::window::{cap, clip_to, fill_from, leading_window, window};

/// Refund of $0.20 per gallon of ethanol
const ETHANOL_REFUND_PER_GAL: f64 = 0.2;
const ETHANOL_REFUND_CAP: f64 = 6.0e6;

/// Tax refunds per year for refund `number`
pub fn refund_amount(number: i64, params: &IncentiveParams) -> Result<Vec<f64>> {
    let incentive = Incentive::in_family(number, Family::Refund)?;
    params.require_all(incentive.required)?;

    let plant_years = params.plant_years;
    let start = params.start;
    let mut refund = vec![0.0; plant_years];

    match incentive.number {
        18 | 19 => {
            let base = if incentive.number == 18 {
                params.series(Param::IaValue)?
            } else {
                params.series(Param::BuildingMaterials)?
            };
            let rate = params.scalar(Param::SalesTaxRate)?;
            let years = leading_window(start, 1, plant_years);
            fill_from(&mut refund, years, base, |v| rate * v);
            clip_to(&mut refund, params.series(Param::SalesTaxAssessed)?);
        }
        20 => {
            let years = window(start, plant_years, plant_years);
            fill_from(&mut refund, years, params.series(Param::Ethanol)?, |v| ETHANOL_REFUND_PER_GAL * v);
            cap(&mut refund, ETHANOL_REFUND_CAP);
            clip_to(&mut refund, params.series(Param::StateIncomeTaxAssessed)?);
        }
        other => return Err(IncentiveError::UnknownIncentive(other.into())),
    }

    debug!("refund {} over {} years: total {:.2}", number, plant_years, refund.iter().sum::<f64>());
    Ok(refund)
}
