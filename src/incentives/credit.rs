//! Income and property tax credits (incentives 7-17)
//!
//! Amounts are already dollars of credit and are not multiplied by a tax
//! rate. Every credit except 11 and 16 is nonrefundable and is clipped to the
//! tax assessed in the same year.

use log::debug;

use crate::error::{IncentiveError, Result};
use super::catalog::{Family, Incentive};
use super::params::{IncentiveParams, Param};
use super::window::{anchored_window, cap, clip_to, fill, fill_from, place, window};

/// Fuel content of ethanol [btu/gal]
const ETHANOL_BTU_PER_GAL: f64 = 76_100.0;

/// Credit of $0.20 per 76,000 btu of ethanol fuel content
const ETHANOL_CONTENT_CREDIT: f64 = ETHANOL_BTU_PER_GAL * 0.2 / 76_000.0;

/// Credit 13 tiers: (TCI upper bound, rate); above the last bound uses `TIER_TOP_RATE`
const INVESTMENT_TIERS: [(f64, f64); 2] = [(3.0e5, 0.07), (1.0e6, 0.14)];
const TIER_TOP_RATE: f64 = 0.18;

/// Flat annual amount for the tiered investment credit
pub fn tiered_investment_credit(tci: f64) -> f64 {
    let rate = INVESTMENT_TIERS
        .iter()
        .find(|&&(bound, _)| tci <= bound)
        .map(|&(_, rate)| rate)
        .unwrap_or(TIER_TOP_RATE);
    rate * tci
}

/// Tax credits per year for credit `number`
pub fn credit_amount(number: i64, params: &IncentiveParams) -> Result<Vec<f64>> {
    let incentive = Incentive::in_family(number, Family::Credit)?;
    params.require_all(incentive.required)?;

    let plant_years = params.plant_years;
    let start = params.start;
    let mut credit = vec![0.0; plant_years];

    match incentive.number {
        7 => {
            // Qualified capital investment, assumed TCI
            let tci = params.scalar(Param::TotalCapitalInvestment)?;
            fill(&mut credit, window(start, 10, plant_years), 0.015 * tci);
            clip_to(&mut credit, params.series(Param::StateIncomeTaxAssessed)?);
        }
        8 => {
            let tci = params.scalar(Param::TotalCapitalInvestment)?;
            fill(&mut credit, window(start, 22, plant_years), 0.03 * tci);
            cap(&mut credit, 7.5e5);
            clip_to(&mut credit, params.series(Param::StateIncomeTaxAssessed)?);
        }
        9 => {
            let years = window(start, 5, plant_years);
            fill_from(&mut credit, years, params.series(Param::Ethanol)?, |gal| ETHANOL_CONTENT_CREDIT * gal);
            cap(&mut credit, 3.0e6);
            clip_to(&mut credit, params.series(Param::StateIncomeTaxAssessed)?);
        }
        10 => {
            // 5% of qualifying investment taken evenly over the window
            let duration = 5;
            let total = 0.05 * params.scalar(Param::TotalCapitalInvestment)?;
            fill(&mut credit, window(start, duration, plant_years), total / duration as f64);
            clip_to(&mut credit, params.series(Param::StateIncomeTaxAssessed)?);
        }
        11 => {
            let years = window(start, 15, plant_years);
            fill_from(&mut credit, years, params.series(Param::StateIncomeTaxAssessed)?, |v| v);
        }
        12 => {
            // $1/gal
            let years = window(start, plant_years, plant_years);
            fill_from(&mut credit, years, params.series(Param::Ethanol)?, |gal| gal);
            cap(&mut credit, 5.0e6);
            clip_to(&mut credit, params.series(Param::StateIncomeTaxAssessed)?);
        }
        13 => {
            let assessed = params.series(Param::StateIncomeTaxAssessed)?;
            let amount = tiered_investment_credit(params.scalar(Param::TotalCapitalInvestment)?);
            fill(&mut credit, anchored_window(start, 2, plant_years, assessed), amount);
            cap(&mut credit, 1.0e6);
            clip_to(&mut credit, assessed);
        }
        14 => {
            // Cost of constructing and equipping the facility, equal installments
            let duration = 7;
            let assessed = params.series(Param::PropertyTaxAssessed)?;
            let amount = 0.25 * params.scalar(Param::TotalCapitalInvestment)? / duration as f64;
            fill(&mut credit, anchored_window(start, duration, plant_years, assessed), amount);
            clip_to(&mut credit, assessed);
        }
        15 => {
            let duration = 15;
            let assessed = params.series(Param::StateIncomeTaxAssessed)?;
            let equipment = params.series(Param::ElectricityEquipment)?;
            let amounts: Vec<f64> = window(start, duration, plant_years)
                .map(|year| 0.25 * equipment.get(year).copied().unwrap_or(0.0))
                .collect();
            place(&mut credit, anchored_window(start, duration, plant_years, assessed), &amounts);
            cap(&mut credit, 6.5e5);
            clip_to(&mut credit, assessed);
        }
        16 => {
            let years = window(start, 20, plant_years);
            fill_from(&mut credit, years, params.series(Param::StateIncomeTaxAssessed)?, |v| 0.75 * v);
        }
        17 => {
            let jobs = params.scalar(Param::Jobs50)?;
            fill(&mut credit, window(start, 5, plant_years), 500.0 * jobs);
            cap(&mut credit, 1.75e5);
            clip_to(&mut credit, params.series(Param::StateIncomeTaxAssessed)?);
        }
        other => return Err(IncentiveError::UnknownIncentive(other.into())),
    }

    debug!("credit {} over {} years: total {:.2}", number, plant_years, credit.iter().sum::<f64>());
    Ok(credit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn income_params(plant_years: usize, assessed: f64) -> IncentiveParams {
        IncentiveParams {
            state_income_tax_assessed: Some(vec![assessed; plant_years]),
            ..IncentiveParams::new(plant_years)
        }
    }

    #[test]
    fn test_full_income_credit_fifteen_years() {
        let credit = credit_amount(11, &income_params(20, 1000.0)).unwrap();

        let mut expected = vec![1000.0; 15];
        expected.extend(vec![0.0; 5]);
        assert_eq!(credit, expected);
    }

    #[test]
    fn test_ethanol_content_credit_capped() {
        let mut params = income_params(10, 1.0e7);
        params.ethanol = Some(vec![2.0e7; 10]);

        let credit = credit_amount(9, &params).unwrap();

        assert_eq!(&credit[..5], &[3.0e6; 5]);
        assert_eq!(&credit[5..], &[0.0; 5]);
    }

    #[test]
    fn test_ethanol_content_credit_below_cap() {
        let mut params = income_params(10, 1.0e7);
        params.ethanol = Some(vec![1.0e7; 10]);

        let credit = credit_amount(9, &params).unwrap();

        assert_relative_eq!(credit[0], 76_100.0 * 0.2 / 76_000.0 * 1.0e7);
        assert_eq!(credit[5], 0.0);
    }

    #[test]
    fn test_investment_credits() {
        let mut params = income_params(30, 2.0e6);
        params.tci = Some(1.0e8);

        let credit = credit_amount(7, &params).unwrap();
        for &value in &credit[..10] {
            assert_relative_eq!(value, 1.5e6);
        }
        assert!(credit[10..].iter().all(|&v| v == 0.0));

        let credit = credit_amount(8, &params).unwrap();
        assert!(credit[..22].iter().all(|&v| v == 7.5e5));
        assert!(credit[22..].iter().all(|&v| v == 0.0));

        let credit = credit_amount(10, &params).unwrap();
        for &value in &credit[..5] {
            assert_relative_eq!(value, 1.0e6);
        }
        assert!(credit[5..].iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_investment_credit_limited_by_liability() {
        let mut params = income_params(12, 2.0e5);
        params.tci = Some(1.0e8);

        let credit = credit_amount(7, &params).unwrap();

        assert!(credit[..10].iter().all(|&v| v == 2.0e5));
    }

    #[test]
    fn test_ethanol_producer_credit() {
        let mut params = income_params(8, 4.0e6);
        params.ethanol = Some(vec![6.0e6, 6.0e6, 3.0e6, 3.0e6, 3.0e6, 3.0e6, 3.0e6, 3.0e6]);

        let credit = credit_amount(12, &params).unwrap();

        assert_eq!(credit[0], 4.0e6);
        assert_eq!(credit[2], 3.0e6);
    }

    #[test]
    fn test_tiered_investment_credit() {
        assert_relative_eq!(tiered_investment_credit(5.0e4), 3.5e3);
        assert_relative_eq!(tiered_investment_credit(3.0e5), 2.1e4);
        assert_relative_eq!(tiered_investment_credit(1.0e6), 1.4e5);
        assert_relative_eq!(tiered_investment_credit(2.0e6), 3.6e5);
    }

    #[test]
    fn test_tiered_credit_anchored_to_peak_liability() {
        let mut assessed = vec![1.0e6; 10];
        assessed[6] = 2.0e6;
        let params = IncentiveParams {
            tci: Some(2.0e6),
            state_income_tax_assessed: Some(assessed),
            ..IncentiveParams::new(10)
        };

        let credit = credit_amount(13, &params).unwrap();

        assert!(credit[..6].iter().all(|&v| v == 0.0));
        assert_relative_eq!(credit[6], 3.6e5);
        assert_relative_eq!(credit[7], 3.6e5);
        assert!(credit[8..].iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_tiered_credit_capped_and_pulled_back() {
        let mut assessed = vec![1.0e7; 10];
        assessed[9] = 2.0e7;
        let params = IncentiveParams {
            tci: Some(1.0e8),
            state_income_tax_assessed: Some(assessed),
            ..IncentiveParams::new(10)
        };

        let credit = credit_amount(13, &params).unwrap();

        assert!(credit[..8].iter().all(|&v| v == 0.0));
        assert_eq!(&credit[8..], &[1.0e6, 1.0e6]);
    }

    #[test]
    fn test_construction_credit_limited_by_property_tax() {
        let mut assessed = vec![5.0e6; 20];
        assessed[0] = 1.0e6;
        let params = IncentiveParams {
            tci: Some(1.4e8),
            property_tax_assessed: Some(assessed),
            ..IncentiveParams::new(20)
        };

        let credit = credit_amount(14, &params).unwrap();

        // 25% of $140M over 7 years is $5M per year; the peak is first hit in year 1
        assert_eq!(credit[0], 0.0);
        assert!(credit[1..8].iter().all(|&v| v == 5.0e6));
        assert!(credit[8..].iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_electricity_equipment_credit() {
        let params = IncentiveParams {
            electricity_equipment: Some(vec![4.0e6; 20]),
            state_income_tax_assessed: Some(vec![8.0e5; 20]),
            ..IncentiveParams::new(20)
        };

        let credit = credit_amount(15, &params).unwrap();

        assert!(credit[..15].iter().all(|&v| v == 6.5e5));
        assert!(credit[15..].iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_electricity_equipment_credit_follows_peak_liability() {
        // 25% of equipment runs 50k, 100k, ... per year of the requested window
        let equipment: Vec<f64> = (1..=20).map(|n| n as f64 * 2.0e5).collect();
        let mut assessed = vec![6.0e5; 20];
        assessed[7] = 1.0e5;
        assessed[8] = 1.0e6;
        let params = IncentiveParams {
            electricity_equipment: Some(equipment.clone()),
            state_income_tax_assessed: Some(assessed.clone()),
            ..IncentiveParams::new(20)
        };

        let credit = credit_amount(15, &params).unwrap();

        // Peak in year 8 leaves too few years, so the window is pulled back to [5, 20)
        assert!(credit[..5].iter().all(|&v| v == 0.0));
        for k in 0..15 {
            let expected = (0.25 * equipment[k]).min(6.5e5).min(assessed[5 + k]);
            assert_eq!(credit[5 + k], expected, "year {}", 5 + k);
        }
        assert_eq!(credit[5], 5.0e4);
        assert_eq!(credit[7], 1.0e5);
        assert_eq!(credit[8], 2.0e5);
        assert_eq!(credit[19], 6.0e5);

        // A late start takes fewer years of amounts than the pulled-back window holds
        let params = IncentiveParams {
            electricity_equipment: Some(equipment),
            state_income_tax_assessed: Some(vec![1.0e6; 20]),
            ..IncentiveParams::new(20)
        }
        .with_start(10);

        let credit = credit_amount(15, &params).unwrap();

        assert!(credit[..5].iter().all(|&v| v == 0.0));
        assert_eq!(&credit[5..10], &[5.5e5, 6.0e5, 6.5e5, 6.5e5, 6.5e5]);
        assert!(credit[10..15].iter().all(|&v| v == 6.5e5));
        assert!(credit[15..].iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_partial_income_credit_and_jobs_credit() {
        let mut params = income_params(25, 1.0e5);
        let credit = credit_amount(16, &params).unwrap();
        assert!(credit[..20].iter().all(|&v| v == 7.5e4));
        assert!(credit[20..].iter().all(|&v| v == 0.0));

        params.jobs_50 = Some(400);
        let credit = credit_amount(17, &params).unwrap();
        // 400 jobs would be $200k, capped at $175k then limited to $100k liability
        assert!(credit[..5].iter().all(|&v| v == 1.0e5));

        params.state_income_tax_assessed = Some(vec![1.0e6; 25]);
        let credit = credit_amount(17, &params).unwrap();
        assert!(credit[..5].iter().all(|&v| v == 1.75e5));
        assert!(credit[5..].iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_missing_parameter_named() {
        let params = income_params(10, 1.0);
        assert!(matches!(
            credit_amount(17, &params),
            Err(IncentiveError::MissingParameter("jobs_50"))
        ));
        assert!(matches!(
            credit_amount(14, &params),
            Err(IncentiveError::MissingParameter("TCI"))
        ));
    }
}
