//! Property and fuel tax exemptions (incentives 1-5)

use log::debug;

use crate::error::{IncentiveError, Result};
use super::catalog::{Family, Incentive};
use super::params::{IncentiveParams, Param};
use super::window::{clip_to, fill, fill_from, scale, window};

/// Tax exemptions per year for exemption `number`
pub fn exemption_amount(number: i64, params: &IncentiveParams) -> Result<Vec<f64>> {
    let incentive = Incentive::in_family(number, Family::Exemption)?;
    params.require_all(incentive.required)?;

    let plant_years = params.plant_years;
    let start = params.start;
    let mut exemption = vec![0.0; plant_years];

    match incentive.number {
        1 => {
            // Value added to property, assumed similar to FCI
            let taxable = params.series(Param::PropertyTaxableValue)?;
            let years = window(start, 20, plant_years);
            fill(&mut exemption, years, params.scalar(Param::ValueAdded)?);
            clip_to(&mut exemption, taxable);
            scale(&mut exemption, params.scalar(Param::PropertyTaxRate)?);
        }
        2 => {
            let years = window(start, 10, plant_years);
            fill_from(&mut exemption, years, params.series(Param::PropertyTaxableValue)?, |v| v);
            scale(&mut exemption, params.scalar(Param::PropertyTaxRate)?);
        }
        3 => {
            let years = window(start, 10, plant_years);
            fill_from(&mut exemption, years, params.series(Param::EthanolEquipment)?, |v| v);
            clip_to(&mut exemption, params.series(Param::PropertyTaxableValue)?);
            scale(&mut exemption, params.scalar(Param::PropertyTaxRate)?);
        }
        4 => {
            let years = window(start, plant_years, plant_years);
            fill_from(&mut exemption, years, params.series(Param::FuelTaxableValue)?, |v| v);
            scale(&mut exemption, params.scalar(Param::FuelTaxRate)?);
        }
        5 => {
            let years = window(start, plant_years, plant_years);
            fill_from(&mut exemption, years, params.series(Param::PropertyTaxableValue)?, |v| v);
            scale(&mut exemption, params.scalar(Param::PropertyTaxRate)?);
        }
        other => return Err(IncentiveError::UnknownIncentive(other.into())),
    }

    debug!("exemption {} over {} years: total {:.2}", number, plant_years, exemption.iter().sum::<f64>());
    Ok(exemption)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn property_params(plant_years: usize) -> IncentiveParams {
        IncentiveParams {
            property_taxable_value: Some(vec![1.0e8; plant_years]),
            property_tax_rate: Some(0.013),
            ..IncentiveParams::new(plant_years)
        }
    }

    #[test]
    fn test_value_added_exemption_limited_by_taxable_value() {
        let mut params = property_params(25);
        params.value_added = Some(2.0e8);

        let exemption = exemption_amount(1, &params).unwrap();

        assert_eq!(exemption.len(), 25);
        for &value in &exemption[..20] {
            assert_relative_eq!(value, 1.0e8 * 0.013);
        }
        assert!(exemption[20..].iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_full_property_exemption_ten_years_from_start() {
        let params = property_params(20).with_start(3);

        let exemption = exemption_amount(2, &params).unwrap();

        assert!(exemption[..3].iter().all(|&v| v == 0.0));
        for &value in &exemption[3..13] {
            assert_relative_eq!(value, 1.3e6);
        }
        assert!(exemption[13..].iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_ethanol_equipment_exemption() {
        let mut params = property_params(12);
        params.ethanol_equipment = Some(vec![4.0e7; 12]);

        let exemption = exemption_amount(3, &params).unwrap();

        assert_relative_eq!(exemption[0], 4.0e7 * 0.013);
        assert_relative_eq!(exemption[9], 4.0e7 * 0.013);
        assert_eq!(exemption[10], 0.0);
    }

    #[test]
    fn test_fuel_exemption_covers_lifetime() {
        let params = IncentiveParams {
            fuel_taxable_value: Some(vec![3.0e7; 8]),
            fuel_tax_rate: Some(0.04),
            ..IncentiveParams::new(8)
        };

        let exemption = exemption_amount(4, &params).unwrap();

        assert_eq!(exemption.len(), 8);
        for &value in &exemption {
            assert_relative_eq!(value, 1.2e6);
        }
    }

    #[test]
    fn test_lifetime_property_exemption() {
        let exemption = exemption_amount(5, &property_params(30)).unwrap();
        assert!(exemption.iter().all(|&v| (v - 1.3e6).abs() < 1e-6));
    }

    #[test]
    fn test_missing_and_foreign_numbers() {
        let params = IncentiveParams::new(10);
        assert!(matches!(
            exemption_amount(1, &params),
            Err(IncentiveError::MissingParameter("value_added"))
        ));
        assert!(matches!(
            exemption_amount(7, &property_params(10)),
            Err(IncentiveError::UnknownIncentive(7))
        ));
    }
}
