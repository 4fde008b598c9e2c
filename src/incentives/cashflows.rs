//! Aggregated incentive cash flows handed to the techno-economic analysis

use std::io::Write;

use serde::Serialize;

use crate::error::Result;
use super::catalog::Family;

/// Per-year incentive cash flows, one vector per family
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaxIncentives {
    pub exemptions: Vec<f64>,
    pub deductions: Vec<f64>,
    pub credits: Vec<f64>,
    pub refunds: Vec<f64>,
}

/// A single year of incentive output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncentiveRow {
    pub year: usize,
    pub exemptions: f64,
    pub deductions: f64,
    pub credits: f64,
    pub refunds: f64,
    pub total: f64,
}

/// Lifetime totals per family
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncentiveSummary {
    pub plant_years: usize,
    pub total_exemptions: f64,
    pub total_deductions: f64,
    pub total_credits: f64,
    pub total_refunds: f64,
    pub total: f64,
}

impl TaxIncentives {
    /// All-zero cash flows over `plant_years`
    pub fn zeros(plant_years: usize) -> Self {
        Self {
            exemptions: vec![0.0; plant_years],
            deductions: vec![0.0; plant_years],
            credits: vec![0.0; plant_years],
            refunds: vec![0.0; plant_years],
        }
    }

    pub fn plant_years(&self) -> usize {
        self.exemptions.len()
    }

    /// Vector for one family
    pub fn family(&self, family: Family) -> &[f64] {
        match family {
            Family::Exemption => &self.exemptions,
            Family::Deduction => &self.deductions,
            Family::Credit => &self.credits,
            Family::Refund => &self.refunds,
        }
    }

    pub(crate) fn family_mut(&mut self, family: Family) -> &mut Vec<f64> {
        match family {
            Family::Exemption => &mut self.exemptions,
            Family::Deduction => &mut self.deductions,
            Family::Credit => &mut self.credits,
            Family::Refund => &mut self.refunds,
        }
    }

    /// Unpack as (exemptions, deductions, credits, refunds)
    pub fn into_tuple(self) -> (Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>) {
        (self.exemptions, self.deductions, self.credits, self.refunds)
    }

    /// (exemptions, deductions, credits, refunds) per year, up to the shortest family
    fn years(&self) -> impl Iterator<Item = (f64, f64, f64, f64)> + '_ {
        self.exemptions
            .iter()
            .zip(&self.deductions)
            .zip(&self.credits)
            .zip(&self.refunds)
            .map(|(((&e, &d), &c), &r)| (e, d, c, r))
    }

    /// Sum of all four families per year
    pub fn total(&self) -> Vec<f64> {
        self.years().map(|(e, d, c, r)| e + d + c + r).collect()
    }

    /// One row per operating year
    pub fn rows(&self) -> Vec<IncentiveRow> {
        self.years()
            .enumerate()
            .map(|(year, (exemptions, deductions, credits, refunds))| IncentiveRow {
                year,
                exemptions,
                deductions,
                credits,
                refunds,
                total: exemptions + deductions + credits + refunds,
            })
            .collect()
    }

    /// Lifetime totals
    pub fn summary(&self) -> IncentiveSummary {
        let total_exemptions: f64 = self.exemptions.iter().sum();
        let total_deductions: f64 = self.deductions.iter().sum();
        let total_credits: f64 = self.credits.iter().sum();
        let total_refunds: f64 = self.refunds.iter().sum();

        IncentiveSummary {
            plant_years: self.plant_years(),
            total_exemptions,
            total_deductions,
            total_credits,
            total_refunds,
            total: total_exemptions + total_deductions + total_credits + total_refunds,
        }
    }

    /// Present value of the yearly total, discounted at the end of each year
    pub fn present_value(&self, discount_rate: f64) -> f64 {
        present_value(&self.total(), discount_rate)
    }

    /// Write one CSV row per year, with header
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for row in self.rows() {
            csv_writer.serialize(row)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

/// Present value of yearly cash flows, `sum(cf[t] / (1 + rate)^(t + 1))`
pub fn present_value(cashflows: &[f64], discount_rate: f64) -> f64 {
    cashflows
        .iter()
        .enumerate()
        .map(|(t, &cf)| cf / (1.0 + discount_rate).powi(t as i32 + 1))
        .sum()
}
