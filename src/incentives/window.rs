//! Per-year vector helpers shared by the formula families

use std::ops::Range;

/// Years `[start, start + duration)` truncated to the horizon
pub fn window(start: usize, duration: usize, plant_years: usize) -> Range<usize> {
    let end = start.saturating_add(duration).min(plant_years);
    start.min(end)..end
}

/// Years `[0, start + duration)` truncated to the horizon
///
/// Deduction and the sales tax refunds fill from year zero rather than
/// from `start`.
pub fn leading_window(start: usize, duration: usize, plant_years: usize) -> Range<usize> {
    window(0, start.saturating_add(duration), plant_years)
}

/// Window pulled toward the year of peak assessed tax
///
/// Starts at `max(start, argmax(assessed))`; if that would overrun the horizon
/// the window is shifted back to end on the last year.
pub fn anchored_window(start: usize, duration: usize, plant_years: usize, assessed: &[f64]) -> Range<usize> {
    let mut start = start.max(argmax(assessed));
    if start.saturating_add(duration) > plant_years {
        start = plant_years.saturating_sub(duration);
    }
    window(start, duration, plant_years)
}

/// Index of the first maximum; zero for an empty series
pub fn argmax(series: &[f64]) -> usize {
    let mut best = 0;
    for (i, &value) in series.iter().enumerate() {
        if value > series[best] {
            best = i;
        }
    }
    best
}

/// `years` cut to the length of `values`
fn within(values: &[f64], years: Range<usize>) -> Range<usize> {
    let end = years.end.min(values.len());
    years.start.min(end)..end
}

/// Set every year in `years` to `amount`; years past `values` are ignored
pub fn fill(values: &mut [f64], years: Range<usize>, amount: f64) {
    let years = within(values, years);
    for value in &mut values[years] {
        *value = amount;
    }
}

/// Set every year in `years` to `f(source[year])`; years past the source are zero
pub fn fill_from(values: &mut [f64], years: Range<usize>, source: &[f64], f: impl Fn(f64) -> f64) {
    for year in within(values, years) {
        values[year] = source.get(year).copied().map(&f).unwrap_or(0.0);
    }
}

/// Place `amounts` into consecutive years starting at `years.start`
pub fn place(values: &mut [f64], years: Range<usize>, amounts: &[f64]) {
    let years = within(values, years);
    for (value, &amount) in values[years].iter_mut().zip(amounts) {
        *value = amount;
    }
}

/// Limit every year to an absolute dollar ceiling
pub fn cap(values: &mut [f64], ceiling: f64) {
    for value in values.iter_mut() {
        if *value > ceiling {
            *value = ceiling;
        }
    }
}

/// Limit every year to the same year of `ceiling`
///
/// Years past the end of `ceiling` carry no liability and clip to zero.
pub fn clip_to(values: &mut [f64], ceiling: &[f64]) {
    for (year, value) in values.iter_mut().enumerate() {
        let limit = ceiling.get(year).copied().unwrap_or(0.0);
        if *value > limit {
            *value = limit;
        }
    }
}

/// Multiply every year by `rate`
pub fn scale(values: &mut [f64], rate: f64) {
    for value in values.iter_mut() {
        *value *= rate;
    }
}
