// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Small descriptive statistics over per-issue lead times.
//!
//! Anything that would divide by zero returns `None` ("not computable").

/// One-sided 90% z-score of the standard normal distribution.
pub const Z_90: f64 = 1.644854;

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Middle value, or the mean of the two middle values for an even count.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let middle = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[middle - 1] + sorted[middle]) / 2.0)
    } else {
        Some(sorted[middle])
    }
}

/// Sample variance (`n - 1` denominator). Needs at least two values.
pub fn sample_variance(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let mean = mean(values)?;
    let squares: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    Some(squares / (values.len() - 1) as f64)
}

pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    sample_variance(values).map(f64::sqrt)
}

/// Upper 90% bound `mean + Z_90 * sigma`, assuming roughly normal values.
pub fn confidence_bound_90(values: &[f64]) -> Option<f64> {
    Some(mean(values)? + Z_90 * sample_std_dev(values)?)
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
