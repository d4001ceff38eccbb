//! Descriptive statistics over a single sequence of numbers.
//!
//! Every function returns `None` when the statistic is undefined for its
//! input (empty input, zero spread) instead of `NaN`.
//!
//! # Population versus sample dispersion
//!
//! [`variance`] and [`standard_deviation`] use the population divisor `n`.
//! [`sample_variance`] and [`sample_stdev`] use `n - 1` and are what the
//! per-axis spreads of [`Statistics`](super::Statistics) report. The two
//! families give different numbers for the same input.

use serde::Serialize;

/// Sum of all values. Zero for empty input.
pub fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Smallest value.
pub fn min(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::min)
}

/// Largest value.
pub fn max(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::max)
}

/// Difference between the largest and smallest value.
pub fn range(values: &[f64]) -> Option<f64> {
    Some(max(values)? - min(values)?)
}

/// Arithmetic mean.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(sum(values) / values.len() as f64)
}

/// Middle value of the sorted input, or the mean of the two middle values.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sorted = sorted(values);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Most frequent value and its count.
///
/// Frequencies are tallied in order of first appearance; on a tie the value
/// seen first wins.
pub fn mode<T: PartialEq + Clone>(values: &[T]) -> Option<(T, usize)> {
    let mut tally: Vec<(&T, usize)> = Vec::new();
    for value in values {
        match tally.iter_mut().find(|(seen, _)| *seen == value) {
            Some((_, count)) => *count += 1,
            None => tally.push((value, 1)),
        }
    }

    let mut best: Option<(&T, usize)> = None;
    for (value, count) in tally {
        if best.is_none_or(|(_, top)| count > top) {
            best = Some((value, count));
        }
    }
    best.map(|(value, count)| (value.clone(), count))
}

/// Nth root of the product of the values.
///
/// Positive inputs are averaged in log space, so large values do not
/// overflow the product.
pub fn geometric_mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let n = values.len() as f64;
    if values.iter().all(|&v| v > 0.0) {
        let log_sum: f64 = values.iter().map(|v| v.ln()).sum();
        return Some((log_sum / n).exp());
    }
    let product: f64 = values.iter().product();
    Some(product.powf(1.0 / n))
}

/// `n` divided by the sum of reciprocals.
pub fn harmonic_mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let reciprocal_sum: f64 = values.iter().map(|v| 1.0 / v).sum();
    if reciprocal_sum == 0.0 {
        return None;
    }
    Some(values.len() as f64 / reciprocal_sum)
}

/// Mean of `(weight, value)` pairs weighted by their weights.
pub fn weighted_mean(pairs: &[(f64, f64)]) -> Option<f64> {
    let total_weight: f64 = pairs.iter().map(|(w, _)| w).sum();
    if pairs.is_empty() || total_weight == 0.0 {
        return None;
    }
    let weighted: f64 = pairs.iter().map(|(w, x)| w * x).sum();
    Some(weighted / total_weight)
}

/// Population variance: mean squared deviation from the mean (divides by `n`).
pub fn variance(values: &[f64]) -> Option<f64> {
    let m = mean(values)?;
    Some(squared_deviations(values, m) / values.len() as f64)
}

/// Sample variance (divides by `n - 1`). Needs at least two values.
pub fn sample_variance(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values)?;
    Some(squared_deviations(values, m) / (values.len() - 1) as f64)
}

/// Population standard deviation, the square root of [`variance`].
pub fn standard_deviation(values: &[f64]) -> Option<f64> {
    variance(values).map(f64::sqrt)
}

/// Alias of [`standard_deviation`] named for its divisor.
pub fn population_stdev(values: &[f64]) -> Option<f64> {
    standard_deviation(values)
}

/// Sample standard deviation, the square root of [`sample_variance`].
pub fn sample_stdev(values: &[f64]) -> Option<f64> {
    sample_variance(values).map(f64::sqrt)
}

/// Mean absolute deviation around the mean.
pub fn mean_absolute_deviation(values: &[f64]) -> Option<f64> {
    let center = mean(values)?;
    mean_distance_from(values, center)
}

/// Mean absolute deviation around the median.
pub fn median_absolute_deviation(values: &[f64]) -> Option<f64> {
    let center = median(values)?;
    mean_distance_from(values, center)
}

/// Mean cubed z-score. Undefined when the standard deviation is zero.
pub fn skewness(values: &[f64]) -> Option<f64> {
    standardized_moment(values, 3)
}

/// Excess kurtosis: mean fourth power z-score minus 3.
pub fn kurtosis(values: &[f64]) -> Option<f64> {
    standardized_moment(values, 4).map(|k| k - 3.0)
}

/// Distance of `x` from `mean` in units of `stdev`.
///
/// Not guarded: a zero `stdev` yields an infinite or `NaN` result.
#[inline]
pub fn z_score(x: f64, mean: f64, stdev: f64) -> f64 {
    (x - mean) / stdev
}

/// Z-score of every value against the population mean and deviation.
pub fn z_scores(values: &[f64]) -> Option<Vec<f64>> {
    let m = mean(values)?;
    let sd = standard_deviation(values)?;
    if sd == 0.0 {
        return None;
    }
    Some(values.iter().map(|&x| z_score(x, m, sd)).collect())
}

/// The `p` quantile (0..=1) with linear interpolation between closest ranks.
pub fn quantile(values: &[f64], p: f64) -> Option<f64> {
    if values.is_empty() || !(0.0..=1.0).contains(&p) {
        return None;
    }
    let sorted = sorted(values);
    let rank = p * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let fraction = rank - lower as f64;
    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * fraction)
}

/// Descriptive summary of one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    /// Population standard deviation.
    pub stdev: f64,
}

impl Summary {
    /// Summarize a sequence. `None` for empty input.
    pub fn of(values: &[f64]) -> Option<Self> {
        Some(Self {
            count: values.len(),
            min: min(values)?,
            max: max(values)?,
            mean: mean(values)?,
            median: median(values)?,
            stdev: standard_deviation(values)?,
        })
    }
}

fn sorted(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

fn squared_deviations(values: &[f64], center: f64) -> f64 {
    values.iter().map(|v| (v - center).powi(2)).sum()
}

fn mean_distance_from(values: &[f64], center: f64) -> Option<f64> {
    let distances: Vec<f64> = values.iter().map(|v| (v - center).abs()).collect();
    mean(&distances)
}

fn standardized_moment(values: &[f64], power: i32) -> Option<f64> {
    let m = mean(values)?;
    let sd = standard_deviation(values)?;
    if sd == 0.0 {
        return None;
    }
    let moments: Vec<f64> = values
        .iter()
        .map(|&x| z_score(x, m, sd).powi(power))
        .collect();
    mean(&moments)
}
