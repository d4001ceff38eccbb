//! Coordinate data and the statistics snapshot computed from it.

use super::bivariate::{Line, r2, split_axes};
use super::descriptive::{max, mean, min, sample_stdev};
use serde::Serialize;

/// A coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Ordered coordinate pairs. Order decides the regression endpoints.
pub type Data = Vec<Point>;

/// Regression and per-axis summary of a [`Data`] value.
///
/// Computed wholesale by [`Statistics::compute`]; recompute after any change
/// to the underlying data.
///
/// `x_stdev` and `y_stdev` are **sample** standard deviations (`n - 1`
/// divisor), unlike [`standard_deviation`](super::standard_deviation).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Statistics {
    /// Slope of the least-squares line.
    pub m: f64,
    /// Intercept of the least-squares line.
    pub b: f64,
    /// Number of points.
    pub n: usize,
    /// Squared correlation; absent when y has no spread.
    pub r2: Option<f64>,
    pub x_min: f64,
    pub x_max: f64,
    pub x_mean: f64,
    pub y_mean: f64,
    pub x_stdev: f64,
    pub y_stdev: f64,
    /// First data point whose x equals `x_min`.
    pub left_data_point: Point,
    /// First data point whose x equals `x_max`.
    pub right_data_point: Point,
    /// The regression line evaluated at `x_min`.
    pub left_regression_point: Point,
    /// The regression line evaluated at `x_max`.
    pub right_regression_point: Point,
}

impl Statistics {
    /// Compute the snapshot. Needs at least two points with distinct x values.
    ///
    /// Non-finite coordinates, or sums that overflow `f64`, yield `None`.
    pub fn compute(data: &[Point]) -> Option<Self> {
        if data.len() < 2 || data.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return None;
        }
        let (xs, ys) = split_axes(data);

        let x_min = min(&xs)?;
        let x_max = max(&xs)?;
        if x_min == x_max {
            return None;
        }

        let (b, m) = solve_normal_equations(data)?;
        let line = Line {
            intercept: b,
            slope: m,
        };

        let left_data_point = *data.iter().find(|p| p.x == x_min)?;
        let right_data_point = *data.iter().find(|p| p.x == x_max)?;

        Some(Self {
            m,
            b,
            n: data.len(),
            r2: r2(data),
            x_min,
            x_max,
            x_mean: mean(&xs)?,
            y_mean: mean(&ys)?,
            x_stdev: sample_stdev(&xs)?,
            y_stdev: sample_stdev(&ys)?,
            left_data_point,
            right_data_point,
            left_regression_point: Point::new(x_min, line.at(x_min)),
            right_regression_point: Point::new(x_max, line.at(x_max)),
        })
    }

    /// The regression line.
    pub fn line(&self) -> Line {
        Line {
            intercept: self.b,
            slope: self.m,
        }
    }

    /// Regression estimate of y at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.line().at(x)
    }
}

/// Solve the 2x2 least-squares system by determinants, returning `(b, m)`.
fn solve_normal_equations(data: &[Point]) -> Option<(f64, f64)> {
    let n = data.len() as f64;
    let (mut sx, mut sy, mut sxx, mut sxy) = (0.0, 0.0, 0.0, 0.0);
    for p in data {
        sx += p.x;
        sy += p.y;
        sxx += p.x * p.x;
        sxy += p.x * p.y;
    }

    let det = n * sxx - sx * sx;
    if det == 0.0 || !det.is_finite() {
        return None;
    }
    let m = (n * sxy - sx * sy) / det;
    let b = (sxx * sy - sx * sxy) / det;
    (m.is_finite() && b.is_finite()).then_some((b, m))
}

/// Inclusive x-range restriction.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Filter {
    pub x_min: Option<f64>,
    pub x_max: Option<f64>,
}

impl Filter {
    pub const fn new(x_min: Option<f64>, x_max: Option<f64>) -> Self {
        Self { x_min, x_max }
    }

    /// Filter keeping `x_min <= x <= x_max`.
    pub const fn between(x_min: f64, x_max: f64) -> Self {
        Self::new(Some(x_min), Some(x_max))
    }
}

/// Keep points whose x lies in the filter's range, bounds included.
///
/// Only a filter with both bounds restricts anything; a half-open filter
/// returns the data unchanged.
pub fn filter_data(filter: &Filter, data: &[Point]) -> Data {
    match (filter.x_min, filter.x_max) {
        (Some(lo), Some(hi)) => data
            .iter()
            .filter(|p| p.x >= lo && p.x <= hi)
            .copied()
            .collect(),
        _ => data.to_vec(),
    }
}
