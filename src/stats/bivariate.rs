//! Statistics over coordinate pairs: covariance, correlation and least squares.

use super::descriptive::{mean, standard_deviation, variance};
use super::summary::Point;
use serde::Serialize;

/// A straight line `y = intercept + slope * x`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Line {
    pub intercept: f64,
    pub slope: f64,
}

impl Line {
    /// Evaluate the line at `x`.
    #[inline]
    pub fn at(&self, x: f64) -> f64 {
        self.slope.mul_add(x, self.intercept)
    }
}

/// Population covariance of x and y.
pub fn covariance(points: &[Point]) -> Option<f64> {
    let (xs, ys) = split_axes(points);
    let mean_x = mean(&xs)?;
    let mean_y = mean(&ys)?;
    let products: Vec<f64> = points
        .iter()
        .map(|p| (p.x - mean_x) * (p.y - mean_y))
        .collect();
    mean(&products)
}

/// Pearson correlation. Undefined when either axis has zero spread.
pub fn correlation(points: &[Point]) -> Option<f64> {
    let (xs, ys) = split_axes(points);
    let sd_x = standard_deviation(&xs)?;
    let sd_y = standard_deviation(&ys)?;
    if sd_x == 0.0 || sd_y == 0.0 {
        return None;
    }
    Some(covariance(points)? / (sd_x * sd_y))
}

/// Coefficient of determination of the least-squares line, the squared correlation.
pub fn r2(points: &[Point]) -> Option<f64> {
    correlation(points).map(|r| r * r)
}

/// Ordinary least squares fit. Needs two points and some spread in x.
pub fn linear_regression(points: &[Point]) -> Option<Line> {
    if points.len() < 2 {
        return None;
    }
    let (xs, ys) = split_axes(points);
    let var_x = variance(&xs)?;
    if var_x == 0.0 {
        return None;
    }
    let slope = covariance(points)? / var_x;
    let intercept = mean(&ys)? - slope * mean(&xs)?;
    Some(Line { intercept, slope })
}

pub(crate) fn split_axes(points: &[Point]) -> (Vec<f64>, Vec<f64>) {
    points.iter().map(|p| (p.x, p.y)).unzip()
}
