//! Statistics engine: pure functions over numbers and coordinate pairs.

pub mod bivariate;
pub mod descriptive;
pub mod summary;

pub use bivariate::{Line, correlation, covariance, linear_regression, r2};
pub use descriptive::{
    Summary, geometric_mean, harmonic_mean, kurtosis, max, mean, mean_absolute_deviation, median,
    median_absolute_deviation, min, mode, population_stdev, quantile, range, sample_stdev,
    sample_variance, skewness, standard_deviation, sum, variance, weighted_mean, z_score, z_scores,
};
pub use summary::{Data, Filter, Point, Statistics, filter_data};
