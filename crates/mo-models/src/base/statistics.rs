//! Statistical structures for model results

use serde::{Deserialize, Serialize};

use mo_core::data::stats;

/// Goodness-of-fit statistics of a fitted model
///
/// Statistics that are undefined for a given fit (e.g. the F-test of a
/// model with only an intercept) are `NaN`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelStatistics {
    /// R-squared
    pub r_squared: f64,
    /// Adjusted R-squared
    pub adj_r_squared: f64,
    /// Residual standard error
    pub residual_std_error: f64,
    /// F-statistic
    pub f_statistic: f64,
    /// F-statistic p-value
    pub f_p_value: f64,
    /// Log-likelihood
    pub log_likelihood: f64,
    /// AIC
    pub aic: f64,
    /// BIC
    pub bic: f64,
    /// Residual degrees of freedom
    pub df_residual: usize,
    /// Model degrees of freedom (excluding the intercept)
    pub df_model: usize,
}

/// Residual statistics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResidualStatistics {
    /// Minimum residual
    pub min: f64,
    /// First quartile
    pub q1: f64,
    /// Median
    pub median: f64,
    /// Third quartile
    pub q3: f64,
    /// Maximum residual
    pub max: f64,
    /// Mean residual
    pub mean: f64,
    /// Standard deviation
    pub std_dev: f64,
    /// Skewness
    pub skewness: f64,
    /// Excess kurtosis
    pub kurtosis: f64,
    /// Durbin-Watson statistic
    pub durbin_watson: f64,
}

impl ResidualStatistics {
    /// Summarize a residual vector
    pub fn from_residuals(residuals: &[f64]) -> Self {
        let summary = stats::SeriesStats::from_values(residuals);

        Self {
            min: summary.min,
            q1: summary.q25,
            median: summary.q50,
            q3: summary.q75,
            max: summary.max,
            mean: summary.mean,
            std_dev: summary.std,
            skewness: summary.skewness,
            kurtosis: summary.kurtosis,
            durbin_watson: durbin_watson(residuals),
        }
    }
}

/// Durbin-Watson statistic of a residual sequence
pub fn durbin_watson(residuals: &[f64]) -> f64 {
    if residuals.len() < 2 {
        return f64::NAN;
    }

    let sum_sq_diff: f64 = residuals.windows(2).map(|w| (w[1] - w[0]).powi(2)).sum();
    let sum_sq: f64 = residuals.iter().map(|&r| r * r).sum();

    if sum_sq < 1e-300 { f64::NAN } else { sum_sq_diff / sum_sq }
}
