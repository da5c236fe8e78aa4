//! Linear regression models
//!
//! Ordinary least squares on columns of a [`DataFrame`], with classical
//! (homoskedastic) standard errors, t-tests, the overall F-test and
//! likelihood-based information criteria.

pub mod ols;
pub mod result;


// Re-exports
pub use ols::{LinearRegression, Matrix, Vector, ols};
pub use result::LinearRegressionResult;

// Common types
use crate::base::{ModelError, Result};
use mo_core::data::DataFrame;
use serde::{Deserialize, Serialize};

/// Name given to the intercept coefficient
pub const INTERCEPT: &str = "const";

/// Linear model configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinearConfig {
    /// Whether to include intercept
    pub intercept: bool,
    /// Confidence level for intervals
    pub confidence_level: f64,
}

impl Default for LinearConfig {
    fn default() -> Self {
        Self {
            intercept: true,
            confidence_level: 0.95,
        }
    }
}

impl LinearConfig {
    /// Check that the configuration can be used for fitting
    pub fn validate(&self) -> Result<()> {
        if !(self.confidence_level > 0.0 && self.confidence_level < 1.0) {
            return Err(ModelError::InvalidConfig {
                message: format!(
                    "confidence_level must lie in (0, 1), got {}",
                    self.confidence_level
                ),
            });
        }
        Ok(())
    }
}

/// Convenience function for OLS regression with default configuration
pub fn lm<S: AsRef<str>>(
    response: &str,
    regressors: &[S],
    data: &DataFrame,
) -> Result<LinearRegressionResult> {
    LinearRegression::new(response, regressors).fit(data)
}
