//! Core traits and types for statistical models
//!
//! This module defines the shared interface and data structures of fitted
//! models in MincerOxide.

use ndarray::Array1;

// Re-export core types
pub use coefficient::Coefficient;
pub use statistics::ModelStatistics;
pub use statistics::ResidualStatistics;
pub use summary::ModelSummary;

pub use crate::error::ModelError;

pub mod coefficient;
pub mod statistics;
pub mod summary;

/// Result type for model operations
pub type Result<T> = std::result::Result<T, ModelError>;

/// Trait for fitted model results
pub trait ModelResultTrait {
    /// Get coefficients
    fn coefficients(&self) -> &[Coefficient];

    /// Get fitted values
    fn fitted_values(&self) -> &Array1<f64>;

    /// Get residuals
    fn residuals(&self) -> &Array1<f64>;

    /// Get goodness-of-fit statistics
    fn model_statistics(&self) -> &ModelStatistics;

    /// Number of observations used in the fit
    fn n_obs(&self) -> usize;

    /// Look up a coefficient by name
    fn coefficient(&self, name: &str) -> Result<&Coefficient> {
        self.coefficients()
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| ModelError::CoefficientNotFound(name.to_string()))
    }

    /// Get R-squared value
    fn r_squared(&self) -> f64 {
        self.model_statistics().r_squared
    }

    /// Get adjusted R-squared value
    fn adj_r_squared(&self) -> f64 {
        self.model_statistics().adj_r_squared
    }

    /// Get the F-statistic
    fn f_statistic(&self) -> f64 {
        self.model_statistics().f_statistic
    }

    /// Get the p-value of the F-statistic
    fn f_p_value(&self) -> f64 {
        self.model_statistics().f_p_value
    }

    /// Get AIC
    fn aic(&self) -> f64 {
        self.model_statistics().aic
    }

    /// Get BIC
    fn bic(&self) -> f64 {
        self.model_statistics().bic
    }

    /// Get log-likelihood
    fn log_likelihood(&self) -> f64 {
        self.model_statistics().log_likelihood
    }
}

impl<T: ModelResultTrait + ?Sized> ModelResultTrait for &T {
    fn coefficients(&self) -> &[Coefficient] {
        (**self).coefficients()
    }

    fn fitted_values(&self) -> &Array1<f64> {
        (**self).fitted_values()
    }

    fn residuals(&self) -> &Array1<f64> {
        (**self).residuals()
    }

    fn model_statistics(&self) -> &ModelStatistics {
        (**self).model_statistics()
    }

    fn n_obs(&self) -> usize {
        (**self).n_obs()
    }
}
