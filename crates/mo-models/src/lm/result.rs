//! Linear regression result structure
//!
//! This module defines the result structure for linear regression models,
//! containing all the information from fitting a linear model.

use serde::Serialize;
use std::fmt;

use crate::{
    base::{
        Coefficient, ModelResultTrait, ModelStatistics, ModelSummary, ResidualStatistics, Result,
    },
    lm::ols::{Matrix, Vector},
};

/// OLS linear regression result
///
/// Immutable once produced by the solver.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinearRegressionResult {
    /// Dependent variable (empty when fitted from a bare matrix)
    pub(crate) response: String,
    /// Coefficient table, in design-matrix column order
    pub(crate) coefficients: Vec<Coefficient>,
    /// Fitted values (ŷ)
    pub(crate) fitted_values: Vector,
    /// Residuals (y - ŷ)
    pub(crate) residuals: Vector,
    /// Model statistics
    pub(crate) model_statistics: ModelStatistics,
    /// Number of observations
    pub(crate) n_obs: usize,
    /// Has intercept
    pub(crate) has_intercept: bool,
    /// Confidence level of the coefficient intervals
    pub(crate) confidence_level: f64,
}

impl LinearRegressionResult {
    /// Dependent variable name
    pub fn response(&self) -> &str {
        &self.response
    }

    /// Coefficient names, in design-matrix column order
    pub fn variable_names(&self) -> Vec<&str> {
        self.coefficients.iter().map(|c| c.name.as_str()).collect()
    }

    /// Get the number of predictors (including intercept)
    pub fn n_predictors(&self) -> usize {
        self.coefficients.len()
    }

    /// Whether the first coefficient is an intercept
    pub fn has_intercept(&self) -> bool {
        self.has_intercept
    }

    /// Coefficient estimates, in design-matrix column order
    pub fn params(&self) -> Vector {
        self.coefficients.iter().map(|c| c.estimate).collect()
    }

    /// Standard errors, in design-matrix column order
    pub fn standard_errors(&self) -> Vector {
        self.coefficients.iter().map(|c| c.std_error).collect()
    }

    /// Estimate of a named coefficient
    pub fn param(&self, name: &str) -> Result<f64> {
        self.coefficient(name).map(|c| c.estimate)
    }

    /// Get residual sum of squares
    pub fn rss(&self) -> f64 {
        self.residuals.mapv(|r| r * r).sum()
    }

    /// Predict the response for a new design matrix laid out like the
    /// fitted one (including the intercept column)
    pub fn predict(&self, x_new: &Matrix) -> Vector {
        x_new.dot(&self.params())
    }

    /// Build the full model summary
    pub fn summary(&self) -> ModelSummary {
        let residuals = self.residuals.to_vec();

        ModelSummary {
            response: self.response.clone(),
            n_obs: self.n_obs,
            n_predictors: self.n_predictors(),
            confidence_level: self.confidence_level,
            coefficients: self.coefficients.clone(),
            model_statistics: self.model_statistics,
            residual_statistics: ResidualStatistics::from_residuals(&residuals),
        }
    }
}

impl ModelResultTrait for LinearRegressionResult {
    fn coefficients(&self) -> &[Coefficient] {
        &self.coefficients
    }

    fn fitted_values(&self) -> &Vector {
        &self.fitted_values
    }

    fn residuals(&self) -> &Vector {
        &self.residuals
    }

    fn model_statistics(&self) -> &ModelStatistics {
        &self.model_statistics
    }

    fn n_obs(&self) -> usize {
        self.n_obs
    }
}

impl fmt::Display for LinearRegressionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = &self.model_statistics;

        writeln!(f, "Linear Regression Results")?;
        writeln!(f, "========================")?;
        if !self.response.is_empty() {
            writeln!(f, "Response:     {}", self.response)?;
        }
        writeln!(f, "Observations: {}", self.n_obs)?;
        writeln!(f, "Predictors:   {}", self.n_predictors())?;
        writeln!(f)?;
        writeln!(f, "R-squared:           {:.4}", stats.r_squared)?;
        writeln!(f, "Adjusted R-squared:  {:.4}", stats.adj_r_squared)?;
        writeln!(f, "F-statistic:        {:.4}", stats.f_statistic)?;
        writeln!(f, "F p-value:          {:.4}", stats.f_p_value)?;
        writeln!(f, "Residual Std Error: {:.4}", stats.residual_std_error)?;
        writeln!(f, "AIC:                {:.4}", stats.aic)?;
        writeln!(f, "BIC:                {:.4}", stats.bic)?;

        Ok(())
    }
}
