//! Model summary structures

use super::coefficient::Coefficient;
use super::statistics::{ModelStatistics, ResidualStatistics};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Comprehensive model summary structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSummary {
    /// Dependent variable
    pub response: String,
    /// Number of observations
    pub n_obs: usize,
    /// Number of predictors (including intercept)
    pub n_predictors: usize,
    /// Confidence level of the coefficient intervals
    pub confidence_level: f64,
    /// Coefficients table
    pub coefficients: Vec<Coefficient>,
    /// Model statistics
    pub model_statistics: ModelStatistics,
    /// Residual statistics
    pub residual_statistics: ResidualStatistics,
}

impl fmt::Display for ModelSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "OLS Regression Results")?;
        writeln!(f, "======================")?;
        writeln!(f, "Dep. Variable: {}", self.response)?;
        writeln!(f, "Observations: {}", self.n_obs)?;
        writeln!(f, "Predictors: {}", self.n_predictors)?;
        writeln!(f)?;

        let ci = self.confidence_level * 100.0;
        writeln!(f, "Coefficients:")?;
        writeln!(
            f,
            "{:<20} {:>12} {:>12} {:>12} {:>12} {:>24}",
            "Term",
            "Estimate",
            "Std Error",
            "t-value",
            "p-value",
            format!("[{:.0}% Conf. Int.]", ci)
        )?;
        writeln!(
            f,
            "{:-<20} {:-<12} {:-<12} {:-<12} {:-<12} {:-<24}",
            "", "", "", "", "", ""
        )?;

        for coeff in &self.coefficients {
            writeln!(
                f,
                "{:<20} {:>12.6} {:>12.6} {:>12.4} {:>12.4} {:>11.6} {:>12.6}",
                coeff.name,
                coeff.estimate,
                coeff.std_error,
                coeff.t_stat,
                coeff.p_value,
                coeff.ci_lower,
                coeff.ci_upper
            )?;
        }
        writeln!(f)?;

        let stats = &self.model_statistics;
        writeln!(f, "Model Statistics:")?;
        writeln!(f, "  R-squared: {:.4}", stats.r_squared)?;
        writeln!(f, "  Adjusted R-squared: {:.4}", stats.adj_r_squared)?;
        writeln!(
            f,
            "  F-statistic: {:.4} (p-value: {:.4e})",
            stats.f_statistic, stats.f_p_value
        )?;
        writeln!(f, "  Log-likelihood: {:.4}", stats.log_likelihood)?;
        writeln!(f, "  AIC: {:.4}", stats.aic)?;
        writeln!(f, "  BIC: {:.4}", stats.bic)?;
        writeln!(f, "  Residual Std. Error: {:.4}", stats.residual_std_error)?;
        writeln!(f, "  Residual DF: {}", stats.df_residual)?;
        writeln!(f, "  Model DF: {}", stats.df_model)?;
        writeln!(f)?;

        let resid = &self.residual_statistics;
        writeln!(f, "Residuals:")?;
        writeln!(
            f,
            "  Min: {:.4}  1Q: {:.4}  Median: {:.4}  3Q: {:.4}  Max: {:.4}",
            resid.min, resid.q1, resid.median, resid.q3, resid.max
        )?;
        writeln!(
            f,
            "  Skew: {:.4}  Kurtosis: {:.4}  Durbin-Watson: {:.4}",
            resid.skewness, resid.kurtosis, resid.durbin_watson
        )?;

        Ok(())
    }
}
