//! Ordinary Least Squares (OLS) linear regression
//!
//! This module implements the standard linear regression model
//! using the ordinary least squares estimator.

use nalgebra::{DMatrix, DVector};
use ndarray::{Array1, Array2};
use statrs::distribution::{ContinuousCDF, FisherSnedecor, StudentsT};

use crate::base::{Coefficient, ModelError, ModelStatistics, Result};
use crate::lm::{INTERCEPT, LinearConfig, LinearRegressionResult};
use mo_core::data::DataFrame;

// ==================== Type Definitions ====================

/// Matrix type alias for 2D arrays
pub type Matrix = Array2<f64>;

/// Vector type alias for 1D arrays
pub type Vector = Array1<f64>;

// ==================== Linear Regression Model ====================

/// OLS linear regression model specification
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRegression {
    /// Dependent variable
    response: String,
    /// Regressors, in design-matrix order (intercept excluded)
    regressors: Vec<String>,
    /// Configuration
    config: LinearConfig,
}

impl LinearRegression {
    /// Create a new linear regression of `response` on `regressors`
    pub fn new<S: AsRef<str>>(response: &str, regressors: &[S]) -> Self {
        Self {
            response: response.to_string(),
            regressors: regressors.iter().map(|s| s.as_ref().to_string()).collect(),
            config: LinearConfig::default(),
        }
    }

    /// Set configuration
    pub fn config(mut self, config: LinearConfig) -> Self {
        self.config = config;
        self
    }

    /// Disable intercept
    pub fn no_intercept(mut self) -> Self {
        self.config.intercept = false;
        self
    }

    /// Set the confidence level of the coefficient intervals
    pub fn confidence_level(mut self, level: f64) -> Self {
        self.config.confidence_level = level;
        self
    }

    /// Names of the coefficients this model will estimate
    pub fn variable_names(&self) -> Vec<String> {
        let mut names = Vec::with_capacity(self.regressors.len() + 1);

        if self.config.intercept {
            names.push(INTERCEPT.to_string());
        }
        names.extend(self.regressors.iter().cloned());

        names
    }

    /// Fit the OLS model on columns of `data`
    pub fn fit(&self, data: &DataFrame) -> Result<LinearRegressionResult> {
        self.config.validate()?;

        let x = data.design_matrix(&self.regressors, self.config.intercept)?;
        let y = data.finite_column(&self.response)?;

        log::debug!(
            "fitting OLS: {} ~ {} ({} rows)",
            self.response,
            self.variable_names().join(" + "),
            x.nrows()
        );

        let mut result = ols(&x, &y, self.variable_names(), &self.config)?;
        result.response = self.response.clone();
        Ok(result)
    }
}

// ==================== Solver ====================

/// Fit OLS on an explicit design matrix.
///
/// When `config.intercept` is set, the first column of `x` must be the
/// constant column; it determines whether R² and the F-test are computed
/// around the mean of `y` or around zero.
pub fn ols(
    x: &Matrix,
    y: &Vector,
    variable_names: Vec<String>,
    config: &LinearConfig,
) -> Result<LinearRegressionResult> {
    config.validate()?;

    let n = x.nrows();
    let p = x.ncols();

    if y.len() != n {
        return Err(mo_core::data::DataError::DimensionMismatch {
            expected: format!("{} response values", n),
            actual: format!("{} response values", y.len()),
        }
        .into());
    }

    if variable_names.len() != p {
        return Err(ModelError::InvalidConfig {
            message: format!(
                "{} variable names for {} design columns",
                variable_names.len(),
                p
            ),
        });
    }

    if x.iter().chain(y.iter()).any(|v| !v.is_finite()) {
        return Err(ModelError::NumericalError {
            message: "design matrix or response contains non-finite values".to_string(),
            operation: "ols".to_string(),
        });
    }

    // Check dimensions
    if p == 0 || n <= p {
        return Err(ModelError::InsufficientData {
            n_samples: n,
            n_predictors: p,
        });
    }

    let x_na = DMatrix::from_row_iterator(n, p, x.iter().copied());
    let y_na = DVector::from_iterator(n, y.iter().copied());

    let coefficients = svd_solve(&x_na, &y_na)?;
    let xtx_inv = xtx_inverse(&x_na)?;

    // Calculate fitted values and residuals
    let fitted_values = x.dot(&coefficients);
    let residuals = y - &fitted_values;

    // Calculate basic statistics
    let k_constant = usize::from(config.intercept);
    let rss = residuals.mapv(|r| r * r).sum();
    let tss = if config.intercept {
        let y_mean = y.mean().unwrap_or(0.0);
        y.iter().map(|&yi| (yi - y_mean).powi(2)).sum::<f64>()
    } else {
        y.iter().map(|&yi| yi * yi).sum::<f64>()
    };

    let df_residual = n - p;
    let df_model = p - k_constant;

    let r_squared = 1.0 - rss / tss;
    let adj_r_squared =
        1.0 - (1.0 - r_squared) * ((n - k_constant) as f64 / df_residual as f64);
    let sigma2 = rss / df_residual as f64;
    let residual_std_error = sigma2.sqrt();

    // Standard errors = sqrt(diag(σ² * (X'X)^{-1}))
    let standard_errors: Vector = xtx_inv.diagonal().iter().map(|v| (sigma2 * v).sqrt()).collect();

    let (t_statistics, p_values, ci_lower, ci_upper) =
        calculate_inference(&coefficients, &standard_errors, df_residual, config)?;

    let (f_statistic, f_p_value) = f_statistic(rss, tss, df_model, df_residual)?;

    // Gaussian log-likelihood at the MLE of σ²
    let nf = n as f64;
    let log_likelihood = -0.5 * nf * ((2.0 * std::f64::consts::PI).ln() + (rss / nf).ln() + 1.0);

    let aic = 2.0 * p as f64 - 2.0 * log_likelihood;
    let bic = nf.ln() * p as f64 - 2.0 * log_likelihood;

    let coefficient_table = variable_names
        .into_iter()
        .enumerate()
        .map(|(i, name)| {
            let coef = Coefficient::new(name, coefficients[i])
                .with_std_error(standard_errors[i])
                .with_t_stat(t_statistics[i])
                .with_p_value(p_values[i])
                .with_ci(ci_lower[i], ci_upper[i]);

            if i == 0 && config.intercept {
                coef.as_intercept()
            } else {
                coef
            }
        })
        .collect();

    let model_statistics = ModelStatistics {
        r_squared,
        adj_r_squared,
        residual_std_error,
        f_statistic,
        f_p_value,
        log_likelihood,
        aic,
        bic,
        df_residual,
        df_model,
    };

    Ok(LinearRegressionResult {
        response: String::new(),
        coefficients: coefficient_table,
        fitted_values,
        residuals,
        model_statistics,
        n_obs: n,
        has_intercept: config.intercept,
        confidence_level: config.confidence_level,
    })
}

/// Relative tolerance for the numerical rank of the design matrix
fn rank_tolerance(x: &DMatrix<f64>, max_singular: f64) -> f64 {
    max_singular * x.nrows().max(x.ncols()) as f64 * f64::EPSILON
}

/// Solve using SVD-based least squares, rejecting rank-deficient designs
fn svd_solve(x: &DMatrix<f64>, y: &DVector<f64>) -> Result<Vector> {
    let p = x.ncols();
    let svd = x.clone().svd(true, true);

    let max_singular = svd.singular_values.max();
    let tolerance = rank_tolerance(x, max_singular);
    let rank = svd.rank(tolerance);

    if rank < p {
        return Err(ModelError::SingularMatrix {
            rank,
            n_predictors: p,
        });
    }

    let solution = svd
        .solve(y, tolerance)
        .map_err(|e| ModelError::NumericalError {
            message: format!("SVD least squares failed: {}", e),
            operation: "svd_solve".to_string(),
        })?;

    Ok(solution.iter().copied().collect())
}

/// (X'X)^{-1} through a Cholesky factorization
fn xtx_inverse(x: &DMatrix<f64>) -> Result<DMatrix<f64>> {
    let xtx = x.transpose() * x;
    let p = xtx.nrows();

    xtx.cholesky()
        .map(|chol| chol.inverse())
        .ok_or(ModelError::SingularMatrix {
            rank: p.saturating_sub(1),
            n_predictors: p,
        })
}

/// Calculate t-statistics, p-values and confidence intervals
fn calculate_inference(
    coefficients: &Vector,
    std_errors: &Vector,
    df: usize,
    config: &LinearConfig,
) -> Result<(Vector, Vector, Vector, Vector)> {
    let t_statistics: Vector = coefficients
        .iter()
        .zip(std_errors.iter())
        .map(|(&coef, &se)| coef / se)
        .collect();

    let t_dist = StudentsT::new(0.0, 1.0, df as f64).map_err(|e| ModelError::NumericalError {
        message: format!("Failed to create t-distribution: {}", e),
        operation: "calculate_inference".to_string(),
    })?;

    let p_values: Vector = t_statistics
        .iter()
        .map(|&t| {
            if t.is_nan() {
                f64::NAN
            } else {
                (2.0 * t_dist.sf(t.abs())).clamp(0.0, 1.0)
            }
        })
        .collect();

    let alpha = 1.0 - config.confidence_level;
    let t_critical = t_dist.inverse_cdf(1.0 - alpha / 2.0);

    let ci_lower: Vector = coefficients
        .iter()
        .zip(std_errors.iter())
        .map(|(&coef, &se)| coef - t_critical * se)
        .collect();

    let ci_upper: Vector = coefficients
        .iter()
        .zip(std_errors.iter())
        .map(|(&coef, &se)| coef + t_critical * se)
        .collect();

    Ok((t_statistics, p_values, ci_lower, ci_upper))
}

/// Calculate the overall F-statistic and its p-value
fn f_statistic(rss: f64, tss: f64, df_model: usize, df_residual: usize) -> Result<(f64, f64)> {
    if df_model == 0 {
        return Ok((f64::NAN, f64::NAN));
    }

    let ess = tss - rss;
    let f_statistic = (ess / df_model as f64) / (rss / df_residual as f64);

    let f_dist = FisherSnedecor::new(df_model as f64, df_residual as f64).map_err(|e| {
        ModelError::NumericalError {
            message: format!("Failed to create F-distribution: {}", e),
            operation: "f_statistic".to_string(),
        }
    })?;

    let f_p_value = if f_statistic.is_nan() {
        f64::NAN
    } else {
        f_dist.sf(f_statistic)
    };

    Ok((f_statistic, f_p_value))
}
