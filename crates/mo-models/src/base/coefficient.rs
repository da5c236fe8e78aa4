//! Coefficient definition

use serde::{Deserialize, Serialize};

/// Coefficient estimate with statistics
///
/// Statistics that were not computed stay `NaN`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coefficient {
    /// Coefficient name
    pub name: String,
    /// Coefficient estimate
    pub estimate: f64,
    /// Standard error
    pub std_error: f64,
    /// t-statistic
    pub t_stat: f64,
    /// Two-sided p-value
    pub p_value: f64,
    /// Lower bound of confidence interval
    pub ci_lower: f64,
    /// Upper bound of confidence interval
    pub ci_upper: f64,
    /// Is this the intercept?
    pub is_intercept: bool,
}

impl Coefficient {
    /// Create a new coefficient
    pub fn new(name: impl Into<String>, estimate: f64) -> Self {
        Self {
            name: name.into(),
            estimate,
            std_error: f64::NAN,
            t_stat: f64::NAN,
            p_value: f64::NAN,
            ci_lower: f64::NAN,
            ci_upper: f64::NAN,
            is_intercept: false,
        }
    }

    /// Set standard error
    pub fn with_std_error(mut self, se: f64) -> Self {
        self.std_error = se;
        self
    }

    /// Set t-statistic
    pub fn with_t_stat(mut self, t: f64) -> Self {
        self.t_stat = t;
        self
    }

    /// Set p-value
    pub fn with_p_value(mut self, p: f64) -> Self {
        self.p_value = p;
        self
    }

    /// Set confidence interval
    pub fn with_ci(mut self, lower: f64, upper: f64) -> Self {
        self.ci_lower = lower;
        self.ci_upper = upper;
        self
    }

    /// Mark as intercept
    pub fn as_intercept(mut self) -> Self {
        self.is_intercept = true;
        self
    }

    /// Whether the coefficient differs from zero at level `alpha`
    pub fn is_significant(&self, alpha: f64) -> bool {
        self.p_value < alpha
    }
}
