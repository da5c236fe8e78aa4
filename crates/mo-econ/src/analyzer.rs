//! Mincer wage regressions
//!
//! [`EconAnalyzer`] owns a wage dataset and a registry of fitted models
//! keyed by name. Regressions may append derived columns such as squared
//! experience to the dataset; the registry keeps insertion order and a
//! later fit with the same name replaces the earlier one in place.

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

use crate::{EconError, Result};
use mo_core::data::{DataFrame, DescriptiveStats};
use mo_models::{LinearRegression, LinearRegressionResult, ModelResultTrait, ModelSummary};


/// Significance level of [`ReturnsToEducation::significant_5pct`]
const SIGNIFICANCE_LEVEL: f64 = 0.05;

/// Wage-equation analysis session
#[derive(Debug, Clone)]
pub struct EconAnalyzer {
    data: DataFrame,
    models: IndexMap<String, LinearRegressionResult>,
}

impl EconAnalyzer {
    /// Start an analysis of `data`
    pub fn new(data: DataFrame) -> Self {
        Self {
            data,
            models: IndexMap::new(),
        }
    }

    /// The dataset, including any derived columns
    pub fn data(&self) -> &DataFrame {
        &self.data
    }

    /// Fitted models in registration order
    pub fn models(&self) -> &IndexMap<String, LinearRegressionResult> {
        &self.models
    }

    /// Look up a registered model
    pub fn model(&self, name: &str) -> Option<&LinearRegressionResult> {
        self.models.get(name)
    }

    /// Give back the dataset
    pub fn into_data(self) -> DataFrame {
        self.data
    }

    /// Name under which a Mincer fit of `dependent_var` is registered
    pub fn mincer_model_name(dependent_var: &str) -> String {
        format!("mincer_{}", dependent_var)
    }

    /// Derive `{variable}_squared` from `variable` and store it in the
    /// dataset, replacing an existing column of that name.
    ///
    /// Returns the name of the derived column.
    pub fn ensure_squared_column(&mut self, variable: &str) -> Result<String> {
        let name = format!("{}_squared", variable);
        let squared = self.data.column(variable)?.map_float(|v| v * v)?;

        if self.data.insert_column(name.as_str(), squared)?.is_some() {
            log::debug!("re-derived column '{}'", name);
        }

        Ok(name)
    }

    /// Fit the Mincer equation
    ///
    /// `dependent_var = β0 + β1·education + β2·experience [+ β3·experience²] + ε`
    ///
    /// The result is registered as `mincer_{dependent_var}`, replacing any
    /// earlier fit of the same name.
    pub fn mincer_regression(
        &mut self,
        dependent_var: &str,
        education_var: &str,
        experience_var: &str,
        add_experience_squared: bool,
    ) -> Result<&LinearRegressionResult> {
        for name in [dependent_var, education_var, experience_var] {
            self.data.column(name)?;
        }

        let mut regressors = vec![education_var.to_string(), experience_var.to_string()];
        if add_experience_squared {
            regressors.push(self.ensure_squared_column(experience_var)?);
        }

        log::debug!(
            "Mincer regression of {} on [{}]",
            dependent_var,
            regressors.join(", ")
        );

        let result = LinearRegression::new(dependent_var, &regressors).fit(&self.data)?;

        let key = Self::mincer_model_name(dependent_var);
        log::info!(
            "fitted {}: n = {}, R² = {:.4}",
            key,
            result.n_obs(),
            result.r_squared()
        );

        let (index, _) = self.models.insert_full(key, result);
        Ok(&self.models[index])
    }

    /// Read the return to education off a fitted wage equation
    pub fn calculate_returns_to_education<M: ModelResultTrait>(
        &self,
        model: &M,
        education_var: &str,
    ) -> Result<ReturnsToEducation> {
        ReturnsToEducation::from_model(model, education_var)
    }

    /// Descriptive statistics of the named variables, or of every numeric
    /// column when `variables` is `None`
    pub fn descriptive_stats(&self, variables: Option<&[&str]>) -> Result<DescriptiveStats> {
        let stats = match variables {
            Some(names) => self.data.describe_columns(names.iter().copied())?,
            None => self.data.describe()?,
        };
        Ok(stats)
    }

    /// Regression summary of a registered model
    pub fn summary(&self, name: &str) -> Result<ModelSummary> {
        self.models
            .get(name)
            .map(LinearRegressionResult::summary)
            .ok_or_else(|| EconError::ModelNotFound(name.to_string()))
    }
}

/// Return to one more unit of education
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReturnsToEducation {
    /// Log-wage coefficient on education
    pub coefficient: f64,
    /// Approximate percent wage change (`coefficient * 100`)
    pub return_percent: f64,
    pub std_error: f64,
    pub t_statistic: f64,
    pub p_value: f64,
    /// Whether `p_value < 0.05`
    pub significant_5pct: bool,
}

impl ReturnsToEducation {
    /// Extract the education coefficient of `model`
    pub fn from_model<M: ModelResultTrait>(model: &M, education_var: &str) -> Result<Self> {
        let coef = model.coefficient(education_var)?;

        Ok(Self {
            coefficient: coef.estimate,
            return_percent: coef.estimate * 100.0,
            std_error: coef.std_error,
            t_statistic: coef.t_stat,
            p_value: coef.p_value,
            significant_5pct: coef.p_value < SIGNIFICANCE_LEVEL,
        })
    }
}

impl fmt::Display for ReturnsToEducation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Returns to Education")?;
        writeln!(f, "  Coefficient:      {:.6}", self.coefficient)?;
        writeln!(f, "  Return (%):       {:.4}", self.return_percent)?;
        writeln!(f, "  Std. Error:       {:.6}", self.std_error)?;
        writeln!(f, "  t-statistic:      {:.4}", self.t_statistic)?;
        writeln!(f, "  p-value:          {:.4e}", self.p_value)?;
        writeln!(f, "  Significant (5%): {}", self.significant_5pct)
    }
}
