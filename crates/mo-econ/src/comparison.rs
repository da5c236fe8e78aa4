//! Side-by-side comparison of fitted models

use serde::Serialize;
use std::fmt;

use crate::{EconError, Result};
use mo_models::ModelResultTrait;


/// Goodness-of-fit figures of one model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub model: String,
    #[serde(rename = "R-squared")]
    pub r_squared: f64,
    #[serde(rename = "Adj R-squared")]
    pub adj_r_squared: f64,
    #[serde(rename = "F-statistic")]
    pub f_statistic: f64,
    #[serde(rename = "F p-value")]
    pub f_p_value: f64,
    #[serde(rename = "AIC")]
    pub aic: f64,
    #[serde(rename = "BIC")]
    pub bic: f64,
    #[serde(rename = "N observations")]
    pub n_obs: usize,
}

impl ComparisonRow {
    fn from_model<M: ModelResultTrait>(model: &M, name: &str) -> Self {
        Self {
            model: name.to_string(),
            r_squared: model.r_squared(),
            adj_r_squared: model.adj_r_squared(),
            f_statistic: model.f_statistic(),
            f_p_value: model.f_p_value(),
            aic: model.aic(),
            bic: model.bic(),
            n_obs: model.n_obs(),
        }
    }
}

/// Model comparison table, one row per model in input order.
///
/// Labels need not be unique.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ModelComparison {
    pub rows: Vec<ComparisonRow>,
}

impl ModelComparison {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row labels in order
    pub fn labels(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.model.as_str()).collect()
    }

    /// All rows carrying `label`
    pub fn rows_named<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a ComparisonRow> + 'a {
        self.rows.iter().filter(move |r| r.model == label)
    }

    /// First row carrying `label`
    pub fn get(&self, label: &str) -> Option<&ComparisonRow> {
        self.rows.iter().find(|r| r.model == label)
    }
}

/// Collect the fit statistics of `models` under the matching `names`
pub fn robust_regression_summary<M, S>(models: &[M], names: &[S]) -> Result<ModelComparison>
where
    M: ModelResultTrait,
    S: AsRef<str>,
{
    if models.len() != names.len() {
        return Err(EconError::InvalidArgument(format!(
            "{} models but {} names",
            models.len(),
            names.len()
        )));
    }

    let rows = models
        .iter()
        .zip(names)
        .map(|(model, name)| ComparisonRow::from_model(model, name.as_ref()))
        .collect();

    Ok(ModelComparison { rows })
}

impl fmt::Display for ModelComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .rows
            .iter()
            .map(|r| r.model.len())
            .max()
            .unwrap_or(0)
            .max(5);

        writeln!(
            f,
            "{:<width$} {:>10} {:>13} {:>12} {:>10} {:>12} {:>12} {:>14}",
            "Model",
            "R-squared",
            "Adj R-squared",
            "F-statistic",
            "F p-value",
            "AIC",
            "BIC",
            "N observations",
        )?;

        for row in &self.rows {
            writeln!(
                f,
                "{:<width$} {:>10.4} {:>13.4} {:>12.4} {:>10.3e} {:>12.4} {:>12.4} {:>14}",
                row.model,
                row.r_squared,
                row.adj_r_squared,
                row.f_statistic,
                row.f_p_value,
                row.aic,
                row.bic,
                row.n_obs,
            )?;
        }

        Ok(())
    }
}
