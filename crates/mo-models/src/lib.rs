//! MincerOxide statistical models
//!
//! Ordinary least squares estimation with classical inference, plus the
//! result and summary types shared by downstream analyses.

pub mod base;
pub mod error;
pub mod lm;

pub use base::{Coefficient, ModelResultTrait, ModelStatistics, ModelSummary};
pub use error::ModelError;
pub use lm::{LinearConfig, LinearRegression, LinearRegressionResult, lm, ols};
