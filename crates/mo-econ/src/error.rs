//! Econometrics error types

use thiserror::Error;

use mo_core::data::DataError;
use mo_models::ModelError;

/// Errors raised by the wage analyses
#[derive(Debug, Error)]
pub enum EconError {
    /// Data-related error
    #[error("Data error: {0}")]
    Data(#[from] DataError),

    /// Estimation error
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    /// Caller supplied an unusable argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No model is registered under this name
    #[error("Model '{0}' not found")]
    ModelNotFound(String),

    /// A sampling distribution could not be constructed
    #[error("Distribution error: {0}")]
    Distribution(String),
}
