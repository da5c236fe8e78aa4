//! Model-related error types

use thiserror::Error;

use mo_core::data::DataError;

/// Model-related errors
#[derive(Debug, Error)]
pub enum ModelError {
    /// Data-related error
    #[error("Data error: {0}")]
    Data(#[from] DataError),

    /// Numerical computation error
    #[error("Numerical error: {message} (operation: {operation})")]
    NumericalError {
        /// Error message
        message: String,
        /// Operation that failed
        operation: String,
    },

    /// Insufficient data for model fitting
    #[error("Not enough data: {n_samples} samples for {n_predictors} predictors")]
    InsufficientData {
        /// Number of samples
        n_samples: usize,
        /// Number of predictors
        n_predictors: usize,
    },

    /// Singular matrix encountered
    #[error("Singular matrix encountered: design matrix has rank {rank} < {n_predictors}")]
    SingularMatrix {
        /// Numerical rank of the design matrix
        rank: usize,
        /// Number of predictors (columns)
        n_predictors: usize,
    },

    /// Invalid model configuration
    #[error("Invalid model configuration: {message}")]
    InvalidConfig {
        /// Configuration error message
        message: String,
    },

    /// Requested coefficient is not part of the model
    #[error("Coefficient '{0}' not found in model")]
    CoefficientNotFound(String),
}
