//! Core data structures for MincerOxide
//!
//! This module provides the tabular data structures the estimators work on:
//! typed columns, a column-ordered data frame and descriptive statistics.

mod builder;
mod dataframe;
mod series;
pub mod stats;

#[cfg(test)]
mod tests;

// Re-exports
pub use builder::DataFrameBuilder;
pub use dataframe::DataFrame;
pub use series::{Series, SeriesValue};
pub use stats::{DescriptiveRow, DescriptiveStats, SeriesStats};

// Type aliases for common use cases
pub type FloatArray = ndarray::Array1<f64>;
pub type IntArray = ndarray::Array1<i64>;
pub type BoolArray = ndarray::Array1<bool>;
pub type StringArray = Vec<String>;
pub type Matrix = ndarray::Array2<f64>;

/// Error types specific to data operations
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum DataError {
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: String, actual: String },

    #[error("Column '{0}' not found")]
    ColumnNotFound(String),

    #[error("Duplicate column name: {0}")]
    DuplicateColumn(String),

    #[error("Operation requires numeric data, got {0}")]
    NonNumericData(&'static str),

    #[error("Missing data in column: {0}")]
    MissingData(String),
}

/// Result type for data operations
pub type Result<T> = std::result::Result<T, DataError>;
