//! MincerOxide labour economics
//!
//! Mincer wage equations on top of the OLS solver in `mo-models`: a wage
//! data simulator, an analyzer that keeps a registry of fitted models, the
//! returns-to-education readout and a side-by-side model comparison.

pub mod analyzer;
pub mod comparison;
pub mod error;
pub mod simulate;

pub use analyzer::{EconAnalyzer, ReturnsToEducation};
pub use comparison::{ComparisonRow, ModelComparison, robust_regression_summary};
pub use error::EconError;
pub use simulate::{SimulationConfig, simulate_wage_data};

/// Result type for econometric operations
pub type Result<T> = std::result::Result<T, EconError>;
