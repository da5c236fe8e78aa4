//! MincerOxide core data structures
//!
//! Typed columns, data frames and descriptive statistics shared by the
//! estimation crates.

pub mod data;

pub use data::{DataError, DataFrame, DataFrameBuilder, DescriptiveStats, Series};
