//! Series data structure for holding homogeneous data
//!
//! A Series is a one-dimensional array that can hold data of a specific type.
//! It's the building block of DataFrames.

use super::*;

/// A Series is a typed, one-dimensional array of data
#[derive(Clone, Debug, PartialEq)]
pub enum Series {
    /// Floating point numbers (f64), `NaN` marks a missing value
    Float(FloatArray),
    /// Integer numbers (i64)
    Int(IntArray),
    /// Boolean values
    Bool(BoolArray),
    /// String values
    String(StringArray),
}

impl Series {
    /// Create a new Float series
    pub fn float(data: impl Into<FloatArray>) -> Self {
        Series::Float(data.into())
    }

    /// Create a new Int series
    pub fn int(data: impl Into<IntArray>) -> Self {
        Series::Int(data.into())
    }

    /// Create a new Bool series
    pub fn bool(data: impl Into<BoolArray>) -> Self {
        Series::Bool(data.into())
    }

    /// Create a new String series
    pub fn string(data: impl Into<StringArray>) -> Self {
        Series::String(data.into())
    }

    /// Get the length of the series
    pub fn len(&self) -> usize {
        match self {
            Series::Float(arr) => arr.len(),
            Series::Int(arr) => arr.len(),
            Series::Bool(arr) => arr.len(),
            Series::String(arr) => arr.len(),
        }
    }

    /// Check if the series is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the type name of the series
    pub fn dtype(&self) -> &'static str {
        match self {
            Series::Float(_) => "float64",
            Series::Int(_) => "int64",
            Series::Bool(_) => "bool",
            Series::String(_) => "string",
        }
    }

    /// Whether the series takes part in numeric summaries.
    ///
    /// Booleans convert to floats for regression but are not summarized,
    /// matching the usual "number" dtype selection.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Series::Float(_) | Series::Int(_))
    }

    /// Get a value at index
    pub fn get(&self, idx: usize) -> Option<SeriesValue> {
        match self {
            Series::Float(arr) => arr.get(idx).map(|&v| SeriesValue::Float(v)),
            Series::Int(arr) => arr.get(idx).map(|&v| SeriesValue::Int(v)),
            Series::Bool(arr) => arr.get(idx).map(|&v| SeriesValue::Bool(v)),
            Series::String(arr) => arr.get(idx).map(|v| SeriesValue::String(v.clone())),
        }
    }

    /// Convert to a float array if possible
    pub fn to_float(&self) -> Result<FloatArray> {
        match self {
            Series::Float(arr) => Ok(arr.clone()),
            Series::Int(arr) => Ok(arr.mapv(|v| v as f64)),
            Series::Bool(arr) => Ok(arr.mapv(|v| if v { 1.0 } else { 0.0 })),
            Series::String(_) => Err(DataError::NonNumericData("string")),
        }
    }

    /// Apply an elementwise float transform, producing a Float series
    pub fn map_float<F>(&self, f: F) -> Result<Series>
    where
        F: Fn(f64) -> f64,
    {
        Ok(Series::Float(self.to_float()?.mapv(f)))
    }

    /// Number of missing entries (`NaN` in float columns)
    pub fn missing_count(&self) -> usize {
        match self {
            Series::Float(arr) => arr.iter().filter(|v| v.is_nan()).count(),
            _ => 0,
        }
    }

    /// Compute descriptive statistics over the non-missing values
    pub fn describe(&self) -> Result<SeriesStats> {
        if !self.is_numeric() {
            return Err(DataError::NonNumericData(self.dtype()));
        }

        let values: Vec<f64> = self
            .to_float()?
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .collect();

        let mut stats = SeriesStats::from_values(&values);
        stats.missing = self.missing_count();
        Ok(stats)
    }

    /// Compute mean of the non-missing values
    pub fn mean(&self) -> Result<f64> {
        let values = self.to_float()?;
        Ok(stats::mean(values.iter().copied().filter(|v| !v.is_nan())))
    }

    /// Compute standard deviation of the non-missing values
    pub fn std(&self, ddof: usize) -> Result<f64> {
        let values: Vec<f64> = self
            .to_float()?
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .collect();
        Ok(stats::std_dev(&values, ddof))
    }

    /// Compute sum
    pub fn sum(&self) -> Result<f64> {
        Ok(self.to_float()?.iter().filter(|v| !v.is_nan()).sum())
    }
}

/// Enum for type-safe value access
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesValue {
    Float(f64),
    Int(i64),
    Bool(bool),
    String(String),
}

impl std::fmt::Display for SeriesValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeriesValue::Float(v) => write!(f, "{}", v),
            SeriesValue::Int(v) => write!(f, "{}", v),
            SeriesValue::Bool(v) => write!(f, "{}", v),
            SeriesValue::String(v) => write!(f, "{}", v),
        }
    }
}
