//! DataFrame implementation for tabular data
//!
//! A DataFrame is a 2-dimensional labeled data structure with columns of
//! potentially different types. Columns keep their insertion order.

use super::*;

use indexmap::IndexMap;

/// Main DataFrame structure
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataFrame {
    pub(crate) columns: IndexMap<String, Series>,
    pub(crate) nrows: usize,
}

impl DataFrame {
    /// Create an empty DataFrame
    pub fn new() -> Self {
        Self::default()
    }

    /// Create DataFrame from columns
    pub fn from_columns<I, S>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Series)>,
        S: Into<String>,
    {
        let mut builder = DataFrameBuilder::new();

        for (name, series) in columns.into_iter() {
            builder = builder.with_column(name, series)?;
        }

        builder.build()
    }

    /// Get the shape of the DataFrame (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.columns.len())
    }

    /// Get the number of rows
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Get the number of columns
    pub fn ncols(&self) -> usize {
        self.columns.len()
    }

    /// Get column names
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.keys().map(|k| k.as_str()).collect()
    }

    /// Names of the numeric columns, in column order
    pub fn numeric_column_names(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|(_, s)| s.is_numeric())
            .map(|(k, _)| k.as_str())
            .collect()
    }

    /// Get a reference to a column
    pub fn get_column(&self, name: &str) -> Option<&Series> {
        self.columns.get(name)
    }

    /// Get a column, failing when it does not exist
    pub fn column(&self, name: &str) -> Result<&Series> {
        self.get_column(name)
            .ok_or_else(|| DataError::ColumnNotFound(name.to_string()))
    }

    /// Check if column exists
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Select specific columns
    pub fn select<I, S>(&self, names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = DataFrameBuilder::new();

        for name in names.into_iter() {
            let name = name.as_ref();
            builder = builder.with_column(name, self.column(name)?.clone())?;
        }

        builder.build()
    }

    /// Add a new column
    pub fn with_column<S: Into<String>>(mut self, name: S, series: Series) -> Result<Self> {
        let name = name.into();

        if self.columns.contains_key(&name) {
            return Err(DataError::DuplicateColumn(name));
        }

        self.insert_column(name, series)?;
        Ok(self)
    }

    /// Insert a column, replacing any existing column with the same name.
    ///
    /// A replaced column keeps its position; a new one is appended. Returns
    /// the previous column, if any.
    pub fn insert_column<S: Into<String>>(
        &mut self,
        name: S,
        series: Series,
    ) -> Result<Option<Series>> {
        if !self.columns.is_empty() && series.len() != self.nrows {
            return Err(DataError::DimensionMismatch {
                expected: format!("{} rows", self.nrows),
                actual: format!("{} rows", series.len()),
            });
        }

        if self.columns.is_empty() {
            self.nrows = series.len();
        }

        Ok(self.columns.insert(name.into(), series))
    }

    /// Get a column converted to floats
    pub fn float_column(&self, name: &str) -> Result<FloatArray> {
        self.column(name)?.to_float()
    }

    /// Get a column converted to floats, rejecting missing or infinite values
    pub fn finite_column(&self, name: &str) -> Result<FloatArray> {
        let values = self.float_column(name)?;

        if values.iter().any(|v| !v.is_finite()) {
            return Err(DataError::MissingData(name.to_string()));
        }

        Ok(values)
    }

    /// Build a regressor matrix from the named columns.
    ///
    /// With `intercept` the first column is all ones, followed by the named
    /// columns in order.
    pub fn design_matrix<S: AsRef<str>>(&self, columns: &[S], intercept: bool) -> Result<Matrix> {
        let offset = usize::from(intercept);
        let mut x = Matrix::ones((self.nrows, columns.len() + offset));

        for (j, name) in columns.iter().enumerate() {
            let values = self.finite_column(name.as_ref())?;
            x.column_mut(j + offset).assign(&values);
        }

        Ok(x)
    }

    /// Descriptive statistics for every numeric column
    pub fn describe(&self) -> Result<DescriptiveStats> {
        self.describe_columns(self.numeric_column_names())
    }

    /// Descriptive statistics for the named columns, in the given order
    pub fn describe_columns<I, S>(&self, names: I) -> Result<DescriptiveStats>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows = names
            .into_iter()
            .map(|name| -> Result<DescriptiveRow> {
                let name = name.as_ref();
                let stats = self.column(name)?.describe()?;
                if stats.count > 1 && stats.std == 0.0 {
                    log::warn!("column '{}' has zero variance", name);
                }
                Ok(DescriptiveRow {
                    variable: name.to_string(),
                    stats,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(DescriptiveStats { rows })
    }
}

impl std::fmt::Display for DataFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DataFrame({} rows × {} cols)", self.nrows, self.ncols())
    }
}
