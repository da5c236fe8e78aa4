//! Descriptive statistics with higher moments
//!
//! Location, spread and quantiles follow the usual `describe()` conventions
//! (sample standard deviation, linearly interpolated quantiles). Skewness
//! and kurtosis are the biased moment estimators, with kurtosis reported as
//! excess kurtosis.

use serde::Serialize;
use std::fmt;

/// Relative tolerance below which the second central moment counts as zero
const ZERO_VARIANCE_RESOLUTION: f64 = 1e-15;

/// Arithmetic mean, `NaN` for an empty input
pub fn mean<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let (sum, n) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));

    if n == 0 { f64::NAN } else { sum / n as f64 }
}

/// Standard deviation with `ddof` delta degrees of freedom
pub fn std_dev(values: &[f64], ddof: usize) -> f64 {
    let n = values.len();
    if n <= ddof {
        return f64::NAN;
    }

    let m = mean(values.iter().copied());
    let ss: f64 = values.iter().map(|&v| (v - m).powi(2)).sum();
    (ss / (n - ddof) as f64).sqrt()
}

/// Quantile with linear interpolation between order statistics
pub fn quantile(values: &[f64], q: f64) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let index = (sorted.len() as f64 - 1.0) * q;
    let lower = index.floor() as usize;
    let upper = index.ceil() as usize;

    if lower == upper {
        sorted[lower]
    } else {
        let weight = index - lower as f64;
        sorted[lower] * (1.0 - weight) + sorted[upper] * weight
    }
}

/// Central moments (m2, m3, m4) normalized by `n`
fn central_moments(values: &[f64]) -> Option<(f64, f64, f64, f64)> {
    if values.is_empty() {
        return None;
    }

    let n = values.len() as f64;
    let m = mean(values.iter().copied());
    let (m2, m3, m4) = values.iter().fold((0.0, 0.0, 0.0), |(a, b, c), &v| {
        let d = v - m;
        let d2 = d * d;
        (a + d2, b + d2 * d, c + d2 * d2)
    });

    Some((m, m2 / n, m3 / n, m4 / n))
}

fn is_degenerate(mean: f64, m2: f64) -> bool {
    m2 <= (ZERO_VARIANCE_RESOLUTION * mean).powi(2)
}

/// Sample skewness `m3 / m2^1.5`; `NaN` for empty or constant input
pub fn skewness(values: &[f64]) -> f64 {
    match central_moments(values) {
        Some((m, m2, m3, _)) if !is_degenerate(m, m2) => m3 / m2.powf(1.5),
        _ => f64::NAN,
    }
}

/// Excess kurtosis `m4 / m2^2 - 3`; `NaN` for empty or constant input
pub fn kurtosis(values: &[f64]) -> f64 {
    match central_moments(values) {
        Some((m, m2, _, m4)) if !is_degenerate(m, m2) => m4 / (m2 * m2) - 3.0,
        _ => f64::NAN,
    }
}

/// Statistical summary of a series
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesStats {
    /// Number of non-missing values
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    #[serde(rename = "25%")]
    pub q25: f64,
    #[serde(rename = "50%")]
    pub q50: f64,
    #[serde(rename = "75%")]
    pub q75: f64,
    pub max: f64,
    pub skewness: f64,
    pub kurtosis: f64,
    /// Number of missing values
    pub missing: usize,
}

impl SeriesStats {
    /// Summarize a slice that is already free of missing values
    pub fn from_values(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::empty();
        }

        let min = values.iter().fold(f64::INFINITY, |a, &b| a.min(b));
        let max = values.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));

        Self {
            count: values.len(),
            mean: mean(values.iter().copied()),
            std: std_dev(values, 1),
            min,
            q25: quantile(values, 0.25),
            q50: quantile(values, 0.5),
            q75: quantile(values, 0.75),
            max,
            skewness: skewness(values),
            kurtosis: kurtosis(values),
            missing: 0,
        }
    }

    pub(crate) fn empty() -> Self {
        Self {
            count: 0,
            mean: f64::NAN,
            std: f64::NAN,
            min: f64::NAN,
            q25: f64::NAN,
            q50: f64::NAN,
            q75: f64::NAN,
            max: f64::NAN,
            skewness: f64::NAN,
            kurtosis: f64::NAN,
            missing: 0,
        }
    }
}

/// One row of a descriptive statistics table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DescriptiveRow {
    pub variable: String,
    #[serde(flatten)]
    pub stats: SeriesStats,
}

/// Descriptive statistics, one row per variable in request order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DescriptiveStats {
    pub rows: Vec<DescriptiveRow>,
}

impl DescriptiveStats {
    /// Number of summarized variables
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Variable names in row order
    pub fn variables(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.variable.as_str()).collect()
    }

    /// Look up the statistics of one variable
    pub fn get(&self, variable: &str) -> Option<&SeriesStats> {
        self.rows
            .iter()
            .find(|r| r.variable == variable)
            .map(|r| &r.stats)
    }
}

impl fmt::Display for DescriptiveStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .rows
            .iter()
            .map(|r| r.variable.len())
            .max()
            .unwrap_or(0)
            .max(8);

        writeln!(
            f,
            "{:<width$} {:>7} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>9} {:>9} {:>7}",
            "",
            "count",
            "mean",
            "std",
            "min",
            "25%",
            "50%",
            "75%",
            "max",
            "skewness",
            "kurtosis",
            "missing",
        )?;

        for row in &self.rows {
            let s = &row.stats;
            writeln!(
                f,
                "{:<width$} {:>7} {:>10.3} {:>10.3} {:>10.3} {:>10.3} {:>10.3} {:>10.3} {:>10.3} {:>9.3} {:>9.3} {:>7}",
                row.variable,
                s.count,
                s.mean,
                s.std,
                s.min,
                s.q25,
                s.q50,
                s.q75,
                s.max,
                s.skewness,
                s.kurtosis,
                s.missing,
            )?;
        }

        Ok(())
    }
}
