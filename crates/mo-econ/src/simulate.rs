//! Synthetic wage data
//!
//! Draws a cross-section from a known Mincer data-generating process, so
//! that estimated returns can be checked against the true coefficients.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal, Uniform};
use serde::{Deserialize, Serialize};

use crate::{EconError, Result};
use mo_core::data::{DataFrame, DataFrameBuilder, Series};

#[cfg(test)]
mod tests;

/// Intercept of the log-wage equation
pub const TRUE_INTERCEPT: f64 = 2.5;
/// Log-wage gain per year of education
pub const TRUE_RETURN_TO_EDUCATION: f64 = 0.1;
/// Log-wage gain per year of experience
pub const TRUE_EXPERIENCE_EFFECT: f64 = 0.05;
/// Coefficient on squared experience
pub const TRUE_EXPERIENCE_SQUARED_EFFECT: f64 = -0.001;

const EDUCATION_MEAN: f64 = 12.0;
const EDUCATION_STD: f64 = 3.0;
const EDUCATION_RANGE: (f64, f64) = (6.0, 20.0);
const EXPERIENCE_MAX: f64 = 40.0;
const AGE_OFFSET_MEAN: f64 = 6.0;
const AGE_OFFSET_STD: f64 = 2.0;
const AGE_RANGE: (f64, f64) = (18.0, 70.0);
const WAGE_NOISE_STD: f64 = 0.3;

/// Simulation settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of observations
    pub n_obs: usize,
    /// Seed for reproducible draws; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            n_obs: 1000,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Set the number of observations
    pub fn n_obs(mut self, n_obs: usize) -> Self {
        self.n_obs = n_obs;
        self
    }

    /// Set the seed
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Draw a dataset with these settings
    pub fn simulate(&self) -> Result<DataFrame> {
        simulate_wage_data(self.n_obs, self.seed)
    }
}

/// Simulate a wage cross-section.
///
/// Columns, in order: `wage`, `log_wage`, `education`, `experience`, `age`.
/// Each variable is drawn as a block of `n_obs` values, education first,
/// so a given seed always reproduces the same table.
pub fn simulate_wage_data(n_obs: usize, seed: Option<u64>) -> Result<DataFrame> {
    if n_obs == 0 {
        return Err(EconError::InvalidArgument(
            "n_obs must be positive".to_string(),
        ));
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    log::debug!("simulating {} observations (seed: {:?})", n_obs, seed);

    let education_dist = normal(EDUCATION_MEAN, EDUCATION_STD)?;
    let education: Vec<f64> = (0..n_obs)
        .map(|_| education_dist.sample(&mut rng).clamp(EDUCATION_RANGE.0, EDUCATION_RANGE.1))
        .collect();

    let experience_dist = Uniform::new(0.0, EXPERIENCE_MAX)
        .map_err(|e| EconError::Distribution(format!("experience: {}", e)))?;
    let experience: Vec<f64> = (0..n_obs).map(|_| experience_dist.sample(&mut rng)).collect();

    let age_offset = normal(AGE_OFFSET_MEAN, AGE_OFFSET_STD)?;
    let age: Vec<f64> = education
        .iter()
        .zip(&experience)
        .map(|(edu, exp)| (edu + exp + age_offset.sample(&mut rng)).clamp(AGE_RANGE.0, AGE_RANGE.1))
        .collect();

    let wage_noise = normal(0.0, WAGE_NOISE_STD)?;
    let log_wage: Vec<f64> = education
        .iter()
        .zip(&experience)
        .map(|(&edu, &exp)| {
            TRUE_INTERCEPT
                + TRUE_RETURN_TO_EDUCATION * edu
                + TRUE_EXPERIENCE_EFFECT * exp
                + TRUE_EXPERIENCE_SQUARED_EFFECT * exp * exp
                + wage_noise.sample(&mut rng)
        })
        .collect();

    let wage: Vec<f64> = log_wage.iter().map(|lw| lw.exp()).collect();

    let data = DataFrameBuilder::new()
        .with_column("wage", Series::float(wage))?
        .with_column("log_wage", Series::float(log_wage))?
        .with_column("education", Series::float(education))?
        .with_column("experience", Series::float(experience))?
        .with_column("age", Series::float(age))?
        .build()?;

    Ok(data)
}

fn normal(mean: f64, std_dev: f64) -> Result<Normal<f64>> {
    Normal::new(mean, std_dev)
        .map_err(|e| EconError::Distribution(format!("Normal({}, {}): {}", mean, std_dev, e)))
}
