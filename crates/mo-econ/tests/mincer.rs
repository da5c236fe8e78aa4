//! End-to-end wage analysis on simulated data

use approx::assert_abs_diff_eq;

use mo_econ::simulate::{TRUE_EXPERIENCE_EFFECT, TRUE_RETURN_TO_EDUCATION};
use mo_econ::{EconAnalyzer, EconError, SimulationConfig, robust_regression_summary};
use mo_models::ModelResultTrait;

#[test]
fn test_full_analysis() {
    let data = SimulationConfig::default().n_obs(200).seed(123).simulate().unwrap();
    let mut analyzer = EconAnalyzer::new(data);

    let basic = analyzer
        .mincer_regression("log_wage", "education", "experience", false)
        .unwrap()
        .clone();
    let full = analyzer
        .mincer_regression("log_wage", "education", "experience", true)
        .unwrap()
        .clone();

    assert_eq!(basic.n_obs(), 200);
    assert_eq!(full.n_obs(), 200);
    assert_eq!(basic.n_predictors(), 3);
    assert_eq!(full.n_predictors(), 4);
    assert!(full.r_squared() >= basic.r_squared());

    let basic_returns = analyzer
        .calculate_returns_to_education(&basic, "education")
        .unwrap();
    assert!(basic_returns.return_percent > 0.0);
    assert!(basic_returns.significant_5pct);
    assert_eq!(basic_returns.significant_5pct, basic_returns.p_value < 0.05);

    let returns = analyzer
        .calculate_returns_to_education(&full, "education")
        .unwrap();
    assert!(returns.return_percent > 0.0);
    assert_eq!(returns.significant_5pct, returns.p_value < 0.05);

    let comparison =
        robust_regression_summary(&[&basic, &full], &["Basic Mincer", "Extended Mincer"]).unwrap();
    assert_eq!(comparison.labels(), vec!["Basic Mincer", "Extended Mincer"]);
    assert_eq!(comparison.get("Basic Mincer").unwrap().n_obs, 200);

    let stats = analyzer.descriptive_stats(None).unwrap();
    assert_eq!(stats.len(), 6);
    assert_eq!(stats.variables().last(), Some(&"experience_squared"));

    // The registry holds the latest fit only
    assert_eq!(analyzer.models().len(), 1);
    assert_eq!(analyzer.model("mincer_log_wage"), Some(&full));
}

#[test]
fn test_large_sample_estimates_near_truth() {
    let data = SimulationConfig::default().seed(42).simulate().unwrap();
    let mut analyzer = EconAnalyzer::new(data);

    let result = analyzer
        .mincer_regression("log_wage", "education", "experience", true)
        .unwrap();

    assert_eq!(result.n_obs(), 1000);
    assert_abs_diff_eq!(
        result.param("education").unwrap(),
        TRUE_RETURN_TO_EDUCATION,
        epsilon = 0.015
    );
    assert_abs_diff_eq!(
        result.param("experience").unwrap(),
        TRUE_EXPERIENCE_EFFECT,
        epsilon = 0.02
    );
    assert!(result.param("experience_squared").unwrap() < 0.0);
}

#[test]
fn test_error_chain_reaches_caller() {
    let data = SimulationConfig::default().n_obs(30).seed(1).simulate().unwrap();
    let mut analyzer = EconAnalyzer::new(data);

    let err = analyzer
        .mincer_regression("log_salary", "education", "experience", true)
        .unwrap_err();

    assert!(matches!(err, EconError::Data(_)));
    assert!(err.to_string().contains("log_salary"));
}

#[cfg(feature = "proptest")]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn prop_simulation_bounds(n_obs in 1usize..200, seed in any::<u64>()) {
            let data = mo_econ::simulate_wage_data(n_obs, Some(seed)).unwrap();
            prop_assert_eq!(data.nrows(), n_obs);

            let age = data.float_column("age").unwrap();
            prop_assert!(age.iter().all(|&a| (18.0..=70.0).contains(&a)));
            let education = data.float_column("education").unwrap();
            prop_assert!(education.iter().all(|&e| (6.0..=20.0).contains(&e)));
        }
    }
}
