use super::*;

fn column(data: &DataFrame, name: &str) -> Vec<f64> {
    data.float_column(name).unwrap().to_vec()
}

#[test]
fn test_shape_and_column_order() {
    let data = simulate_wage_data(250, Some(1)).unwrap();

    assert_eq!(data.shape(), (250, 5));
    assert_eq!(
        data.column_names(),
        vec!["wage", "log_wage", "education", "experience", "age"]
    );
}

#[test]
fn test_seeded_draws_are_reproducible() {
    let a = simulate_wage_data(100, Some(42)).unwrap();
    let b = simulate_wage_data(100, Some(42)).unwrap();
    let c = simulate_wage_data(100, Some(43)).unwrap();

    assert_eq!(a, b);
    assert_ne!(column(&a, "education"), column(&c, "education"));
}

#[test]
fn test_unseeded_draws_have_requested_size() {
    let data = simulate_wage_data(10, None).unwrap();
    assert_eq!(data.nrows(), 10);
}

#[test]
fn test_value_bounds() {
    let data = simulate_wage_data(2000, Some(7)).unwrap();

    assert!(column(&data, "education").iter().all(|&e| (6.0..=20.0).contains(&e)));
    assert!(column(&data, "experience").iter().all(|&e| (0.0..40.0).contains(&e)));
    assert!(column(&data, "age").iter().all(|&a| (18.0..=70.0).contains(&a)));
    assert!(column(&data, "wage").iter().all(|&w| w > 0.0));
}

#[test]
fn test_wage_is_exp_of_log_wage() {
    let data = simulate_wage_data(50, Some(5)).unwrap();

    for (w, lw) in column(&data, "wage").iter().zip(column(&data, "log_wage")) {
        approx::assert_relative_eq!(*w, lw.exp(), max_relative = 1e-12);
    }
}

#[test]
fn test_zero_observations_rejected() {
    assert!(matches!(
        simulate_wage_data(0, Some(1)),
        Err(EconError::InvalidArgument(_))
    ));
}

#[test]
fn test_config_defaults() {
    let config = SimulationConfig::default();
    assert_eq!(config.n_obs, 1000);
    assert_eq!(config.seed, None);

    let data = SimulationConfig::default().n_obs(30).seed(9).simulate().unwrap();
    assert_eq!(data, simulate_wage_data(30, Some(9)).unwrap());
}
