//! Tests for data module

use super::*;
use approx::assert_abs_diff_eq;

#[test]
fn test_series_creation() {
    let float_series = Series::float(vec![1.0, 2.0, 3.0]);
    assert_eq!(float_series.len(), 3);
    assert_eq!(float_series.dtype(), "float64");
    assert!(float_series.is_numeric());

    let int_series = Series::int(vec![1, 2, 3]);
    assert_eq!(int_series.dtype(), "int64");
    assert!(int_series.is_numeric());

    let bool_series = Series::bool(vec![true, false, true]);
    assert_eq!(bool_series.dtype(), "bool");
    assert!(!bool_series.is_numeric());

    let string_series = Series::string(vec!["a".to_string(), "b".to_string()]);
    assert_eq!(string_series.len(), 2);
    assert!(!string_series.is_numeric());
}

#[test]
fn test_series_statistics() {
    let series = Series::float(vec![1.0, 2.0, 3.0, 4.0, 5.0]);

    assert_eq!(series.mean().unwrap(), 3.0);
    assert_abs_diff_eq!(series.std(1).unwrap(), 1.58113883, epsilon = 1e-6);
    assert_eq!(series.sum().unwrap(), 15.0);

    let stats = series.describe().unwrap();
    assert_eq!(stats.count, 5);
    assert_eq!(stats.mean, 3.0);
    assert_eq!(stats.min, 1.0);
    assert_eq!(stats.q25, 2.0);
    assert_eq!(stats.q50, 3.0);
    assert_eq!(stats.q75, 4.0);
    assert_eq!(stats.max, 5.0);
    assert_eq!(stats.missing, 0);
    // Symmetric input
    assert_abs_diff_eq!(stats.skewness, 0.0, epsilon = 1e-12);
    // Discrete uniform on five points: m4 / m2^2 - 3 = 6.8 / 4 - 3
    assert_abs_diff_eq!(stats.kurtosis, -1.3, epsilon = 1e-12);
}

#[test]
fn test_quantile_interpolation() {
    let values = [4.0, 1.0, 3.0, 2.0];
    assert_abs_diff_eq!(stats::quantile(&values, 0.25), 1.75, epsilon = 1e-12);
    assert_abs_diff_eq!(stats::quantile(&values, 0.5), 2.5, epsilon = 1e-12);
    assert_abs_diff_eq!(stats::quantile(&values, 0.75), 3.25, epsilon = 1e-12);
    assert!(stats::quantile(&[], 0.5).is_nan());
}

#[test]
fn test_skewness_sign() {
    let right_tail = [1.0, 1.0, 1.0, 2.0, 10.0];
    assert!(stats::skewness(&right_tail) > 0.0);

    let left_tail = [-10.0, -2.0, -1.0, -1.0, -1.0];
    assert!(stats::skewness(&left_tail) < 0.0);

    // m2 = 0.1875, m3 = 0.09375 for [0, 0, 0, 1]
    let skew = stats::skewness(&[0.0, 0.0, 0.0, 1.0]);
    assert_abs_diff_eq!(skew, 0.09375 / 0.1875_f64.powf(1.5), epsilon = 1e-12);
}

#[test]
fn test_missing_values_are_excluded() {
    let series = Series::float(vec![1.0, f64::NAN, 3.0, f64::NAN]);
    let stats = series.describe().unwrap();

    assert_eq!(stats.count, 2);
    assert_eq!(stats.missing, 2);
    assert_eq!(stats.mean, 2.0);
    assert_eq!(stats.min, 1.0);
    assert_eq!(stats.max, 3.0);
}

#[test]
fn test_constant_series_has_undefined_moments() {
    let stats = Series::float(vec![2.0; 6]).describe().unwrap();

    assert_eq!(stats.count, 6);
    assert_eq!(stats.std, 0.0);
    assert!(stats.skewness.is_nan());
    assert!(stats.kurtosis.is_nan());
}

#[test]
fn test_empty_and_single_value_series() {
    let empty = Series::float(Vec::<f64>::new()).describe().unwrap();
    assert_eq!(empty.count, 0);
    assert!(empty.mean.is_nan());

    let single = Series::float(vec![7.0]).describe().unwrap();
    assert_eq!(single.count, 1);
    assert_eq!(single.mean, 7.0);
    assert!(single.std.is_nan());
}

#[test]
fn test_string_series_is_not_summarized() {
    let series = Series::string(vec!["a".to_string()]);
    assert!(matches!(
        series.describe(),
        Err(DataError::NonNumericData("string"))
    ));
}

#[test]
fn test_dataframe_creation() {
    let df = DataFrame::from_columns(vec![
        ("x", Series::float(vec![1.0, 2.0, 3.0])),
        ("y", Series::int(vec![4, 5, 6])),
    ])
    .unwrap();

    assert_eq!(df.shape(), (3, 2));
    assert_eq!(df.column_names(), vec!["x", "y"]);
}

#[test]
fn test_dataframe_rejects_ragged_columns() {
    let result = DataFrame::from_columns(vec![
        ("x", Series::float(vec![1.0, 2.0, 3.0])),
        ("y", Series::float(vec![1.0, 2.0])),
    ]);

    assert!(matches!(result, Err(DataError::DimensionMismatch { .. })));
}

#[test]
fn test_dataframe_select() {
    let df = DataFrame::from_columns(vec![
        ("a", Series::float(vec![1.0, 2.0, 3.0])),
        ("b", Series::float(vec![4.0, 5.0, 6.0])),
        ("c", Series::float(vec![7.0, 8.0, 9.0])),
    ])
    .unwrap();

    let selected = df.select(["c", "a"]).unwrap();
    assert_eq!(selected.shape(), (3, 2));
    assert_eq!(selected.column_names(), vec!["c", "a"]);

    assert!(matches!(
        df.select(["z"]),
        Err(DataError::ColumnNotFound(name)) if name == "z"
    ));
}

#[test]
fn test_builder_pattern() {
    let df = DataFrameBuilder::new()
        .with_column("x", Series::float(vec![1.0, 2.0, 3.0]))
        .unwrap()
        .with_column("y", Series::int(vec![4, 5, 6]))
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(df.shape(), (3, 2));

    let duplicate = DataFrameBuilder::new()
        .with_column("x", Series::float(vec![1.0]))
        .unwrap()
        .with_column("x", Series::float(vec![2.0]));
    assert!(matches!(duplicate, Err(DataError::DuplicateColumn(_))));
}

#[test]
fn test_column_lookup() {
    let df = DataFrame::from_columns(vec![("x", Series::float(vec![1.0, 2.0]))]).unwrap();

    assert_eq!(df.get_column("x"), Some(&Series::float(vec![1.0, 2.0])));
    assert_eq!(df.get_column("y"), None);
    assert_eq!(df.column("x").unwrap(), &Series::float(vec![1.0, 2.0]));
    assert_eq!(
        df.column("y").unwrap_err(),
        DataError::ColumnNotFound("y".to_string())
    );
}

#[test]
fn test_insert_column_overwrites_in_place() {
    let mut df = DataFrame::from_columns(vec![
        ("x", Series::float(vec![1.0, 2.0])),
        ("y", Series::float(vec![3.0, 4.0])),
    ])
    .unwrap();

    let previous = df.insert_column("z", Series::float(vec![5.0, 6.0])).unwrap();
    assert!(previous.is_none());
    assert_eq!(df.column_names(), vec!["x", "y", "z"]);

    let previous = df.insert_column("x", Series::float(vec![9.0, 9.0])).unwrap();
    assert_eq!(previous, Some(Series::float(vec![1.0, 2.0])));
    assert_eq!(df.column_names(), vec!["x", "y", "z"]);
    assert_eq!(df.float_column("x").unwrap().to_vec(), vec![9.0, 9.0]);

    let err = df.insert_column("w", Series::float(vec![1.0])).unwrap_err();
    assert!(matches!(err, DataError::DimensionMismatch { .. }));
}

#[test]
fn test_design_matrix() {
    let df = DataFrame::from_columns(vec![
        ("a", Series::float(vec![1.0, 2.0, 3.0])),
        ("b", Series::int(vec![4, 5, 6])),
    ])
    .unwrap();

    let x = df.design_matrix(&["b", "a"], true).unwrap();
    assert_eq!(x.shape(), &[3, 3]);
    assert_eq!(x[[0, 0]], 1.0);
    assert_eq!(x[[0, 1]], 4.0);
    assert_eq!(x[[2, 2]], 3.0);

    let x = df.design_matrix(&["a"], false).unwrap();
    assert_eq!(x.shape(), &[3, 1]);
}

#[test]
fn test_design_matrix_rejects_missing_values() {
    let df = DataFrame::from_columns(vec![("a", Series::float(vec![1.0, f64::NAN]))]).unwrap();

    assert!(matches!(
        df.design_matrix(&["a"], true),
        Err(DataError::MissingData(name)) if name == "a"
    ));
}

#[test]
fn test_describe_numeric_columns_in_order() {
    let df = DataFrame::from_columns(vec![
        ("z", Series::float(vec![1.0, 2.0, 3.0])),
        ("label", Series::string(vec!["a".to_string(), "b".to_string(), "c".to_string()])),
        ("flag", Series::bool(vec![true, false, true])),
        ("a", Series::int(vec![1, 1, 4])),
    ])
    .unwrap();

    let table = df.describe().unwrap();
    assert_eq!(table.variables(), vec!["z", "a"]);
    assert_eq!(table.get("a").unwrap().mean, 2.0);

    let table = df.describe_columns(["a", "z"]).unwrap();
    assert_eq!(table.variables(), vec!["a", "z"]);

    assert!(df.describe_columns(["missing"]).is_err());
    assert!(matches!(
        df.describe_columns(["label"]),
        Err(DataError::NonNumericData(_))
    ));
}

#[test]
fn test_describe_display_lists_every_variable() {
    let df = DataFrame::from_columns(vec![
        ("wage", Series::float(vec![1.0, 2.0, 3.0])),
        ("age", Series::float(vec![20.0, 30.0, 40.0])),
    ])
    .unwrap();

    let rendered = df.describe().unwrap().to_string();
    assert!(rendered.contains("skewness"));
    assert!(rendered.contains("missing"));
    assert!(rendered.lines().any(|l| l.starts_with("wage")));
    assert!(rendered.lines().any(|l| l.starts_with("age")));
}

#[cfg(feature = "proptest")]
mod proptest_tests {
    use super::*;
    use proptest::collection::vec;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_quartiles_are_ordered(values in vec(-1e6f64..1e6, 1..200)) {
            let stats = SeriesStats::from_values(&values);
            prop_assert!(stats.min <= stats.q25);
            prop_assert!(stats.q25 <= stats.q50);
            prop_assert!(stats.q50 <= stats.q75);
            prop_assert!(stats.q75 <= stats.max);
            prop_assert_eq!(stats.count, values.len());
        }

        #[test]
        fn prop_skewness_flips_with_sign(values in vec(-1e3f64..1e3, 3..100)) {
            let negated: Vec<f64> = values.iter().map(|v| -v).collect();
            let s = stats::skewness(&values);
            let t = stats::skewness(&negated);
            if s.is_finite() {
                prop_assert!((s + t).abs() < 1e-6);
            }
        }
    }
}
