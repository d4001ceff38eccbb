//! Integration tests for tabstat

use tabstat::stats::{self, mean, variance};
use tabstat::{
    Delimiter, Filter, Loader, Point, Spectrum, Statistics, Table, detect, extract_points,
    filter_data, load_raw_data, normalize, parse_table,
};

const ANOMALIES: &str = "Year,Value\n1880,-0.12\n1881,-0.07\n1882,-0.08\n1883,-0.15";

#[test]
fn test_end_to_end_anomalies() {
    let raw = load_raw_data(ANOMALIES).unwrap();

    assert_eq!(raw.column_headers, vec!["Year", "Value"]);
    assert_eq!(raw.num_rows(), 4);
    assert!(raw.metadata.is_empty());

    let points = raw.points(0, 1).unwrap();
    assert_eq!(
        points,
        vec![
            Point::new(1880.0, -0.12),
            Point::new(1881.0, -0.07),
            Point::new(1882.0, -0.08),
            Point::new(1883.0, -0.15),
        ]
    );

    let values = raw.column(1).unwrap();
    assert!((mean(&values).unwrap() + 0.105).abs() < 1e-9);
}

#[test]
fn test_end_to_end_statistics() {
    let raw = load_raw_data(ANOMALIES).unwrap();
    let points = raw.points(0, 1).unwrap();
    let stats = Statistics::compute(&points).unwrap();

    assert_eq!(stats.n, 4);
    assert_eq!(stats.x_min, 1880.0);
    assert_eq!(stats.x_max, 1883.0);
    assert_eq!(stats.left_data_point, Point::new(1880.0, -0.12));
    assert_eq!(stats.right_data_point, Point::new(1883.0, -0.15));
    assert!((stats.x_mean - 1881.5).abs() < 1e-9);
    assert!((stats.y_mean + 0.105).abs() < 1e-9);

    let line = stats::linear_regression(&points).unwrap();
    assert!((line.slope - stats.m).abs() < 1e-6);
    assert!((line.intercept - stats.b).abs() < 1e-3);
}

#[test]
fn test_tab_file_with_preamble() {
    let text = "Station\tKeflavik\n\
                Elevation\t52\n\
                month\ttemp\train\n\
                1\t-0.5\t86.2\n\
                2\t0.1\t79.0\n\
                3\t1.2\t80.4\n\
                4\t3.4\t55.1\n";

    assert_eq!(detect(text), Delimiter::Tab);

    let raw = load_raw_data(text).unwrap();
    assert_eq!(raw.metadata, vec!["Station\tKeflavik", "Elevation\t52"]);
    assert_eq!(raw.metadata_text(), "Station\tKeflavik Elevation\t52");
    assert_eq!(raw.column_headers, vec!["month", "temp", "rain"]);
    assert_eq!(raw.column_index("rain"), Some(2));
    assert_eq!(raw.column(2), Some(vec![86.2, 79.0, 80.4, 55.1]));
}

#[test]
fn test_quoted_csv_fields() {
    let text = "\"Year\",\"Value, smoothed\"\n1880,\"-0.12\"\n1881,\"-0.07\"\n";
    let raw = load_raw_data(text).unwrap();

    assert_eq!(raw.column_headers, vec!["Year", "Value, smoothed"]);
    assert_eq!(raw.column(1), Some(vec![-0.12, -0.07]));
}

#[test]
fn test_minority_rows_are_dropped() {
    let text = "x,y\n1,2\n3,4,extra\n5,6\n7,8\n";
    let normalized = normalize(&parse_table(text, Delimiter::Comma));

    assert_eq!(normalized.table.num_rows(), 4);
    assert!(Spectrum::of(&normalized.table).is_well_shaped());
}

#[test]
fn test_shape_filter_idempotent() {
    let text = "title\nx,y\n1,2\n\n3,4\n5,6\n";
    let first = normalize(&parse_table(text, Delimiter::Comma));
    let second = normalize(&first.table);

    assert_eq!(second.table, first.table);
}

#[test]
fn test_extract_points_synthetic_table() {
    let columns: [Vec<f64>; 3] = [
        vec![0.5, 1.5, 2.5, 3.5],
        vec![-1.0, -2.0, -3.0, -4.0],
        vec![10.0, 20.0, 30.0, 40.0],
    ];
    let rows = (0..4)
        .map(|r| columns.iter().map(|c| c[r].to_string()).collect())
        .collect();
    let table = Table::from_records(rows);

    let points = extract_points(&table, 2, 0).unwrap();
    let expected: Vec<Point> = columns[2]
        .iter()
        .zip(&columns[0])
        .map(|(&x, &y)| Point::new(x, y))
        .collect();
    assert_eq!(points, expected);
}

#[test]
fn test_non_numeric_column_fails_whole_extraction() {
    let text = "id,label,value\n1,a,0.5\n2,b,0.7\n";
    let mut loader = Loader::new();
    loader.header_column(0);

    let raw = loader.load_str(text).unwrap();
    assert!(raw.points(0, 1).is_none());
    assert!(raw.points(0, 2).is_some());
}

#[test]
fn test_filter_then_recompute() {
    let data: Vec<Point> = (0..10).map(|i| Point::new(i as f64, 2.0 * i as f64 + 1.0)).collect();
    let filtered = filter_data(&Filter::between(2.0, 4.0), &data);

    assert_eq!(filtered.len(), 3);
    let stats = Statistics::compute(&filtered).unwrap();
    assert_eq!(stats.x_min, 2.0);
    assert_eq!(stats.x_max, 4.0);
    assert!((stats.m - 2.0).abs() < 1e-9);
    assert!((stats.b - 1.0).abs() < 1e-9);

    let excluded = filter_data(&Filter::between(2.0, 4.0), &[
        Point::new(1.999, 0.0),
        Point::new(4.001, 0.0),
    ]);
    assert!(excluded.is_empty());
}

#[test]
fn test_mean_variance_sanity() {
    let values = [1.0, 2.0, 3.0, 4.0, 5.0];
    assert_eq!(mean(&values), Some(3.0));
    assert_eq!(variance(&values), Some(2.0));
}

#[test]
fn test_regression_exactness() {
    let points = [
        Point::new(1.0, 3.0),
        Point::new(4.0, 9.0),
        Point::new(5.0, 11.0),
    ];
    let line = stats::linear_regression(&points).unwrap();
    assert!((line.intercept - 1.0).abs() < 1e-9);
    assert!((line.slope - 2.0).abs() < 1e-9);
    assert!((stats::r2(&points).unwrap() - 1.0).abs() < 1e-9);
}

#[test]
fn test_absence_propagation() {
    assert!(stats::linear_regression(&[]).is_none());
    assert!(stats::linear_regression(&[Point::new(1.0, 1.0)]).is_none());
    assert!(stats::linear_regression(&[Point::new(1.0, 1.0); 3]).is_none());
    assert!(Statistics::compute(&[Point::new(1.0, 1.0); 3]).is_none());
}

#[test]
fn test_mode_determinism() {
    let values = [3.0, 7.0, 7.0, 3.0, 1.0];
    let first = stats::mode(&values);
    for _ in 0..100 {
        assert_eq!(stats::mode(&values), first);
    }
    assert_eq!(first, Some((3.0, 2)));
}

#[test]
fn test_load_all_independent_files() {
    let texts = [ANOMALIES, "nothing numeric here\n", "a b\n1 2\n3 4\n"];
    let loaded = Loader::new().load_all(&texts);

    assert_eq!(loaded[0].as_ref().map(|r| r.num_rows()), Some(4));
    assert!(loaded[1].is_none());
    assert_eq!(loaded[2].as_ref().map(|r| r.num_columns()), Some(2));
}

#[test]
fn test_load_bytes_windows_line_endings() {
    let data = b"Year,Value\r\n1880,-0.12\r\n1881,-0.07\r\n";
    let raw = Loader::new().load_bytes(data).unwrap();

    assert_eq!(raw.column_headers, vec!["Year", "Value"]);
    assert_eq!(raw.column(1), Some(vec![-0.12, -0.07]));
}

#[test]
fn test_overflowing_literal_is_not_numeric() {
    let text = "x,y\n1,1e999\n2,3\n3,4\n";

    // Any non-numeric cell marks a header row under the default policy.
    let raw = load_raw_data(text).unwrap();
    assert_eq!(raw.column_headers, vec!["1", "1e999"]);

    let mut loader = Loader::new();
    loader.header_column(0);
    let raw = loader.load_str(text).unwrap();
    assert_eq!(raw.column_headers, vec!["x", "y"]);
    assert_eq!(raw.column(0), Some(vec![1.0, 2.0, 3.0]));
    assert!(raw.column(1).is_none());
    assert!(raw.points(0, 1).is_none());
}
