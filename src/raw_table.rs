//! The ingested table and numeric column extraction.

use crate::error::{Result, TabstatError};
use crate::numeric::parse_number;
use crate::stats::{Data, Point};
use crate::table::{Record, Table};
use serde::Serialize;

/// Result of ingesting a text blob: preamble, column names and data rows.
///
/// Every data row has as many fields as there are column headers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawTable {
    /// Preamble lines found before the header row.
    pub metadata: Vec<String>,
    /// Column names.
    pub column_headers: Record,
    /// Data rows as text.
    #[serde(serialize_with = "serialize_rows")]
    pub data: Table,
}

impl RawTable {
    pub fn new(metadata: Vec<String>, column_headers: Record, data: Table) -> Self {
        Self {
            metadata,
            column_headers,
            data,
        }
    }

    /// The preamble as one space-separated string.
    pub fn metadata_text(&self) -> String {
        self.metadata.join(" ")
    }

    #[inline]
    pub fn num_columns(&self) -> usize {
        self.column_headers.len()
    }

    #[inline]
    pub fn num_rows(&self) -> usize {
        self.data.num_rows()
    }

    /// Position of the column whose header is exactly `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.column_headers.iter().position(|h| h == name)
    }

    /// Column `index` as numbers, or `None` if any cell is not numeric.
    pub fn column(&self, index: usize) -> Option<Vec<f64>> {
        extract_column(&self.data, index)
    }

    /// Columns `i` and `j` as coordinate pairs.
    pub fn points(&self, i: usize, j: usize) -> Option<Data> {
        extract_points(&self.data, i, j)
    }

    /// Like [`points`](Self::points), but says which column failed and why.
    pub fn try_points(&self, i: usize, j: usize) -> Result<Data> {
        let width = self.num_columns();
        for index in [i, j] {
            if index >= width {
                return Err(TabstatError::ColumnOutOfRange { index, width });
            }
        }
        let xs = self
            .column(i)
            .ok_or(TabstatError::NonNumericColumn { column: i })?;
        let ys = self
            .column(j)
            .ok_or(TabstatError::NonNumericColumn { column: j })?;
        Ok(zip_points(xs, ys))
    }
}

/// Parse every cell of column `index` as a number.
///
/// All or nothing: a single non-numeric or missing cell yields `None`.
pub fn extract_column(table: &Table, index: usize) -> Option<Vec<f64>> {
    table
        .rows()
        .iter()
        .map(|row| row.get(index).and_then(|cell| parse_number(cell)))
        .collect()
}

/// Zip columns `i` and `j` into points, in row order.
pub fn extract_points(table: &Table, i: usize, j: usize) -> Option<Data> {
    let xs = extract_column(table, i)?;
    let ys = extract_column(table, j)?;
    Some(zip_points(xs, ys))
}

fn zip_points(xs: Vec<f64>, ys: Vec<f64>) -> Data {
    xs.into_iter().zip(ys).map(Point::from).collect()
}

fn serialize_rows<S: serde::Serializer>(
    table: &Table,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_seq(table.rows())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(rows: &[&[&str]]) -> RawTable {
        let data = Table::from_records(
            rows.iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        );
        RawTable::new(
            vec!["Title".to_string(), "Units".to_string()],
            vec!["a".into(), "b".into(), "c".into()],
            data,
        )
    }

    #[test]
    fn test_extract_points_in_row_order() {
        let t = raw(&[&["1", "10", "100"], &["2", "20", "200"], &["3", "30", "300"]]);
        let pts = t.points(0, 2).unwrap();
        assert_eq!(
            pts,
            vec![
                Point::new(1.0, 100.0),
                Point::new(2.0, 200.0),
                Point::new(3.0, 300.0)
            ]
        );
        assert_eq!(t.column(1), Some(vec![10.0, 20.0, 30.0]));
    }

    #[test]
    fn test_column_is_all_or_nothing() {
        let t = raw(&[&["1", "10", "x"], &["2", "oops", "200"]]);
        assert_eq!(t.column(0), Some(vec![1.0, 2.0]));
        assert_eq!(t.column(1), None);
        assert_eq!(t.points(0, 1), None);
        assert_eq!(t.column(5), None);
    }

    #[test]
    fn test_try_points_errors() {
        let t = raw(&[&["1", "oops", "3"]]);
        assert!(matches!(
            t.try_points(0, 7),
            Err(TabstatError::ColumnOutOfRange { index: 7, width: 3 })
        ));
        assert!(matches!(
            t.try_points(0, 1),
            Err(TabstatError::NonNumericColumn { column: 1 })
        ));
        assert_eq!(t.try_points(0, 2).unwrap(), vec![Point::new(1.0, 3.0)]);
    }

    #[test]
    fn test_lookup_helpers() {
        let t = raw(&[&["1", "2", "3"]]);
        assert_eq!(t.column_index("b"), Some(1));
        assert_eq!(t.column_index("z"), None);
        assert_eq!(t.num_columns(), 3);
        assert_eq!(t.num_rows(), 1);
        assert_eq!(t.metadata_text(), "Title Units");
    }
}
