//! Header/data boundary detection in a normalized table.

use crate::numeric::is_numeric;
use crate::table::{Record, Table};

/// A normalized table split at its header row.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderSplit {
    /// Index of the header row within the normalized table.
    pub header_row: usize,
    /// Column names taken from the header row.
    pub column_headers: Record,
    /// Rows below the header, all numeric in the scanned columns.
    pub data: Table,
}

/// Split a normalized table at the last row holding any non-numeric field.
///
/// That row becomes the column header and everything below it is data.
/// Returns `None` for an empty table, when every row is numeric, or when the
/// header is the last row (a header with no data below it).
pub fn split_header_and_data(table: &Table) -> Option<HeaderSplit> {
    let boundary = table
        .rows()
        .iter()
        .rposition(|row| row.iter().any(|field| !is_numeric(field)))?;
    split_at(table, boundary)
}

/// Like [`split_header_and_data`], but only `column` decides whether a row is
/// numeric. Useful when other columns carry text labels.
pub fn split_header_and_data_on(table: &Table, column: usize) -> Option<HeaderSplit> {
    if column >= table.width() {
        return None;
    }
    let boundary = table
        .rows()
        .iter()
        .rposition(|row| row.get(column).is_none_or(|field| !is_numeric(field)))?;
    split_at(table, boundary)
}

fn split_at(table: &Table, boundary: usize) -> Option<HeaderSplit> {
    if boundary + 1 >= table.num_rows() {
        log::debug!("header row {boundary} has no data below it");
        return None;
    }
    log::debug!("header boundary at row {boundary}");

    Some(HeaderSplit {
        header_row: boundary,
        column_headers: table.rows()[boundary].clone(),
        data: table.slice(boundary + 1..table.num_rows()),
    })
}
