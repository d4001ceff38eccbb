use std::io;
use thiserror::Error;

/// Error type for loading and extracting tabular data.
#[derive(Error, Debug)]
pub enum TabstatError {
    /// IO error while reading input.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Empty input or nothing left after decoding.
    #[error("Empty file or no data to analyze")]
    EmptyData,

    /// No header/data boundary could be found.
    #[error("Could not separate a header row from numeric data")]
    NotTabular,

    /// Requested column does not exist.
    #[error("Column {index} out of range (table has {width} columns)")]
    ColumnOutOfRange { index: usize, width: usize },

    /// No column has the requested header.
    #[error("No column named {0:?}")]
    UnknownColumn(String),

    /// Requested column contains a cell that is not a number.
    #[error("Column {column} contains non-numeric values")]
    NonNumericColumn { column: usize },

    /// Too few points for the requested computation.
    #[error("Not enough data points: {points}")]
    InsufficientData { points: usize },

    /// JSON output could not be written.
    #[cfg(feature = "serde_json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for tabstat operations.
pub type Result<T> = std::result::Result<T, TabstatError>;
