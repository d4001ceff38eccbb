//! Ingestion entry points: text in, [`RawTable`] out.

use rayon::prelude::*;
use std::path::Path;

use crate::delimiter::{Delimiter, detect};
use crate::encoding::decode;
use crate::error::{Result, TabstatError};
use crate::header::{split_header_and_data, split_header_and_data_on};
use crate::raw_table::RawTable;
use crate::shape::normalize;
use crate::table::parse_table;

/// Ingest a text blob with default settings.
///
/// Returns `None` when no header row can be told apart from numeric data:
/// empty input, input where every row is numeric, or a header row with no
/// data rows below it (a header-only file).
pub fn load_raw_data(text: &str) -> Option<RawTable> {
    Loader::new().load_str(text)
}

/// Configurable ingestion pipeline.
///
/// # Example
///
/// ```
/// use tabstat::{Delimiter, Loader};
///
/// let mut loader = Loader::new();
/// loader.delimiter(Delimiter::Comma);
///
/// let raw = loader.load_str("Year,Value\n1880,-0.12\n1881,-0.07\n").unwrap();
/// assert_eq!(raw.column_headers, vec!["Year", "Value"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Loader {
    /// Optional forced delimiter.
    forced_delimiter: Option<Delimiter>,
    /// Optional single column deciding the header boundary.
    header_column: Option<usize>,
}

impl Loader {
    /// Create a new Loader with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Force a specific delimiter (skip delimiter detection).
    pub fn delimiter(&mut self, delimiter: Delimiter) -> &mut Self {
        self.forced_delimiter = Some(delimiter);
        self
    }

    /// Only let `column` decide where the header row is.
    ///
    /// By default a row counts as data only if every field is numeric.
    pub fn header_column(&mut self, column: usize) -> &mut Self {
        self.header_column = Some(column);
        self
    }

    /// Run the pipeline over a text blob.
    pub fn load_str(&self, text: &str) -> Option<RawTable> {
        let delimiter = self.forced_delimiter.unwrap_or_else(|| detect(text));
        let table = parse_table(text, delimiter);
        let normalized = normalize(&table);

        let split = match self.header_column {
            Some(column) => split_header_and_data_on(&normalized.table, column),
            None => split_header_and_data(&normalized.table),
        }?;

        // Every non-blank input line above the header row, in input order.
        let header_origin = normalized.origins.get(split.header_row).copied()?;
        let metadata: Vec<String> = table.lines()[..header_origin]
            .iter()
            .filter(|line| !line.is_empty())
            .cloned()
            .collect();

        log::debug!(
            "loaded {} rows x {} columns, {} metadata lines",
            split.data.num_rows(),
            split.column_headers.len(),
            metadata.len()
        );

        Some(RawTable::new(metadata, split.column_headers, split.data))
    }

    /// Decode raw bytes and run the pipeline.
    pub fn load_bytes(&self, data: &[u8]) -> Result<RawTable> {
        if data.is_empty() {
            return Err(TabstatError::EmptyData);
        }

        let decoded = decode(data);
        if decoded.text.trim().is_empty() {
            return Err(TabstatError::EmptyData);
        }

        self.load_str(&decoded.text).ok_or(TabstatError::NotTabular)
    }

    /// Read a file and run the pipeline over its bytes.
    pub fn load_path<P: AsRef<Path>>(&self, path: P) -> Result<RawTable> {
        let data = std::fs::read(path.as_ref())?;
        self.load_bytes(&data)
    }

    /// Load independent blobs in parallel, preserving input order.
    pub fn load_all(&self, texts: &[&str]) -> Vec<Option<RawTable>> {
        texts.par_iter().map(|text| self.load_str(text)).collect()
    }
}
