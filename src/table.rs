//! Line-by-line parsing of delimited text into a raw table.

use crate::delimiter::Delimiter;
use std::borrow::Cow;

/// One parsed line: its fields in order.
pub type Record = Vec<String>;

/// An ordered sequence of records together with the text lines they came from.
///
/// Every record has exactly one source line; the two are only ever added together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    rows: Vec<Record>,
    lines: Vec<String>,
}

impl Table {
    /// Create a new empty table.
    pub const fn new() -> Self {
        Self {
            rows: Vec::new(),
            lines: Vec::new(),
        }
    }

    /// Build a table from records alone; source lines are the fields joined by spaces.
    pub fn from_records(rows: Vec<Record>) -> Self {
        let lines = rows.iter().map(|r| r.join(" ")).collect();
        Self { rows, lines }
    }

    /// Append a record and the line it was parsed from.
    pub fn push(&mut self, record: Record, line: impl Into<String>) {
        self.rows.push(record);
        self.lines.push(line.into());
    }

    /// The parsed records, one per input line.
    #[inline]
    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    /// The trimmed source line of each record.
    #[inline]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Records paired with their source lines.
    pub fn iter(&self) -> impl Iterator<Item = (&Record, &String)> {
        self.rows.iter().zip(&self.lines)
    }

    /// Returns true if the table is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the number of rows.
    #[inline]
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of fields in each row, in row order.
    pub fn field_counts(&self) -> Vec<usize> {
        self.rows.iter().map(Vec::len).collect()
    }

    /// Width of the first row, or 0 for an empty table.
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Copy of the rows in `range`, keeping their source lines.
    ///
    /// The range is clamped to the table.
    pub fn slice(&self, range: std::ops::Range<usize>) -> Table {
        let end = range.end.min(self.num_rows());
        let start = range.start.min(end);
        Table {
            rows: self.rows[start..end].to_vec(),
            lines: self.lines[start..end].to_vec(),
        }
    }
}

/// Split one line into trimmed fields.
///
/// Comma lines go through a quote-aware CSV reader; space and tab lines are
/// split on runs of the delimiter. A line the CSV reader cannot make sense of
/// yields an empty record.
pub fn parse_line(line: &str, delimiter: Delimiter) -> Record {
    match delimiter {
        Delimiter::Comma => parse_csv_line(line),
        Delimiter::Space | Delimiter::Tab => split_runs(line, delimiter.as_char()),
    }
}

/// Parse every line of `text` into a record. No line is dropped.
pub fn parse_table(text: &str, delimiter: Delimiter) -> Table {
    let normalized = normalize_line_endings(text);
    let mut table = Table::new();

    for line in normalized.lines() {
        table.push(parse_line(line, delimiter), line.trim());
    }

    table
}

fn parse_csv_line(line: &str) -> Record {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(line.as_bytes());

    let mut record = csv::StringRecord::new();
    match reader.read_record(&mut record) {
        Ok(true) => record.iter().map(str::to_string).collect(),
        Ok(false) => Vec::new(),
        Err(e) => {
            log::trace!("unparseable line {line:?}: {e}");
            Vec::new()
        }
    }
}

fn split_runs(line: &str, delimiter: char) -> Record {
    line.split(delimiter)
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .map(str::to_string)
        .collect()
}

/// Normalize line endings to LF.
/// Returns `Cow::Borrowed` when there is no carriage return to replace.
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}
