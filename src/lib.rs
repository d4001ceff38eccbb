//! tabstat: delimited text ingestion and regression statistics
//!
//! Turns a messy delimited text export (comma, tab or space separated, with
//! free-text preamble lines) into a clean table of numeric columns, and
//! computes descriptive statistics and a least-squares line over pairs of
//! those columns.
//!
//! # Quick Start
//!
//! ```
//! use tabstat::{Statistics, load_raw_data};
//!
//! let text = "Year,Value\n\
//!             1880,-0.12\n\
//!             1881,-0.07\n\
//!             1882,-0.08\n";
//!
//! let raw = load_raw_data(text).unwrap();
//! assert_eq!(raw.column_headers, vec!["Year", "Value"]);
//!
//! let points = raw.points(0, 1).unwrap();
//! let stats = Statistics::compute(&points).unwrap();
//! println!("y = {:.4} + {:.4}x", stats.b, stats.m);
//! ```
//!
//! # Pipeline
//!
//! 1. Detect the delimiter from raw character counts ([`detect`])
//! 2. Parse each line into a record ([`parse_table`])
//! 3. Keep only records of the most common length ([`normalize`])
//! 4. Split the header row from the numeric rows below it ([`split_header_and_data`])
//! 5. Extract numeric columns as coordinate pairs ([`RawTable::points`])
//! 6. Summarize them ([`Statistics::compute`])
//!
//! Every stage is a pure function. Inputs that cannot be understood produce
//! `None`, never a panic.

mod delimiter;
mod encoding;
mod error;
mod header;
mod loader;
mod numeric;
mod raw_table;
mod shape;
pub mod stats;
mod table;

pub use delimiter::{Delimiter, DelimiterProfile, detect};
pub use error::{Result, TabstatError};
pub use header::{HeaderSplit, split_header_and_data, split_header_and_data_on};
pub use loader::{Loader, load_raw_data};
pub use numeric::{is_numeric, parse_number};
pub use raw_table::{RawTable, extract_column, extract_points};
pub use shape::{Normalized, Spectrum, normalize};
pub use stats::{Data, Filter, Line, Point, Statistics, Summary, filter_data};
pub use table::{Record, Table, parse_line, parse_table};

// Re-export for advanced usage
pub use encoding::{Decoded, decode, is_utf8};
