//! Majority-shape filtering of a raw table.
//!
//! Real-world exports are "mostly clean": a block of uniformly shaped data
//! rows preceded by free-text preamble. The modal record length identifies
//! the data rows; everything else is dropped from the table.

use crate::table::Table;
use foldhash::{HashMap, HashMapExt};

/// The record lengths of a table, in row order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Spectrum {
    lengths: Vec<usize>,
}

impl Spectrum {
    /// Compute the spectrum of a table.
    pub fn of(table: &Table) -> Self {
        Self {
            lengths: table.field_counts(),
        }
    }

    /// Record lengths in row order.
    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    /// Distinct lengths, ascending.
    pub fn distinct(&self) -> Vec<usize> {
        let mut distinct = self.lengths.clone();
        distinct.sort_unstable();
        distinct.dedup();
        distinct
    }

    /// A table is well-shaped when every record has the same length.
    pub fn is_well_shaped(&self) -> bool {
        self.distinct().len() == 1
    }

    /// The most frequent length and how often it occurs.
    ///
    /// Frequency ties go to the smallest length.
    pub fn mode(&self) -> Option<(usize, usize)> {
        let mut counts: HashMap<usize, usize> = HashMap::with_capacity(self.lengths.len());
        for &len in &self.lengths {
            *counts.entry(len).or_insert(0) += 1;
        }

        counts
            .into_iter()
            .max_by(|(len_a, count_a), (len_b, count_b)| {
                count_a.cmp(count_b).then_with(|| len_b.cmp(len_a))
            })
    }
}

/// Output of [`normalize`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Normalized {
    /// Leading lines that do not belong to the data block.
    pub metadata: Vec<String>,
    /// Records of the modal length, in original order.
    pub table: Table,
    /// Input row index of each record in `table`.
    pub origins: Vec<usize>,
}

/// Keep only records of the modal length and collect the leading preamble.
///
/// The preamble is the first `total - k` lines, where `k` is how many records
/// have the modal length. This assumes the data block runs uninterrupted to
/// the end of the input; a stray short record after the data shifts the
/// preamble boundary.
pub fn normalize(table: &Table) -> Normalized {
    let spectrum = Spectrum::of(table);
    let Some((length, count)) = spectrum.mode() else {
        return Normalized::default();
    };

    let header_lines = table.num_rows() - count;
    log::debug!(
        "spectrum mode: {count} of {} records have {length} fields, {header_lines} preamble lines",
        table.num_rows()
    );

    let metadata = table.lines()[..header_lines].to_vec();

    let mut clean = Table::new();
    let mut origins = Vec::with_capacity(count);
    for (index, (row, line)) in table.iter().enumerate() {
        if row.len() == length {
            clean.push(row.clone(), line.clone());
            origins.push(index);
        }
    }

    Normalized {
        metadata,
        table: clean,
        origins,
    }
}
