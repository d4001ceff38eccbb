//! Delimiter detection from raw character counts.

use serde::Serialize;
use std::fmt;

/// Field delimiter of a delimited text file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    /// Runs of spaces separate fields.
    #[default]
    Space,
    /// Runs of tabs separate fields.
    Tab,
    /// Comma separated values with quoting.
    Comma,
}

impl Delimiter {
    /// Returns the delimiter character.
    pub const fn as_char(&self) -> char {
        match self {
            Delimiter::Space => ' ',
            Delimiter::Tab => '\t',
            Delimiter::Comma => ',',
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Delimiter::Space => write!(f, "space"),
            Delimiter::Tab => write!(f, "tab"),
            Delimiter::Comma => write!(f, "comma"),
        }
    }
}

/// Raw occurrence counts of the candidate delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DelimiterProfile {
    pub spaces: usize,
    pub tabs: usize,
    pub commas: usize,
}

impl DelimiterProfile {
    /// Count spaces, tabs and commas over the whole input.
    pub fn of(text: &str) -> Self {
        let bytes = text.as_bytes();
        Self {
            spaces: bytecount::count(bytes, b' '),
            tabs: bytecount::count(bytes, b'\t'),
            commas: bytecount::count(bytes, b','),
        }
    }

    /// Pick the dominant delimiter.
    ///
    /// Tab wins when it outnumbers spaces; comma wins when it outnumbers both
    /// spaces and tabs; space is the fallback.
    pub fn choose(&self) -> Delimiter {
        if self.tabs > self.spaces {
            Delimiter::Tab
        } else if self.commas > self.spaces && self.commas > self.tabs {
            Delimiter::Comma
        } else {
            Delimiter::Space
        }
    }
}

/// Detect the delimiter of a text blob.
pub fn detect(text: &str) -> Delimiter {
    let profile = DelimiterProfile::of(text);
    let delimiter = profile.choose();
    log::debug!(
        "delimiter counts: spaces={} tabs={} commas={} -> {}",
        profile.spaces,
        profile.tabs,
        profile.commas,
        delimiter
    );
    delimiter
}
