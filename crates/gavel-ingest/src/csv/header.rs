//! CSV header inspection and column resolution.

use crate::error::{IngestError, Result};

/// The header row of a CSV source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvHeaders {
    /// Column names in file order, exactly as written (BOM removed).
    pub columns: Vec<String>,
}

impl CsvHeaders {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    /// Returns the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// True when the row carries no usable header names at all.
    pub fn is_blank(&self) -> bool {
        self.columns.iter().all(|c| c.trim().is_empty())
    }

    /// Position of the first column named exactly `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Resolves the column containing `substring` and returns its position.
    pub fn resolve(&self, substring: &str) -> Result<usize> {
        resolve_position(substring, &self.columns).map(|(idx, _)| idx)
    }
}

/// Finds the single header containing `substring`.
///
/// Matching is case-sensitive containment. Zero or several matches fail with
/// [`IngestError::ColumnResolution`], which lists every header that matched.
pub fn resolve_column<'a, S: AsRef<str>>(substring: &str, headers: &'a [S]) -> Result<&'a str> {
    resolve_position(substring, headers).map(|(_, name)| name)
}

fn resolve_position<'a, S: AsRef<str>>(
    substring: &str,
    headers: &'a [S],
) -> Result<(usize, &'a str)> {
    let matches: Vec<(usize, &'a str)> = headers
        .iter()
        .map(AsRef::<str>::as_ref)
        .enumerate()
        .filter(|(_, header)| header.contains(substring))
        .collect();

    match matches.as_slice() {
        [single] => Ok(*single),
        _ => Err(IngestError::ColumnResolution {
            substring: substring.to_string(),
            matches: matches.iter().map(|(_, m)| (*m).to_string()).collect(),
        }),
    }
}
