//! The ordered, read-only result of a single load call.

use std::ops::Index;
use std::path::{Path, PathBuf};
use std::slice;

/// Fully materialized rows read from one source, in source order.
///
/// There is no way to push, remove or mutate rows once the batch exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordBatch<T> {
    rows: Vec<T>,
    source: Option<PathBuf>,
}

impl<T> RecordBatch<T> {
    pub fn new(rows: Vec<T>) -> Self {
        Self { rows, source: None }
    }

    /// Creates a batch tagged with the file it was read from.
    pub fn from_source(rows: Vec<T>, source: impl Into<PathBuf>) -> Self {
        Self {
            rows,
            source: Some(source.into()),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.rows.get(index)
    }

    pub fn first(&self) -> Option<&T> {
        self.rows.first()
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.rows.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.rows
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Consumes the batch, handing ownership of the rows to the caller.
    pub fn into_rows(self) -> Vec<T> {
        self.rows
    }
}

impl<T> Default for RecordBatch<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> Index<usize> for RecordBatch<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.rows[index]
    }
}

impl<'a, T> IntoIterator for &'a RecordBatch<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl<T> IntoIterator for RecordBatch<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}
