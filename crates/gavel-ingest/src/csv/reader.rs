//! Opening CSV sources and reading their header row.

use std::fs::File;
use std::path::Path;
use std::str::FromStr;

use csv::{Reader, ReaderBuilder};

use crate::error::{IngestError, Result};

use super::header::CsvHeaders;

/// Opens `path` as a headed, comma-separated CSV reader.
///
/// The reader owns the file handle, so it is closed whenever the reader is
/// dropped, including on early returns.
pub(crate) fn open_csv(path: &Path) -> Result<Reader<File>> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    Ok(ReaderBuilder::new().has_headers(true).from_reader(file))
}

/// Reads the header row, stripping a leading UTF-8 BOM.
///
/// Fails with [`IngestError::Format`] when the source has no header row.
pub(crate) fn read_headers<R: std::io::Read>(
    reader: &mut Reader<R>,
    path: &Path,
) -> Result<CsvHeaders> {
    let record = reader.headers().map_err(|e| IngestError::CsvParse {
        path: path.to_path_buf(),
        source: e,
    })?;

    let columns: Vec<String> = record
        .iter()
        .enumerate()
        .map(|(idx, value)| {
            if idx == 0 {
                value.trim_start_matches('\u{feff}').to_string()
            } else {
                value.to_string()
            }
        })
        .collect();

    let headers = CsvHeaders::new(columns);
    if headers.is_blank() {
        return Err(IngestError::Format {
            path: path.to_path_buf(),
            reason: "source has no header row".to_string(),
        });
    }
    Ok(headers)
}

/// Parses a base-10 integer cell, ignoring surrounding whitespace.
pub(crate) fn parse_integer<T: FromStr>(
    value: &str,
    path: &Path,
    row: usize,
    field: &str,
) -> Result<T> {
    value.trim().parse::<T>().map_err(|_| IngestError::FieldParse {
        path: path.to_path_buf(),
        row,
        field: field.to_string(),
        value: value.to_string(),
    })
}
