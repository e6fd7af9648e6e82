//! CSV reading utilities.

mod header;
mod reader;

pub use header::{CsvHeaders, resolve_column};
pub(crate) use reader::{open_csv, parse_integer, read_headers};
