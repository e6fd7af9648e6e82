//! Enrollment roster loading.

use std::path::Path;

use gavel_model::{RecordBatch, RosterStudent};
use serde::Deserialize;

use crate::csv::{open_csv, parse_integer, read_headers};
use crate::error::{IngestError, Result};

/// Source headers a roster export must carry, in any order.
pub const ROSTER_HEADERS: [&str; 12] = [
    "ID",
    "Posting ID",
    "First Name",
    "Last Name",
    "Status",
    "Units",
    "Grade Basis",
    "Program and Plan",
    "Academic Level",
    "ASURITE",
    "Residency",
    "Zoom Email",
];

/// Loads a roster file into one [`RosterStudent`] per data row.
pub trait RosterReader {
    fn read(&self, path: &Path) -> Result<RecordBatch<RosterStudent>>;
}

/// Reads roster CSV exports addressed by exact header name.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvRosterReader;

impl CsvRosterReader {
    pub fn new() -> Self {
        Self
    }
}

impl RosterReader for CsvRosterReader {
    fn read(&self, path: &Path) -> Result<RecordBatch<RosterStudent>> {
        let mut reader = open_csv(path)?;
        let headers = read_headers(&mut reader, path)?;
        tracing::debug!(
            path = %path.display(),
            columns = headers.column_count(),
            "Read roster header"
        );

        // Reject the file before any row is mapped.
        if let Some(missing) = ROSTER_HEADERS.iter().find(|h| !headers.contains(h)) {
            return Err(IngestError::MissingColumn {
                column: (*missing).to_string(),
                path: path.to_path_buf(),
            });
        }

        let mut students = Vec::new();
        for (idx, result) in reader.deserialize::<RosterCsvRow>().enumerate() {
            let row = result.map_err(|e| IngestError::CsvParse {
                path: path.to_path_buf(),
                source: e,
            })?;
            students.push(row.into_student(path, idx + 1)?);
        }

        tracing::info!(
            path = %path.display(),
            students = students.len(),
            "Loaded roster"
        );

        Ok(RecordBatch::from_source(students, path))
    }
}

#[derive(Debug, Deserialize)]
struct RosterCsvRow {
    #[serde(rename = "ID", alias = "\u{feff}ID")]
    id: String,
    #[serde(rename = "Posting ID")]
    posting_id: String,
    #[serde(rename = "First Name")]
    first_name: String,
    #[serde(rename = "Last Name")]
    last_name: String,
    #[serde(rename = "Status")]
    status: String,
    #[serde(rename = "Units")]
    units: String,
    #[serde(rename = "Grade Basis")]
    grade_basis: String,
    #[serde(rename = "Program and Plan")]
    program_and_plan: String,
    #[serde(rename = "Academic Level")]
    academic_level: String,
    #[serde(rename = "ASURITE")]
    asurite: String,
    #[serde(rename = "Residency")]
    residency: String,
    #[serde(rename = "Zoom Email")]
    zoom_email: String,
}

impl RosterCsvRow {
    fn into_student(self, path: &Path, row: usize) -> Result<RosterStudent> {
        let units = parse_integer(&self.units, path, row, "Units")?;
        Ok(RosterStudent {
            id: self.id,
            posting_id: self.posting_id,
            first_name: self.first_name,
            last_name: self.last_name,
            status: self.status,
            units,
            grade_basis: self.grade_basis,
            program_and_plan: self.program_and_plan,
            academic_level: self.academic_level,
            asurite: self.asurite,
            residency: self.residency,
            zoom_email: self.zoom_email,
        })
    }
}
