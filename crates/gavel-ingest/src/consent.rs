//! Consent questionnaire loading from Canvas quiz "student analysis" exports.

use std::path::Path;

use gavel_model::{ConsentFormEntry, RecordBatch};

use crate::csv::{CsvHeaders, open_csv, parse_integer, read_headers};
use crate::error::{IngestError, Result};

/// Fragment of the question header holding the typed-name response.
pub const NAME_RESPONSE_FRAGMENT: &str = "leave blank if";

/// Fragment of the question header holding the consent answer.
pub const CONSENT_COLUMN_FRAGMENT: &str = "Do you consent";

/// Only this exact cell text counts as consent.
const CONSENT_LITERAL: &str = "True";

const SIS_ID: &str = "sis_id";
const NAME: &str = "name";
const ATTEMPT: &str = "attempt";

/// Loads every consent form submission from a file.
pub trait ConsentFormReader {
    fn load(&self, path: &Path) -> Result<RecordBatch<ConsentFormEntry>>;
}

/// Reads Canvas quiz exports into [`ConsentFormEntry`] records.
///
/// Question columns carry the full question text as their header, so they are
/// located by fragment rather than by name.
#[derive(Debug, Clone, Copy, Default)]
pub struct CanvasConsentFormReader;

impl CanvasConsentFormReader {
    pub fn new() -> Self {
        Self
    }
}

impl ConsentFormReader for CanvasConsentFormReader {
    fn load(&self, path: &Path) -> Result<RecordBatch<ConsentFormEntry>> {
        let mut reader = open_csv(path)?;
        let headers = read_headers(&mut reader, path)?;
        let columns = ConsentColumns::locate(&headers, path)?;

        tracing::debug!(
            columns = headers.column_count(),
            name_response = %headers.columns[columns.name_response],
            consent = %headers.columns[columns.consent],
            "Resolved consent form question columns"
        );

        let mut entries = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            let record = result.map_err(|e| IngestError::CsvParse {
                path: path.to_path_buf(),
                source: e,
            })?;
            let row = idx + 1;
            let cell = |column: usize| record.get(column).unwrap_or("");

            entries.push(ConsentFormEntry {
                sis_id: parse_integer(cell(columns.sis_id), path, row, SIS_ID)?,
                lms_name: cell(columns.name).trim().to_string(),
                attempt: parse_integer(cell(columns.attempt), path, row, ATTEMPT)?,
                name_response: cell(columns.name_response).trim().to_string(),
                consented: cell(columns.consent) == CONSENT_LITERAL,
            });
        }

        tracing::info!(
            path = %path.display(),
            entries = entries.len(),
            "Loaded consent form submissions"
        );

        Ok(RecordBatch::from_source(entries, path))
    }
}

/// Column positions, fixed once per file before rows are read.
#[derive(Debug, Clone, Copy)]
struct ConsentColumns {
    sis_id: usize,
    name: usize,
    attempt: usize,
    name_response: usize,
    consent: usize,
}

impl ConsentColumns {
    fn locate(headers: &CsvHeaders, path: &Path) -> Result<Self> {
        let exact = |name: &str| {
            headers.position(name).ok_or_else(|| IngestError::Format {
                path: path.to_path_buf(),
                reason: format!("required exact-name column missing: '{name}'"),
            })
        };

        Ok(Self {
            sis_id: exact(SIS_ID)?,
            name: exact(NAME)?,
            attempt: exact(ATTEMPT)?,
            name_response: headers.resolve(NAME_RESPONSE_FRAGMENT)?,
            consent: headers.resolve(CONSENT_COLUMN_FRAGMENT)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "name,id,sis_id,section,attempt,\
        \"1234: Type your full name (leave blank if you do not consent)\",1.0,\
        \"1235: Do you consent to participate?\",1.0";

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    fn load_with_consent_cell(cell: &str) -> bool {
        let file = create_temp_csv(&format!(
            "{HEADER}\n\"Bourque, Bailey\",1,309780,SER 222,1,Bailey Bourque,1,{cell},1\n"
        ));
        CanvasConsentFormReader::new().load(file.path()).unwrap()[0].consented
    }

    #[test]
    fn test_consent_literal_only() {
        assert!(load_with_consent_cell("True"));
        assert!(!load_with_consent_cell(""));
        assert!(!load_with_consent_cell("False"));
        assert!(!load_with_consent_cell("TRUE"));
        assert!(!load_with_consent_cell("true"));
        assert!(!load_with_consent_cell("yes"));
        assert!(!load_with_consent_cell("\" True \""));
        assert!(!load_with_consent_cell("\"   \""));
    }

    #[test]
    fn test_name_fields_are_trimmed() {
        let file = create_temp_csv(&format!(
            "{HEADER}\n\"  Vonweinstein, Carli \",2,771671,SER 222,1,\"  Carli  \",1,True,1\n\
             \"Gulik, David\",3,600001,SER 222,1,,0,False,1\n"
        ));
        let batch = CanvasConsentFormReader::new().load(file.path()).unwrap();
        assert_eq!(batch[0].lms_name, "Vonweinstein, Carli");
        assert_eq!(batch[0].name_response, "Carli");
        assert_eq!(batch[1].name_response, "");
        assert!(!batch[1].consented);
    }

    #[test]
    fn test_missing_exact_column_is_format_error() {
        let header = HEADER.replace("sis_id", "student_number");
        let file = create_temp_csv(&format!(
            "{header}\n\"Bourque, Bailey\",1,309780,SER 222,1,Bailey Bourque,1,True,1\n"
        ));
        let err = CanvasConsentFormReader::new().load(file.path()).unwrap_err();
        assert!(matches!(
            err,
            IngestError::Format { ref reason, .. } if reason.contains("sis_id")
        ));
    }

    #[test]
    fn test_ambiguous_question_column_aborts() {
        let header = format!("{HEADER},\"9999: Do you consent again?\"");
        let file = create_temp_csv(&format!(
            "{header}\n\"Bourque, Bailey\",1,309780,SER 222,1,Bailey Bourque,1,True,1,True\n"
        ));
        let err = CanvasConsentFormReader::new().load(file.path()).unwrap_err();
        match err {
            IngestError::ColumnResolution { substring, matches } => {
                assert_eq!(substring, CONSENT_COLUMN_FRAGMENT);
                assert_eq!(matches.len(), 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_attempt() {
        let file = create_temp_csv(&format!(
            "{HEADER}\n\"Bourque, Bailey\",1,309780,SER 222,first,Bailey Bourque,1,True,1\n"
        ));
        let err = CanvasConsentFormReader::new().load(file.path()).unwrap_err();
        assert!(matches!(
            err,
            IngestError::FieldParse { row: 1, ref field, .. } if field == "attempt"
        ));
    }

    #[test]
    fn test_negative_attempt_loads() {
        let file = create_temp_csv(&format!(
            "{HEADER}\n\"Bourque, Bailey\",1,309780,SER 222,-1,Bailey Bourque,1,True,1\n"
        ));
        let batch = CanvasConsentFormReader::new().load(file.path()).unwrap();
        assert_eq!(batch[0].attempt, -1);
    }

    #[test]
    fn test_empty_file_has_no_header_row() {
        let file = create_temp_csv("");
        let err = CanvasConsentFormReader::new().load(file.path()).unwrap_err();
        assert!(matches!(
            err,
            IngestError::Format { ref reason, .. } if reason == "source has no header row"
        ));
    }
}
