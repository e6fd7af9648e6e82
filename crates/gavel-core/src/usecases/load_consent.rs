//! Load consent questionnaire exports and summarize them per subject.

use std::collections::BTreeMap;
use std::path::PathBuf;

use gavel_ingest::ConsentFormReader;
use gavel_model::{ConsentFormEntry, RecordBatch};
use serde::Serialize;

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadConsentFormsRequest {
    pub path: PathBuf,
}

pub struct LoadConsentFormsUseCase {
    reader: Box<dyn ConsentFormReader>,
}

impl LoadConsentFormsUseCase {
    pub fn new(reader: Box<dyn ConsentFormReader>) -> Self {
        Self { reader }
    }

    pub fn execute(&self, request: &LoadConsentFormsRequest) -> Result<RecordBatch<ConsentFormEntry>> {
        let entries = self.reader.load(&request.path)?;
        tracing::debug!(rows = entries.len(), "Consent forms ready");
        Ok(entries)
    }
}

/// Groups attempts by subject id, each group sorted by attempt number.
///
/// Attempts with the same number keep their file order.
pub fn group_by_subject(entries: &[ConsentFormEntry]) -> BTreeMap<i64, Vec<&ConsentFormEntry>> {
    let mut groups: BTreeMap<i64, Vec<&ConsentFormEntry>> = BTreeMap::new();
    for entry in entries {
        groups.entry(entry.sis_id).or_default().push(entry);
    }
    for attempts in groups.values_mut() {
        attempts.sort_by_key(|e| e.attempt);
    }
    groups
}

/// The highest-numbered attempt of every subject, ordered by subject id.
///
/// On a tie the attempt appearing last in the file wins.
pub fn latest_attempts(entries: &[ConsentFormEntry]) -> Vec<&ConsentFormEntry> {
    group_by_subject(entries)
        .into_values()
        .filter_map(|attempts| attempts.into_iter().max_by_key(|e| e.attempt))
        .collect()
}

/// Headline counts for one consent export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConsentSummary {
    pub rows: usize,
    pub subjects: usize,
    pub consenting_rows: usize,
    /// Subjects whose latest attempt consents.
    pub consenting_subjects: usize,
}

impl ConsentSummary {
    pub fn from_entries(entries: &[ConsentFormEntry]) -> Self {
        let latest = latest_attempts(entries);
        Self {
            rows: entries.len(),
            subjects: latest.len(),
            consenting_rows: entries.iter().filter(|e| e.consented).count(),
            consenting_subjects: latest.iter().filter(|e| e.consented).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(sis_id: i64, attempt: i64, consented: bool) -> ConsentFormEntry {
        ConsentFormEntry {
            sis_id,
            lms_name: format!("Subject {sis_id}"),
            attempt,
            name_response: String::new(),
            consented,
        }
    }

    #[test]
    fn test_group_sorts_attempts() {
        let entries = vec![entry(2, 2, true), entry(1, 1, false), entry(2, 1, false)];
        let groups = group_by_subject(&entries);
        assert_eq!(groups.keys().copied().collect::<Vec<_>>(), [1, 2]);
        let attempts: Vec<i64> = groups[&2].iter().map(|e| e.attempt).collect();
        assert_eq!(attempts, [1, 2]);
    }

    #[test]
    fn test_latest_attempt_wins() {
        let entries = vec![entry(5, 1, true), entry(5, 3, false), entry(5, 2, true)];
        let latest = latest_attempts(&entries);
        assert_eq!(latest.len(), 1);
        assert_eq!(latest[0].attempt, 3);
        assert!(!latest[0].consented);
    }

    #[test]
    fn test_latest_attempt_tie_takes_last_row() {
        let mut second = entry(5, 1, true);
        second.name_response = "second".to_string();
        let entries = vec![entry(5, 1, false), second];
        let latest = latest_attempts(&entries);
        assert_eq!(latest[0].name_response, "second");
    }

    #[test]
    fn test_summary() {
        let entries = vec![
            entry(1, 1, false),
            entry(1, 2, true),
            entry(2, 1, true),
            entry(2, 2, false),
            entry(3, 1, true),
        ];
        let summary = ConsentSummary::from_entries(&entries);
        assert_eq!(
            summary,
            ConsentSummary {
                rows: 5,
                subjects: 3,
                consenting_rows: 3,
                consenting_subjects: 2,
            }
        );
    }

    #[test]
    fn test_empty_summary() {
        assert_eq!(ConsentSummary::from_entries(&[]), ConsentSummary::default());
    }
}
