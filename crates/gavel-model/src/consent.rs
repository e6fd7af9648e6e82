//! Consent questionnaire records.

use serde::{Deserialize, Serialize};

/// One submission attempt of the consent questionnaire.
///
/// A subject may submit several times; each attempt is its own entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentFormEntry {
    pub sis_id: i64,
    /// Display name as recorded by the LMS.
    pub lms_name: String,
    pub attempt: i64,
    /// Name the subject typed into the "leave blank if" question. May be empty.
    pub name_response: String,
    pub consented: bool,
}

impl ConsentFormEntry {
    /// Whether the typed name was left blank.
    pub fn declined_to_sign(&self) -> bool {
        self.name_response.is_empty()
    }
}
