//! Enrollment roster records.

use serde::{Deserialize, Serialize};

/// One row of an enrollment roster export.
///
/// Every field except `units` is copied verbatim from its source cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterStudent {
    pub id: String,
    pub posting_id: String,
    pub first_name: String,
    pub last_name: String,
    /// Enrollment status, e.g. `ENRL (2025-10-27)`.
    pub status: String,
    pub units: i64,
    pub grade_basis: String,
    pub program_and_plan: String,
    pub academic_level: String,
    /// Short login handle.
    pub asurite: String,
    pub residency: String,
    pub zoom_email: String,
}

impl RosterStudent {
    /// Field names in declaration order, as used for tabular projections.
    pub const FIELD_NAMES: [&'static str; 12] = [
        "id",
        "posting_id",
        "first_name",
        "last_name",
        "status",
        "units",
        "grade_basis",
        "program_and_plan",
        "academic_level",
        "asurite",
        "residency",
        "zoom_email",
    ];

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
