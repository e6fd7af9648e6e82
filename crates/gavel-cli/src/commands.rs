use anyhow::{Context, Result};
use tracing::{info, info_span};

use gavel_core::{
    AppServices, ConsentSummary, CoreError, DownloadCourseDataRequest, DownloadCourseDataResult,
    LoadConsentFormsRequest, LoadRosterRequest, latest_attempts,
};
use gavel_model::{ConsentFormEntry, RecordBatch, RosterStudent};

use crate::cli::{ConsentShowArgs, DownloadArgs, RosterShowArgs};

/// Exit status for a rejected request.
pub const EXIT_INVALID_REQUEST: i32 = 2;

/// Exit status for any other failure.
pub const EXIT_FAILURE: i32 = 1;

pub fn run_download(services: &AppServices, args: &DownloadArgs) -> Result<DownloadCourseDataResult> {
    let request = DownloadCourseDataRequest {
        course_id: args.course_id,
        output_dir: args.output_dir.clone(),
    };
    let result = services
        .download_course_data
        .execute(&request)
        .with_context(|| format!("download Canvas course {}", args.course_id))?;
    Ok(result)
}

pub fn run_roster_show(
    services: &AppServices,
    args: &RosterShowArgs,
) -> Result<RecordBatch<RosterStudent>> {
    let span = info_span!("roster", path = %args.path.display());
    let _guard = span.enter();
    let students = services
        .load_roster
        .execute(&LoadRosterRequest {
            path: args.path.clone(),
        })
        .with_context(|| format!("load roster {}", args.path.display()))?;
    info!(students = students.len(), "Roster loaded");
    Ok(students)
}

/// Loaded consent attempts with their summary.
#[derive(Debug)]
pub struct ConsentReport {
    pub entries: RecordBatch<ConsentFormEntry>,
    pub summary: ConsentSummary,
    pub latest_only: bool,
}

impl ConsentReport {
    /// Rows to display: every attempt, or each subject's latest one.
    pub fn visible(&self) -> Vec<&ConsentFormEntry> {
        if self.latest_only {
            latest_attempts(self.entries.as_slice())
        } else {
            self.entries.iter().collect()
        }
    }
}

pub fn run_consent_show(services: &AppServices, args: &ConsentShowArgs) -> Result<ConsentReport> {
    let span = info_span!("consent", path = %args.path.display());
    let _guard = span.enter();
    let entries = services
        .load_consent_forms
        .execute(&LoadConsentFormsRequest {
            path: args.path.clone(),
        })
        .with_context(|| format!("load consent forms {}", args.path.display()))?;
    let summary = ConsentSummary::from_entries(entries.as_slice());
    info!(
        rows = summary.rows,
        subjects = summary.subjects,
        "Consent forms loaded"
    );
    Ok(ConsentReport {
        entries,
        summary,
        latest_only: args.latest_only,
    })
}

/// Maps a failed command onto the process exit status.
pub fn exit_code(error: &anyhow::Error) -> i32 {
    if error
        .downcast_ref::<CoreError>()
        .is_some_and(CoreError::is_invalid_request)
    {
        EXIT_INVALID_REQUEST
    } else {
        EXIT_FAILURE
    }
}
