//! Use-cases driven by the front ends.

mod download_course;
mod load_consent;
mod load_roster;

pub use download_course::{
    DownloadCourseDataRequest, DownloadCourseDataResult, DownloadCourseDataUseCase,
};
pub use load_consent::{
    ConsentSummary, LoadConsentFormsRequest, LoadConsentFormsUseCase, group_by_subject,
    latest_attempts,
};
pub use load_roster::{LoadRosterRequest, LoadRosterUseCase, roster_frame};
