//! Service composition.

use gavel_ingest::{CanvasConsentFormReader, ConsentFormReader, CsvRosterReader, RosterReader};

use crate::bootstrap::SharedCanvasClient;
use crate::usecases::{DownloadCourseDataUseCase, LoadConsentFormsUseCase, LoadRosterUseCase};

/// Every use-case a front end can run, built once at startup.
pub struct AppServices {
    pub canvas_client: SharedCanvasClient,
    pub download_course_data: DownloadCourseDataUseCase,
    pub load_roster: LoadRosterUseCase,
    pub load_consent_forms: LoadConsentFormsUseCase,
}

impl AppServices {
    /// Builds the services with the CSV readers.
    pub fn build(canvas_client: SharedCanvasClient) -> Self {
        Self::with_readers(
            canvas_client,
            Box::new(CsvRosterReader::new()),
            Box::new(CanvasConsentFormReader::new()),
        )
    }

    pub fn with_readers(
        canvas_client: SharedCanvasClient,
        roster_reader: Box<dyn RosterReader>,
        consent_reader: Box<dyn ConsentFormReader>,
    ) -> Self {
        tracing::debug!("Initializing application services");
        Self {
            download_course_data: DownloadCourseDataUseCase::new(canvas_client.clone()),
            load_roster: LoadRosterUseCase::new(roster_reader),
            load_consent_forms: LoadConsentFormsUseCase::new(consent_reader),
            canvas_client,
        }
    }
}
