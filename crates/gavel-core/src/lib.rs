//! Application layer for GAVEL.
//!
//! Wires the ingest readers and the Canvas client into use-cases, loads the
//! runtime configuration, and assembles everything into [`AppServices`].
//! Front ends build one `AppServices` at startup and pass it by reference.

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod services;
pub mod usecases;

pub use bootstrap::{SharedCanvasClient, build_canvas_client};
pub use config::{AppConfig, CanvasConfig};
pub use error::{CoreError, Result};
pub use services::AppServices;
pub use usecases::{
    ConsentSummary, DownloadCourseDataRequest, DownloadCourseDataResult,
    DownloadCourseDataUseCase, LoadConsentFormsRequest, LoadConsentFormsUseCase,
    LoadRosterRequest, LoadRosterUseCase, group_by_subject, latest_attempts, roster_frame,
};
