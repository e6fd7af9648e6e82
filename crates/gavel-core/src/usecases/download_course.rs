//! Download a Canvas course and save it as JSON.

use std::fs;
use std::path::{Path, PathBuf};

use gavel_model::CanvasCourseData;

use crate::bootstrap::SharedCanvasClient;
use crate::error::{CoreError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadCourseDataRequest {
    pub course_id: i64,
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadCourseDataResult {
    pub saved_path: PathBuf,
    pub message: String,
}

/// Fetches one course through the configured client and writes
/// `canvas_course_<id>.json` into the requested directory.
#[derive(Clone)]
pub struct DownloadCourseDataUseCase {
    client: SharedCanvasClient,
}

impl DownloadCourseDataUseCase {
    pub fn new(client: SharedCanvasClient) -> Self {
        Self { client }
    }

    pub fn execute(&self, request: &DownloadCourseDataRequest) -> Result<DownloadCourseDataResult> {
        if request.course_id <= 0 {
            return Err(CoreError::InvalidRequest(
                "course_id must be greater than zero".to_string(),
            ));
        }

        let output_dir = &request.output_dir;
        fs::create_dir_all(output_dir).map_err(|e| CoreError::io(output_dir, e))?;

        let span = tracing::info_span!("download_course", course_id = request.course_id);
        let _guard = span.enter();

        let data = self.client.fetch_course_data(request.course_id)?;
        let saved_path = output_dir.join(output_file_name(&data));
        write_course_json(&saved_path, &data)?;

        let message = format!(
            "Canvas course '{}' saved to {}",
            data.course.name,
            saved_path.display()
        );
        tracing::info!(path = %saved_path.display(), modules = data.module_count(), "Saved course data");

        Ok(DownloadCourseDataResult {
            saved_path,
            message,
        })
    }
}

fn output_file_name(data: &CanvasCourseData) -> String {
    format!("canvas_course_{}.json", data.course.id)
}

fn write_course_json(path: &Path, data: &CanvasCourseData) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json).map_err(|e| CoreError::io(path, e))
}
