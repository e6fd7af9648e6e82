//! Canvas clients that never touch the network.

use gavel_model::CanvasCourseData;

use crate::client::CanvasClient;
use crate::error::{CanvasError, Result};

/// Message used when no Canvas instance is configured.
pub const DEFAULT_NOT_CONFIGURED: &str = "Canvas not configured";

/// Client used when Canvas credentials are missing. Every call fails.
#[derive(Debug, Clone)]
pub struct UnconfiguredCanvasClient {
    message: String,
}

impl UnconfiguredCanvasClient {
    /// Creates a client that fails with the default message.
    pub fn new() -> Self {
        Self::with_message(DEFAULT_NOT_CONFIGURED)
    }

    /// Creates a client that fails with `message`.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for UnconfiguredCanvasClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CanvasClient for UnconfiguredCanvasClient {
    fn fetch_course_data(&self, course_id: i64) -> Result<CanvasCourseData> {
        tracing::debug!(course_id, "Canvas fetch refused: client not configured");
        Err(CanvasError::NotConfigured(self.message.clone()))
    }
}

/// Client that serves one fixed course.
#[derive(Debug, Clone)]
pub struct StaticCanvasClient {
    data: CanvasCourseData,
}

impl StaticCanvasClient {
    /// Creates a client serving `data`.
    pub fn new(data: CanvasCourseData) -> Self {
        Self { data }
    }
}

impl CanvasClient for StaticCanvasClient {
    fn fetch_course_data(&self, course_id: i64) -> Result<CanvasCourseData> {
        if course_id != self.data.course.id {
            return Err(CanvasError::CourseNotFound(course_id));
        }
        Ok(self.data.clone())
    }
}
