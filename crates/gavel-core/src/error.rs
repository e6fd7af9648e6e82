//! Error types for the application layer.

use std::path::PathBuf;

use gavel_canvas::CanvasError;
use gavel_ingest::IngestError;
use thiserror::Error;

/// Errors raised by GAVEL use-cases.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The request was rejected before any work was done.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Canvas(#[from] CanvasError),

    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to build table: {0}")]
    Polars(#[from] polars::prelude::PolarsError),
}

impl CoreError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True for caller mistakes, as opposed to failures while doing the work.
    pub fn is_invalid_request(&self) -> bool {
        matches!(self, Self::InvalidRequest(_))
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_errors_pass_through() {
        let err: CoreError = CanvasError::NotConfigured("Canvas not configured".to_string()).into();
        assert_eq!(err.to_string(), "Canvas not configured");
        assert!(!err.is_invalid_request());
    }

    #[test]
    fn test_invalid_request() {
        let err = CoreError::InvalidRequest("course_id must be greater than zero".to_string());
        assert!(err.is_invalid_request());
        assert_eq!(
            err.to_string(),
            "invalid request: course_id must be greater than zero"
        );
    }
}
