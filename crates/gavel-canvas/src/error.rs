//! Error types for Canvas access.

use thiserror::Error;

/// Errors that can occur while talking to Canvas.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CanvasError {
    /// No Canvas instance has been configured.
    #[error("{0}")]
    NotConfigured(String),

    /// The request could not be sent or the connection failed.
    #[error("network error: {0}")]
    Network(String),

    /// The token was rejected.
    #[error("Canvas rejected the access token ({status})")]
    Unauthorized {
        /// HTTP status code; only 401 maps here, other 403s stay [`CanvasError::Api`].
        status: u16,
    },

    /// The requested course does not exist or is not visible to the token.
    #[error("course {0} not found")]
    CourseNotFound(i64),

    /// Canvas throttled the request.
    #[error("Canvas API rate limit exceeded")]
    RateLimited,

    /// Any other non-success response.
    #[error("Canvas API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, as returned.
        message: String,
    },

    /// Pagination links could not be followed to the end.
    #[error("pagination error: {0}")]
    Pagination(String),

    /// Failed to parse the JSON payload.
    #[error("JSON parse error: {0}")]
    JsonParse(String),
}

impl CanvasError {
    /// Returns a user-friendly error message suitable for display.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::NotConfigured(message) => message.as_str(),
            Self::Network(_) => "Could not connect to Canvas. Please check your connection.",
            Self::Unauthorized { .. } => "Canvas rejected the access token. Check CANVAS_TOKEN.",
            Self::CourseNotFound(_) => "That course does not exist or is not visible to you.",
            Self::RateLimited => "Canvas is throttling requests. Please try again later.",
            Self::Api { .. } | Self::Pagination(_) | Self::JsonParse(_) => "Canvas returned an unexpected response.",
        }
    }

    /// Returns whether this error is potentially recoverable with a retry.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) | Self::RateLimited => true,
            Self::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for CanvasError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::JsonParse(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for CanvasError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonParse(err.to_string())
    }
}

/// Result type alias for Canvas operations.
pub type Result<T> = std::result::Result<T, CanvasError>;
