//! Connection settings for a Canvas instance.

use std::fmt;
use std::time::Duration;

/// Default HTTP request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Base URL and credentials for the Canvas REST API.
#[derive(Clone, PartialEq, Eq)]
pub struct CanvasApiConfig {
    /// Instance root, e.g. `https://canvas.example.edu`.
    pub base_url: String,
    /// Personal access token sent as a bearer token.
    pub token: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl CanvasApiConfig {
    /// Creates a config with the default timeout.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Joins `path` onto the base URL.
    ///
    /// Absolute `http://` or `https://` paths (such as pagination links) are
    /// returned unchanged.
    #[must_use]
    pub fn build_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        let base = self.base_url.trim_end_matches('/');
        let suffix = path.trim_start_matches('/');
        format!("{base}/{suffix}")
    }
}

impl fmt::Debug for CanvasApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CanvasApiConfig")
            .field("base_url", &self.base_url)
            .field("token", &"[REDACTED]")
            .field("timeout", &self.timeout)
            .finish()
    }
}
