//! Runtime configuration read from the environment.

use std::collections::HashMap;
use std::fmt;

use gavel_canvas::CanvasApiConfig;

/// Environment variable holding the Canvas instance root URL.
pub const CANVAS_BASE_URL_ENV_VAR: &str = "CANVAS_BASE_URL";

/// Environment variable holding the Canvas access token.
pub const CANVAS_TOKEN_ENV_VAR: &str = "CANVAS_TOKEN";

/// Environment variable naming the deployment environment.
pub const ENVIRONMENT_ENV_VAR: &str = "GAVEL_ENV";

pub const DEFAULT_ENVIRONMENT: &str = "DEV";

/// Canvas connection settings. Either value may be absent.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CanvasConfig {
    pub base_url: Option<String>,
    pub token: Option<String>,
}

impl CanvasConfig {
    pub fn is_configured(&self) -> bool {
        self.base_url.is_some() && self.token.is_some()
    }

    /// API settings for the HTTP client, when both values are present.
    pub fn api_config(&self) -> Option<CanvasApiConfig> {
        match (&self.base_url, &self.token) {
            (Some(base_url), Some(token)) => Some(CanvasApiConfig::new(base_url, token)),
            _ => None,
        }
    }
}

impl fmt::Debug for CanvasConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CanvasConfig")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub environment: String,
    pub version: String,
    pub canvas: CanvasConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: DEFAULT_ENVIRONMENT.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            canvas: CanvasConfig::default(),
        }
    }
}

impl AppConfig {
    /// Reads the process environment, after loading a `.env` file if one exists.
    ///
    /// Variables already set in the process take precedence over the file.
    pub fn from_env() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env file"),
            Err(err) if err.not_found() => {}
            Err(err) => tracing::warn!("Ignoring unreadable .env file: {err}"),
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an explicit variable map.
    pub fn from_map(vars: &HashMap<String, String>) -> Self {
        Self::from_lookup(|key| vars.get(key).cloned())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            environment: read(ENVIRONMENT_ENV_VAR)
                .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
            canvas: CanvasConfig {
                base_url: read(CANVAS_BASE_URL_ENV_VAR),
                token: read(CANVAS_TOKEN_ENV_VAR),
            },
            ..Self::default()
        }
    }
}
