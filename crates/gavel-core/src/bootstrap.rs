//! Startup wiring.

use std::sync::Arc;

use gavel_canvas::{CanvasClient, HttpCanvasClient, UnconfiguredCanvasClient};

use crate::config::AppConfig;

/// Canvas client shared between the services that need it.
pub type SharedCanvasClient = Arc<dyn CanvasClient + Send + Sync>;

/// Picks the Canvas client for this configuration.
///
/// Falls back to [`UnconfiguredCanvasClient`] when the base URL or token is
/// missing, or when the HTTP client cannot be built.
pub fn build_canvas_client(config: &AppConfig) -> SharedCanvasClient {
    let Some(api_config) = config.canvas.api_config() else {
        tracing::warn!("Canvas configuration missing; Canvas features disabled");
        return Arc::new(UnconfiguredCanvasClient::new());
    };

    match HttpCanvasClient::new(api_config) {
        Ok(client) => {
            tracing::info!(base_url = %client.config().base_url, "Configuring Canvas HTTP client");
            Arc::new(client)
        }
        Err(err) => {
            tracing::warn!("Canvas client unavailable: {err}");
            Arc::new(UnconfiguredCanvasClient::with_message(format!(
                "Canvas client unavailable: {err}"
            )))
        }
    }
}
