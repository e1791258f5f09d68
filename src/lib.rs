//! HTTP relay between a browser frontend and a local Ollama server.
//!
//! Three endpoints: `POST /chat` forwards a chat request to Ollama and
//! streams the response bytes back as they arrive, `GET /models` lists the
//! models Ollama has pulled, and `GET /health` reports that the relay
//! process itself is alive.

pub mod api;
pub mod config;
pub mod error;

use axum::Router;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};

pub use config::Config;

/// Immutable per-process state, cloned into every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Base URL of the Ollama server, without a trailing slash.
    pub ollama_url: String,
}

impl AppState {
    pub fn new(ollama_url: &str) -> Self {
        Self {
            ollama_url: ollama_url.trim_end_matches('/').to_string(),
        }
    }

    /// Absolute URL of Ollama's chat endpoint.
    pub fn chat_url(&self) -> String {
        format!("{}/api/chat", self.ollama_url)
    }

    /// Absolute URL of Ollama's model tag listing.
    pub fn tags_url(&self) -> String {
        format!("{}/api/tags", self.ollama_url)
    }
}

/// Build the relay router, allowing cross-origin requests from the given
/// frontend origin.
///
/// Methods and headers are mirrored from the request rather than wildcarded
/// because tower-http rejects `*` combined with credentials. An origin that
/// fails to parse as a header value ends up allowing no origin at all.
pub fn router(state: AppState, frontend_origin: &str) -> Router {
    let origins: Vec<HeaderValue> = frontend_origin.parse().ok().into_iter().collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Router::new()
        .route("/chat", post(api::chat::relay_chat))
        .route("/health", get(api::health::health_check))
        .route("/models", get(api::models::list_models))
        .layer(cors)
        .with_state(state)
}
