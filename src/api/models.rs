use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::AppState;
use crate::error::ApiError;

/// Ollama's `GET /api/tags` response, reduced to the fields the relay needs.
#[derive(Debug, Deserialize)]
struct TagsResponse {
    #[serde(default)]
    models: Vec<TagEntry>,
}

#[derive(Debug, Deserialize)]
struct TagEntry {
    model: String,
}

#[derive(Serialize)]
pub struct ModelListResponse {
    pub models: Vec<String>,
}

/// List the model names Ollama has pulled.
pub async fn list_models(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let url = state.tags_url();
    debug!("fetching model list from {}", url);

    let client = reqwest::Client::new();
    let response = client.get(&url).send().await?;

    if !response.status().is_success() {
        return Err(ApiError::Upstream(format!(
            "Ollama API error: {}",
            response.status()
        )));
    }

    let tags: TagsResponse = response
        .json()
        .await
        .map_err(|e| ApiError::Upstream(format!("Failed to parse Ollama response: {}", e)))?;

    let models = tags.models.into_iter().map(|m| m.model).collect();

    Ok((StatusCode::OK, Json(ModelListResponse { models })))
}
