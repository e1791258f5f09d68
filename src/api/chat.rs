//! The streaming chat relay.
//!
//! Forwards the request body to Ollama's `/api/chat` and relays the response
//! bytes to the caller as they arrive, without buffering the full response.
//! Failures are reported in-band as a single JSON chunk, since the response
//! headers are already committed once streaming begins.

use std::collections::HashMap;
use std::convert::Infallible;

use async_stream::stream;
use axum::Json;
use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use futures::StreamExt;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::AppState;

fn default_model() -> String {
    "llama3".to_string()
}

fn default_stream() -> bool {
    true
}

/// Chat request as received from the frontend and forwarded to Ollama.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default = "default_model")]
    pub model: String,
    pub messages: Vec<ChatMessage>,
    /// Forwarded verbatim; the relay never branches on it. Ollama decides
    /// whether to answer with one object or a chunked NDJSON stream.
    #[serde(default = "default_stream")]
    pub stream: bool,
    /// Backend options the relay does not recognize pass through untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
    #[serde(flatten)]
    pub extra: HashMap<String, String>,
}

fn error_chunk(message: &str) -> Bytes {
    Bytes::from(json!({ "error": message }).to_string())
}

/// Relay a chat request to Ollama and stream the response bytes back.
///
/// The upstream call has no timeout: inference may take arbitrarily long to
/// produce output. Dropping the returned body (client disconnect) drops the
/// upstream connection with it.
pub async fn relay_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Response {
    let url = state.chat_url();
    debug!("forwarding chat request for model {} to {}", request.model, url);

    let relay = stream! {
        let client = reqwest::Client::new();

        let response = match client.post(&url).json(&request).send().await {
            Ok(r) => r,
            Err(_) => {
                yield Ok::<_, Infallible>(error_chunk(&format!(
                    "An error occurred while requesting {}.",
                    url
                )));
                return;
            }
        };

        if !response.status().is_success() {
            yield Ok(error_chunk("Ollama API error"));
            return;
        }

        let mut upstream = response.bytes_stream();
        while let Some(chunk) = upstream.next().await {
            match chunk {
                Ok(bytes) => yield Ok(bytes),
                Err(_) => {
                    yield Ok(error_chunk(&format!(
                        "An error occurred while requesting {}.",
                        url
                    )));
                    return;
                }
            }
        }
    };

    (
        [(header::CONTENT_TYPE, "application/x-ndjson")],
        Body::from_stream(relay),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::ChatRequest;

    #[test]
    fn model_and_stream_default_when_absent() {
        let request: ChatRequest = serde_json::from_str(
            r#"{"messages": [{"role": "user", "content": "hi"}]}"#,
        )
        .unwrap();

        assert_eq!(request.model, "llama3");
        assert!(request.stream);
        assert_eq!(request.messages.len(), 1);
    }

    #[test]
    fn unknown_fields_pass_through_serialization() {
        let request: ChatRequest = serde_json::from_str(
            r#"{
                "model": "mistral",
                "messages": [{"role": "user", "content": "hi", "name": "alice"}],
                "stream": false,
                "options": {"temperature": 0.2}
            }"#,
        )
        .unwrap();

        let forwarded = serde_json::to_value(&request).unwrap();
        assert_eq!(forwarded["model"], "mistral");
        assert_eq!(forwarded["stream"], false);
        assert_eq!(forwarded["options"]["temperature"], 0.2);
        assert_eq!(forwarded["messages"][0]["name"], "alice");
    }
}
