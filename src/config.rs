//! Relay configuration from CLI flags, with environment fallbacks.

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "ollama-relay",
    about = "HTTP relay between a browser frontend and a local Ollama server"
)]
pub struct Config {
    /// Port the relay listens on.
    #[arg(long, default_value_t = default_port())]
    pub port: u16,

    /// Base URL of the Ollama server.
    #[arg(long, default_value_t = default_ollama_url())]
    pub ollama_url: String,

    /// Frontend origin allowed to make cross-origin requests.
    #[arg(long, default_value_t = default_frontend_origin())]
    pub frontend_origin: String,
}

fn default_port() -> u16 {
    std::env::var("RELAY_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000)
}

fn default_ollama_url() -> String {
    std::env::var("OLLAMA_URL").unwrap_or_else(|_| "http://localhost:11434".to_string())
}

fn default_frontend_origin() -> String {
    std::env::var("FRONTEND_ORIGIN").unwrap_or_else(|_| "http://localhost:3000".to_string())
}
