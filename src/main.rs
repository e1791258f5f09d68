use clap::Parser;
use ollama_relay::{AppState, Config, router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = Config::parse();
    let state = AppState::new(&config.ollama_url);
    let app = router(state, &config.frontend_origin);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind listen address");

    tracing::info!("Ollama relay listening on http://{}", addr);
    tracing::info!("Forwarding to Ollama at {}", config.ollama_url);
    tracing::info!("Allowed frontend origin: {}", config.frontend_origin);
    tracing::info!("Available endpoints:");
    tracing::info!("  - POST /chat    - Streaming chat relay");
    tracing::info!("  - GET  /health  - Health check");
    tracing::info!("  - GET  /models  - List available Ollama models");

    axum::serve(listener, app)
        .await
        .expect("Server failed to start");
}
