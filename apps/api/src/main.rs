mod config;
mod email;
mod errors;
mod jobs;
mod llm_client;
mod normalize;
mod pipeline;
mod resume;
mod routes;
mod scrape;
mod state;
mod text;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{GroqClient, GroqSettings};
use crate::routes::build_router;
use crate::scrape::WebPageLoader;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on a missing GROQ_API_KEY)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting coldmail v{}", env!("CARGO_PKG_VERSION"));

    // One model client for the whole process, handed to handlers through AppState
    let llm = GroqClient::new(GroqSettings {
        api_key: config.groq_api_key.clone(),
        api_url: config.groq_api_url.clone(),
        model: config.groq_model.clone(),
        max_retries: config.llm_max_retries,
        timeout: config.llm_timeout,
    })?;
    info!(
        "LLM client initialized (model: {}, max_retries: {}, timeout: {:?})",
        llm.model(),
        config.llm_max_retries,
        config.llm_timeout
    );

    let loader = WebPageLoader::new()?;

    let state = AppState {
        llm: Arc::new(llm),
        loader: Arc::new(loader),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
