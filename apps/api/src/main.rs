use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use api::advisor::PromptComposer;
use api::config::Config;
use api::llm_client;
use api::routes::build_router;
use api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on a missing provider key)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting FREDRICK API v{}", env!("CARGO_PKG_VERSION"));

    // Completion backend selected by FREDRICK_PROVIDER
    let llm = llm_client::from_config(&config);
    info!("Completion client initialized (model: {})", llm.model());

    // Persona templates rendered once with the organization parameters
    let composer = Arc::new(PromptComposer::new(&config));
    info!(
        "Prompt composer initialized (org: {}, market: {})",
        config.org_name, config.primary_market
    );

    if config.api_key.is_none() {
        tracing::warn!("FREDRICK_API_KEY not set - advisory endpoints will reject all callers");
    }

    let port = config.port;
    let state = AppState {
        llm,
        composer,
        config: Arc::new(config),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{port}").parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
