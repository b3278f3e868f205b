//! Maquette playground server - mock LLM generation over JSON/HTTP.
//!
//! Serves the generation endpoint plus the model and template catalogs
//! that the browser client consumes. All responses are fabricated; see
//! the engine docs for the canned-response scheme.

use clap::Parser;
use maquette_server::{ApiState, MockEngine, ServerConfig, create_router};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the playground server.
#[derive(Parser, Debug)]
#[command(name = "maquette-server")]
#[command(about = "Maquette playground server - mock LLM generation")]
#[command(version)]
struct Args {
    /// Path to server configuration file
    #[arg(short, long, default_value = "maquette.toml")]
    config: PathBuf,

    /// Socket address to listen on
    #[arg(long, env = "MAQUETTE_BIND")]
    bind: Option<String>,

    /// RNG seed for reproducible responses
    #[arg(long, env = "MAQUETTE_SEED")]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    info!("Starting Maquette playground server");
    info!(config_file = ?args.config, "Loading configuration");

    let config = ServerConfig::load(&args.config)?;
    let bind = args.bind.unwrap_or_else(|| config.bind().clone());

    let mut engine_config = config.engine_config();
    if let Some(seed) = args.seed {
        engine_config = maquette_server::EngineConfig::builder()
            .delay_min_ms(*engine_config.delay_min_ms())
            .delay_max_ms(*engine_config.delay_max_ms())
            .seed(Some(seed))
            .build()
            .expect("Valid EngineConfig");
    }
    info!(
        delay_min_ms = *engine_config.delay_min_ms(),
        delay_max_ms = *engine_config.delay_max_ms(),
        seeded = engine_config.seed().is_some(),
        "Engine configured"
    );

    let state = ApiState::new(MockEngine::from_config(engine_config));
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&bind).await?;
    info!(address = %bind, "Listening");
    axum::serve(listener, router).await?;

    Ok(())
}
