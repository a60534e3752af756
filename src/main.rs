//! HTTP service for the sitter charge engine.
//!
//! Usage: `sitter-engine [CONFIG]`
//!
//! Log filtering follows `RUST_LOG`.

use std::path::PathBuf;

use clap::Parser;
use sitter_engine::api::{AppState, create_router};
use sitter_engine::config::ConfigLoader;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Charge service for overnight babysitting shifts.
#[derive(Parser, Debug)]
#[command(name = "sitter-engine", version, about)]
struct Cli {
    /// Path to the service configuration file (YAML).
    #[arg(env = "SITTER_CONFIG", default_value = "./config/service.yaml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("sitter_engine=info")),
        )
        .init();

    let config = ConfigLoader::load(&cli.config)?;
    let bind_address = config.bind_address().to_string();
    info!(
        config = %cli.config.display(),
        timezone = %config.timezone(),
        "Loaded service configuration"
    );

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!(address = %bind_address, "Charge service listening");

    axum::serve(listener, create_router(AppState::new(config))).await?;

    Ok(())
}
