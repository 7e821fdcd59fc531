//! stay-engine - HTTP service for the 90/180-day stay rule
//!
//! Loads the rule configuration and serves the evaluation API.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use stay_engine::api::{AppState, create_router};
use stay_engine::config::ConfigLoader;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Rolling-window stay allowance service
#[derive(Parser, Debug)]
#[command(name = "stay-engine", version, about)]
struct Args {
    /// Configuration directory containing rule.yaml and limits.yaml
    #[arg(short, long, default_value = "config/schengen")]
    config: PathBuf,

    /// Address to listen on
    #[arg(short, long, env = "STAY_ENGINE_BIND", default_value = "127.0.0.1:8080")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG overrides the default level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let args = Args::parse();

    let config = match ConfigLoader::load(&args.config) {
        Ok(config) => config,
        Err(err) => {
            error!(config_dir = %args.config.display(), error = %err, "Failed to load configuration");
            return Err(err.into());
        }
    };

    info!(
        config_dir = %args.config.display(),
        rule = %config.rule().code,
        max_trips = config.limits().max_trips,
        "Configuration loaded"
    );

    let router = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    info!(bind = %args.bind, "stay-engine listening");

    axum::serve(listener, router).await?;
    Ok(())
}
