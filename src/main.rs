use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use yojana_engine::api::{AppState, create_router};
use yojana_engine::config::ConfigLoader;

/// HTTP server for the Indian personal-finance calculators.
#[derive(Parser)]
#[command(name = "yojana-engine", version, about)]
struct Cli {
    /// Directory holding tax.yaml, tds.yaml and schemes.yaml.
    /// Built-in FY 2025-26 tables are used when omitted.
    #[arg(long)]
    config_dir: Option<PathBuf>,

    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:3000")]
    bind: String,
}

/// Initialise the tracing subscriber, honouring `RUST_LOG` and defaulting
/// to `info`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let loader = match &cli.config_dir {
        Some(dir) => ConfigLoader::load(dir)
            .with_context(|| format!("loading configuration from {}", dir.display()))?,
        None => ConfigLoader::builtin(),
    };

    let router = create_router(AppState::new(loader));
    let listener = tokio::net::TcpListener::bind(&cli.bind)
        .await
        .with_context(|| format!("binding {}", cli.bind))?;

    info!(address = %cli.bind, "Calculator API listening");
    axum::serve(listener, router).await?;

    Ok(())
}
