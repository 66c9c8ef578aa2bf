//! Tic-tac-toe RPC host binary.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_rpc::{AppState, GameStore, RpcRegistry, ServerConfig, init_module, serve};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { config, host, port } => run_server(config, host, port).await,
        Command::Rpcs => list_rpcs(),
    }
}

/// Run the HTTP RPC host
async fn run_server(
    config_path: Option<std::path::PathBuf>,
    host: Option<String>,
    port: Option<u16>,
) -> Result<()> {
    let mut config = match &config_path {
        Some(path) => ServerConfig::from_file(path)?,
        None => ServerConfig::default(),
    };
    if let Some(host) = host {
        config = config.with_host(host);
    }
    if let Some(port) = port {
        config = config.with_port(port);
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .init();

    info!(?config, "Starting tic-tac-toe RPC host");

    let state = build_state()?;
    let listener = tokio::net::TcpListener::bind((config.host().as_str(), *config.port())).await?;
    serve(listener, state).await?;

    Ok(())
}

#[instrument]
fn build_state() -> Result<AppState> {
    let store = GameStore::new();
    let mut registry = RpcRegistry::new();
    init_module(&mut registry)?;
    Ok(AppState::new(store, registry))
}

/// Print the registered RPC names
fn list_rpcs() -> Result<()> {
    let mut registry = RpcRegistry::new();
    init_module(&mut registry)?;
    for id in registry.ids() {
        println!("{id}");
    }
    Ok(())
}
