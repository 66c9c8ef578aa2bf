//! Command-line interface for tictactoe_rpc.

use clap::{Parser, Subcommand};

/// Tic-tac-toe RPC host
#[derive(Parser, Debug)]
#[command(name = "tictactoe_rpc")]
#[command(about = "Server-authoritative tic-tac-toe over host RPCs", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP RPC host
    Serve {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// List the registered RPCs
    Rpcs,
}
