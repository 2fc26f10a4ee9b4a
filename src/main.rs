// file: src/main.rs
// version: 1.0.0
// guid: 7db3dca0-65a0-4e23-954c-47086bece26d

//! Weave - Main entry point

use clap::Parser;
use tokio::signal;
use tracing::warn;
use weave::{
    cli::{args::Cli, commands::weave_range_command},
    logging::logger,
    Result,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    logger::init_logger(cli.verbose, cli.quiet)?;

    // Set up signal handling for graceful shutdown
    let shutdown_signal = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
        warn!("Received Ctrl+C, shutting down...");
    };

    // Run command with signal handling
    tokio::select! {
        result = weave_range_command(cli) => result,
        _ = shutdown_signal => {
            warn!("Application interrupted by user");
            std::process::exit(130); // Standard exit code for Ctrl+C
        }
    }
}
