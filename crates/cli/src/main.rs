//! Blogforge CLI — the main entry point.
//!
//! Commands:
//! - `onboard`  — Write a default config file
//! - `gateway`  — Start the HTTP server with the browser form
//! - `generate` — Run the pipeline once over an exported config file
//! - `doctor`   — Diagnose config and provider health

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(
    name = "blogforge",
    about = "Blogforge — assemble reference material into an LLM-written blog post",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default configuration file
    Onboard,

    /// Start the HTTP gateway server
    Gateway {
        /// Override the port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Generate a post from an exported JSON configuration file
    Generate {
        /// Path to a blog configuration exported from the form
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Diagnose config and provider health
    Doctor,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Onboard => commands::onboard::run().await?,
        Commands::Gateway { port } => commands::gateway::run(port).await?,
        Commands::Generate { file } => commands::generate::run(&file).await?,
        Commands::Doctor => commands::doctor::run().await?,
    }

    Ok(())
}
