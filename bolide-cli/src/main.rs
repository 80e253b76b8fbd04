//! Bolide CLI
//!
//! Command-line entry point for the Bolide meteorite API server.

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use bolide_api::{ApiConfig, ApiServer};
use bolide_core::constants::DEFAULT_PORT;

/// Bolide - REST API over the NASA meteorite landings dataset
#[derive(Parser)]
#[command(name = "bolide")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Preferred port to listen on; probed upward by one while occupied
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Bind address
    #[arg(short, long, default_value = "0.0.0.0")]
    bind: String,

    /// Dataset URL fetched once at startup
    #[arg(long, env = "METEOR_DATASET_URL")]
    dataset_url: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "bolide_api=debug,bolide_dataset=debug,info"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = ApiConfig::from_env();
    if let Some(url) = cli.dataset_url {
        config.dataset_url = url;
    }

    println!("{}", "🚀 Starting Bolide API server...".cyan().bold());
    println!(
        "   {} http://{}:{} (probing upward while occupied)",
        "Preferred:".green(),
        cli.bind,
        cli.port
    );
    println!("\n   Press Ctrl+C to stop.\n");

    ApiServer::new(config)
        .run(&cli.bind, cli.port)
        .await
        .context("API server failed")
}
