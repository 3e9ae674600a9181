//! # mixpath - Shortest Reagent Recipes
//!
//! The main binary for the mixpath recipe engine.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │            apps/mixpath (THE BINARY)           │
//! │                                               │
//! │  ┌─────────────┐         ┌────────────────┐   │
//! │  │    CLI      │ ──────► │  render        │   │
//! │  │   (clap)    │         │ (colored/json) │   │
//! │  └──────┬──────┘         └────────────────┘   │
//! │         ▼                                     │
//! │  ┌───────────────┐                            │
//! │  │ mixpath-core  │                            │
//! │  │ (THE LOGIC)   │                            │
//! │  └───────────────┘                            │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! mixpath find Spicy Energizing
//! mixpath find Glowing --base "Sour Diesel"
//! mixpath apply "OG Kush" Cuke Chili
//! mixpath --catalog my-catalog.toml reagents
//! ```

use clap::Parser;
use mixpath::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    // MIXPATH_LOG_FORMAT=json enables machine-parseable logs.
    let log_format = std::env::var("MIXPATH_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "mixpath=info".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    let cli = cli::Cli::parse();

    if !cli.quiet && !cli.json_mode && cli.command.is_some() {
        print_banner();
    }

    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the mixpath startup banner.
fn print_banner() {
    println!("mixpath v{} - shortest reagent recipes", env!("CARGO_PKG_VERSION"));
}
