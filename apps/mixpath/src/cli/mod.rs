//! # mixpath CLI Module
//!
//! This module implements the CLI interface for mixpath.
//!
//! ## Available Commands
//!
//! - `find` - Shortest recipe for a set of desired effects, per base item
//! - `apply` - Replay a reagent sequence on a base item
//! - `effects` - List the known effects
//! - `reagents` - List reagents with their substitution rules
//! - `export` - Write the active catalog as TOML

mod commands;

use clap::{Parser, Subcommand};
use mixpath_core::{MixError, SearchPolicy};
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// mixpath - shortest reagent recipes
///
/// Finds the fewest reagents to mix into a base item so that the result
/// carries every desired effect.
#[derive(Parser, Debug)]
#[command(name = "mixpath")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Show search statistics alongside results
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a catalog TOML file (defaults to the built-in catalog)
    #[arg(long, global = true, env = "MIXPATH_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the shortest recipe for the given effects
    Find {
        /// Desired effects (case-insensitive)
        #[arg(required = true, num_args = 1..)]
        effects: Vec<String>,

        /// Only search from this base item
        #[arg(short, long)]
        base: Option<String>,

        /// Give up on a base item after expanding this many states
        #[arg(long)]
        max_expansions: Option<u64>,
    },

    /// Apply reagents to a base item in order and show each state
    Apply {
        /// Base item to start from
        base: String,

        /// Reagents to mix in, in order
        #[arg(required = true, num_args = 1..)]
        reagents: Vec<String>,
    },

    /// List the effects declared by the catalog
    Effects,

    /// List the reagents declared by the catalog
    Reagents,

    /// Export the active catalog as TOML
    Export {
        /// Output file path
        #[arg(short, long)]
        output: PathBuf,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), MixError> {
    if cli.no_color {
        crate::render::set_color_enabled(false);
    }

    let Some(command) = cli.command else {
        print_usage_hint();
        return Ok(());
    };

    let catalog = load_catalog(cli.catalog.as_deref())?;
    let output = OutputMode {
        json: cli.json_mode,
        verbose: cli.verbose,
    };

    match command {
        Commands::Find {
            effects,
            base,
            max_expansions,
        } => {
            let policy = match max_expansions {
                Some(limit) => SearchPolicy::with_max_expansions(limit),
                None => SearchPolicy::unbounded(),
            };
            cmd_find(&catalog, output, &effects, base.as_deref(), policy)
        }
        Commands::Apply { base, reagents } => cmd_apply(&catalog, output, &base, &reagents),
        Commands::Effects => cmd_effects(&catalog, output),
        Commands::Reagents => cmd_reagents(&catalog, output),
        Commands::Export { output: path } => cmd_export(&catalog, &path),
    }
}

fn print_usage_hint() {
    println!("Usage: mixpath find <EFFECT>...");
    println!("Example: mixpath find Spicy Energizing");
    println!();
    println!("Run `mixpath --help` for all commands.");
}
