//! Command-line interface for fusion-solver.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **match**: Compute achievable fusions for a set of owned materials
//! - **suggest**: Prefix-based material name suggestions
//! - **materials**: List all distinct materials in a fusion file
//! - **state**: Manage the saved filter/ignore lists
//! - **serve**: Start the interactive web interface
//!
//! ## Usage
//!
//! ```text
//! # What can I make from these two cards?
//! fusion-solver match fusions.txt --have "Dancing Elf" --have "Dark Witch"
//!
//! # Use the saved material list instead of flags
//! fusion-solver state add-filter "Baby Dragon"
//! fusion-solver match fusions.txt
//!
//! # JSON output for scripting
//! fusion-solver match fusions.txt --have "Baby Dragon" --have "Time Wizard" --format json
//!
//! # Start the web UI
//! fusion-solver serve --port 8080 --open
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::state::persist::default_state_dir;

pub mod materials;
pub mod matches;
pub mod state;
pub mod suggest;

#[derive(Parser)]
#[command(name = "fusion-solver")]
#[command(version)]
#[command(about = "Find achievable fusion combinations from a list of owned materials")]
#[command(
    long_about = "fusion-solver works with plain-text fusion lists (one 'material1 + material2 = result' per line).\n\nTell it which materials you own and it derives:\n- The fusion rules you can currently perform (symmetric duplicates collapsed)\n- The distinct results those fusions yield, minus any you chose to ignore\n\nOwned-material and ignored-result lists are saved between runs."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Directory holding the saved filter/ignore lists
    /// (defaults to a per-user data directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub state_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute achievable fusions for a set of owned materials
    Match(matches::MatchArgs),

    /// Suggest material names for a typed prefix
    Suggest(suggest::SuggestArgs),

    /// List all distinct materials in a fusion file
    Materials(materials::MaterialsArgs),

    /// Manage the saved filter/ignore lists
    State(state::StateArgs),

    /// Start the web server
    Serve(ServeArgs),
}

#[derive(clap::Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    pub port: u16,

    /// Address to bind to
    #[arg(short, long, default_value = "127.0.0.1")]
    pub address: String,

    /// Open browser automatically
    #[arg(long)]
    pub open: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// The state directory to use: the explicit flag, or the per-user default.
#[must_use]
pub fn resolve_state_dir(flag: Option<PathBuf>) -> PathBuf {
    flag.unwrap_or_else(default_state_dir)
}
