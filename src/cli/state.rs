use std::path::Path;

use clap::{Args, Subcommand};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::state::persist::DirStore;
use crate::state::session::Session;

#[derive(Args)]
pub struct StateArgs {
    #[command(subcommand)]
    pub action: StateAction,
}

#[derive(Subcommand)]
pub enum StateAction {
    /// Show the saved filter and ignore lists
    Show,

    /// Add a material to the saved filter list
    AddFilter {
        /// Material name (normalized to trimmed lowercase)
        term: String,
    },

    /// Remove a material from the saved filter list
    RemoveFilter { term: String },

    /// Clear the saved filter list
    ClearFilters,

    /// Add a result to the saved ignore list
    AddIgnore {
        /// Result name (normalized to trimmed lowercase)
        term: String,
    },

    /// Remove a result from the saved ignore list
    RemoveIgnore { term: String },

    /// Clear the saved ignore list
    ClearIgnores,
}

#[derive(Serialize)]
struct StateReport<'a> {
    filters: &'a [String],
    ignores: &'a [String],
}

/// Execute the state subcommand
///
/// # Errors
///
/// Returns an error if the state directory cannot be read or written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(
    args: StateArgs,
    state_dir: &Path,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let mut session = Session::open(DirStore::open(state_dir)?)?;

    if verbose {
        eprintln!("State directory: {}", state_dir.display());
    }

    match args.action {
        StateAction::Show => {}
        StateAction::AddFilter { ref term } => {
            if !session.add_filter(term)? {
                eprintln!("No change: '{}' is empty or already saved", term.trim());
            }
        }
        StateAction::RemoveFilter { ref term } => {
            if !session.remove_filter(term)? {
                eprintln!("No change: '{}' was not in the filter list", term.trim());
            }
        }
        StateAction::ClearFilters => session.clear_filters()?,
        StateAction::AddIgnore { ref term } => {
            if !session.add_ignore(term)? {
                eprintln!("No change: '{}' is empty or already saved", term.trim());
            }
        }
        StateAction::RemoveIgnore { ref term } => {
            if !session.remove_ignore(term)? {
                eprintln!("No change: '{}' was not in the ignore list", term.trim());
            }
        }
        StateAction::ClearIgnores => session.clear_ignores()?,
    }

    match format {
        OutputFormat::Text => {
            println!("Filters ({}):", session.filters().len());
            for term in session.filters() {
                println!("  {term}");
            }
            println!("Ignores ({}):", session.ignores().len());
            for term in session.ignores() {
                println!("  {term}");
            }
        }
        OutputFormat::Json => {
            let report = StateReport {
                filters: session.filters(),
                ignores: session.ignores(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
