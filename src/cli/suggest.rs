use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::core::index::{MaterialIndex, DEFAULT_SUGGESTION_LIMIT, MIN_PREFIX_LEN};
use crate::core::store::RecordStore;
use crate::parsing::fusion::parse_file;

#[derive(Args)]
pub struct SuggestArgs {
    /// Fusion list file
    #[arg(required = true)]
    pub input: PathBuf,

    /// Prefix to complete (at least 3 characters)
    #[arg(required = true)]
    pub prefix: String,

    /// Maximum number of suggestions
    #[arg(short = 'n', long, default_value_t = DEFAULT_SUGGESTION_LIMIT)]
    pub limit: usize,
}

/// Execute the suggest subcommand
///
/// # Errors
///
/// Returns an error if the input file cannot be read.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: SuggestArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let mut store = RecordStore::new();
    store.replace(parse_file(&args.input)?);
    let index = MaterialIndex::build(&store);

    if verbose {
        eprintln!(
            "Indexed {} distinct material(s) from {} record(s)",
            index.materials().len(),
            store.len()
        );
    }

    let suggestions = index.suggest(&args.prefix, args.limit);

    match format {
        OutputFormat::Text => {
            if suggestions.is_empty() {
                if args.prefix.trim().chars().count() < MIN_PREFIX_LEN {
                    println!("Prefix too short; type at least {MIN_PREFIX_LEN} characters.");
                } else {
                    println!("No materials match '{}'.", args.prefix);
                }
            } else {
                for name in &suggestions {
                    println!("{name}");
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&suggestions)?);
        }
    }

    Ok(())
}
