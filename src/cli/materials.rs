use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::core::index::MaterialIndex;
use crate::core::store::RecordStore;
use crate::parsing::fusion::parse_file;

#[derive(Args)]
pub struct MaterialsArgs {
    /// Fusion list file
    #[arg(required = true)]
    pub input: PathBuf,

    /// Sort alphabetically instead of first-appearance order
    #[arg(long)]
    pub sorted: bool,
}

/// Execute the materials subcommand
///
/// # Errors
///
/// Returns an error if the input file cannot be read.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: MaterialsArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let mut store = RecordStore::new();
    store.replace(parse_file(&args.input)?);
    let index = MaterialIndex::build(&store);

    if verbose {
        eprintln!(
            "{} record(s), {} distinct material(s)",
            store.len(),
            index.materials().len()
        );
    }

    let mut materials: Vec<String> = index.materials().to_vec();
    if args.sorted {
        materials.sort();
    }

    match format {
        OutputFormat::Text => {
            for name in &materials {
                println!("{name}");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&materials)?);
        }
    }

    Ok(())
}
