use std::path::{Path, PathBuf};

use clap::Args;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::matching::engine::{MatchOutcome, Matcher};
use crate::parsing::fusion::parse_file;
use crate::state::persist::DirStore;
use crate::state::session::Session;
use crate::state::sets::TermSet;

#[derive(Args)]
pub struct MatchArgs {
    /// Fusion list file (one 'a + b = c' per line)
    #[arg(required = true)]
    pub input: PathBuf,

    /// A material you own (repeatable). When given, the saved lists are
    /// ignored and only --have/--hide define the query
    #[arg(long = "have", value_name = "MATERIAL")]
    pub have: Vec<String>,

    /// A result to hide from the summary (repeatable). Without --have this
    /// adds to the saved ignore list for this run only
    #[arg(long = "hide", value_name = "RESULT")]
    pub hide: Vec<String>,

    /// Also list fusion rows whose result is hidden
    #[arg(long)]
    pub show_ignored_rows: bool,
}

#[derive(Serialize)]
struct RecordReport<'a> {
    material1: &'a str,
    material2: &'a str,
    result: &'a str,
    ignored: bool,
}

#[derive(Serialize)]
struct MatchReport<'a> {
    file: String,
    filters: &'a [String],
    ignores: &'a [String],
    records: Vec<RecordReport<'a>>,
    results: &'a [String],
}

/// Execute the match subcommand
///
/// # Errors
///
/// Returns an error if the input file or the saved state cannot be read.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(
    args: MatchArgs,
    state_dir: &Path,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let records = parse_file(&args.input)?;

    if verbose {
        eprintln!("Parsed {} fusion record(s) from input", records.len());
    }

    let (filters, ignores) = if args.have.is_empty() {
        let session = Session::open(DirStore::open(state_dir)?)?;
        let mut ignores = TermSet::from_terms(session.ignores());
        for term in &args.hide {
            ignores.add(term);
        }
        if verbose {
            eprintln!(
                "Using saved state: {} filter(s), {} ignore(s)",
                session.filters().len(),
                ignores.len()
            );
        }
        (TermSet::from_terms(session.filters()), ignores)
    } else {
        (
            TermSet::from_terms(&args.have),
            TermSet::from_terms(&args.hide),
        )
    };

    let outcome = Matcher::new(&records).compute(&filters, &ignores);

    match format {
        OutputFormat::Text => {
            print_text(&args, &filters, &outcome);
        }
        OutputFormat::Json => {
            let report = MatchReport {
                file: args.input.display().to_string(),
                filters: filters.as_slice(),
                ignores: ignores.as_slice(),
                records: outcome
                    .records
                    .iter()
                    .zip(&outcome.ignored)
                    .map(|(r, &ignored)| RecordReport {
                        material1: &r.material1,
                        material2: &r.material2,
                        result: &r.result,
                        ignored,
                    })
                    .collect(),
                results: &outcome.results,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

fn print_text(args: &MatchArgs, filters: &TermSet, outcome: &MatchOutcome) {
    if filters.is_empty() {
        println!("No materials given; nothing is achievable.");
        println!("Add some with --have or 'fusion-solver state add-filter'.");
        return;
    }

    let rows = outcome.visible_records(!args.show_ignored_rows);
    println!("Matching fusions ({}):", rows.len());
    for record in rows {
        // Records with an empty field parsed cleanly but look like bad data.
        let flag = if record.has_empty_field() { " (!)" } else { "" };
        println!("  {record}{flag}");
    }

    println!();
    println!("Fusions you can make ({}):", outcome.results.len());
    for result in &outcome.results {
        println!("  {result}");
    }
}
