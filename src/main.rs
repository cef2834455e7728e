use clap::Parser;
use tracing_subscriber::EnvFilter;

use fusion_solver::cli::{self, resolve_state_dir};
use fusion_solver::web;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("fusion_solver=debug,info")
    } else {
        EnvFilter::new("fusion_solver=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    let state_dir = resolve_state_dir(cli.state_dir);

    match cli.command {
        cli::Commands::Match(args) => {
            cli::matches::run(args, &state_dir, cli.format, cli.verbose)?;
        }
        cli::Commands::Suggest(args) => {
            cli::suggest::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Materials(args) => {
            cli::materials::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::State(args) => {
            cli::state::run(args, &state_dir, cli.format, cli.verbose)?;
        }
        cli::Commands::Serve(args) => {
            web::server::run(&args, state_dir)?;
        }
    }

    Ok(())
}
