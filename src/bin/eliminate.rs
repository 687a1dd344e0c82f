use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use elimination_core::{DivisionReport, Standings};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Report teams that can no longer finish first",
    long_about = None
)]
struct Cli {
    /// Standings file: team count, then name, wins, losses, remaining and
    /// games left against each team, one record per team
    file: PathBuf,

    /// Evaluate teams in parallel
    #[arg(long)]
    parallel: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    let standings = Standings::read_from_file(&cli.file)
        .with_context(|| format!("loading {}", cli.file.display()))?;

    let report = if cli.parallel {
        DivisionReport::evaluate_parallel(&standings)?
    } else {
        DivisionReport::evaluate(&standings)?
    };
    print!("{}", report);

    Ok(())
}
