//! Command-line entry point for tally

use clap::Parser;
use tally_cli::commands::Commands;
use tally_cli::CliResult;

/// Run order-preserving reductions over files, sequentially or in parallel
#[derive(Debug, Parser)]
#[command(name = "tally", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<()> {
    Cli::parse().command.execute()
}
