mod batch;
mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::PlanCommand;

/// Simbatch CLI - batch report planning for simulation runs
#[derive(Debug, Parser)]
#[command(
    name = "simbatch",
    version,
    about = "Resolve batch report requests against a simulation snapshot"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Resolve a batch file into the report instances it will generate
    Plan(PlanCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Plan(cmd) => cmd.execute()?,
    };

    std::process::exit(exit_code);
}
