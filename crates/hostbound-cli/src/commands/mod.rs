//! CLI command definitions and dispatch.

pub mod plan;
pub mod probe;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// hostbound — runtime resource probing and admission sizing.
#[derive(Parser, Debug)]
#[command(name = "hbd", version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Probe an alternate filesystem root instead of `/`.
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Report containerization and CPU/memory ceilings.
    Probe(probe::ProbeArgs),
    /// Suggest a worker-pool capacity and memory budget.
    Plan(plan::PlanArgs),
}

/// Dispatches the parsed CLI command to its handler.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Probe(args) => probe::execute(cli.root, &args),
        Command::Plan(args) => plan::execute(cli.root, &args),
    }
}
