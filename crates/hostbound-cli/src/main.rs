//! # hbd — hostbound CLI
//!
//! Inspects the resource ceilings this process actually runs under and
//! turns them into pool-sizing suggestions.

mod commands;
mod output;

use clap::Parser;

use crate::commands::Cli;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    commands::execute(cli)
}
