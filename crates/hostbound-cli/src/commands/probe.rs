//! `hbd probe` — Report containerization and resource ceilings.

use std::path::PathBuf;

use clap::Args;

use hostbound_probe::Prober;

use crate::output;

/// Arguments for the `probe` command.
#[derive(Args, Debug)]
pub struct ProbeArgs {
    /// Emit the full report as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Executes the `probe` command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn execute(root: Option<PathBuf>, args: &ProbeArgs) -> anyhow::Result<()> {
    let prober = root.map_or_else(Prober::new, Prober::with_root);
    let report = prober.report();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let verdict = report.signal.map_or_else(
        || "no".to_owned(),
        |signal| format!("yes ({signal})"),
    );
    println!("Containerized:    {verdict}");
    println!(
        "CPU limit:        {}",
        output::format_cpu_limit(report.cpu_limit)
    );
    println!(
        "Memory limit:     {}",
        output::format_memory_limit(report.memory_limit)
    );
    println!(
        "Effective CPU:    {}",
        report
            .effective_cpu
            .map_or_else(|| "undetermined".to_owned(), output::format_cores)
    );
    println!(
        "Effective memory: {}",
        report
            .effective_memory_bytes
            .map_or_else(|| "undetermined".to_owned(), output::format_bytes)
    );
    Ok(())
}
