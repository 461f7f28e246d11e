//! `hbd plan` — Suggest a worker-pool capacity and memory budget.
//!
//! This is the documented fallback story for sizing callers: when a probe
//! errors out, the plan states the fixed default instead of guessing a
//! number from ambiguous kernel files.

use std::path::PathBuf;

use clap::Args;

use hostbound_common::constants::DEFAULT_EXECUTOR_CAPACITY;
use hostbound_probe::Prober;

use crate::output;

/// Arguments for the `plan` command.
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Percentage of the memory budget to hold back as headroom.
    #[arg(long, default_value_t = 20)]
    pub reserve: u8,
}

/// Executes the `plan` command.
///
/// # Errors
///
/// Returns an error if `--reserve` is not below 100.
pub fn execute(root: Option<PathBuf>, args: &PlanArgs) -> anyhow::Result<()> {
    if args.reserve >= 100 {
        anyhow::bail!("--reserve must be below 100, got {}", args.reserve);
    }
    let prober = root.map_or_else(Prober::new, Prober::with_root);

    let capacity = planned_capacity(&prober);
    match prober.effective_cpu() {
        Ok(cores) => {
            println!(
                "Worker capacity:  {capacity} (from {})",
                output::format_cores(cores)
            );
        }
        Err(err) => {
            println!("Worker capacity:  {capacity} (default; probe failed: {err})");
        }
    }

    match prober.effective_memory() {
        Ok(bytes) => {
            let budget = memory_budget(bytes, args.reserve);
            println!(
                "Memory budget:    {} ({}% of {} reserved)",
                output::format_bytes(budget),
                args.reserve,
                output::format_bytes(bytes)
            );
        }
        Err(err) => {
            tracing::warn!(%err, "memory probe failed, no budget suggested");
            println!("Memory budget:    none (probe failed: {err})");
        }
    }
    Ok(())
}

/// The capacity a caller should size its executor with: the floored
/// effective core count, or the fixed default when the probe errors out.
fn planned_capacity(prober: &Prober) -> usize {
    prober.effective_cpu().map_or_else(
        |err| {
            tracing::warn!(%err, "CPU probe failed, using default capacity");
            DEFAULT_EXECUTOR_CAPACITY
        },
        worker_capacity,
    )
}

/// Floors the effective core count into a pool capacity, never below one.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn worker_capacity(cores: f64) -> usize {
    (cores.floor() as usize).max(1)
}

/// Applies the reserve percentage to the memory ceiling exactly, widening
/// so neither the product overflows nor the quotient truncates early.
#[allow(clippy::cast_possible_truncation)]
fn memory_budget(bytes: u64, reserve: u8) -> u64 {
    (u128::from(bytes) * u128::from(100 - reserve) / 100) as u64
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dirs");
        }
        std::fs::write(path, content).expect("write probe file");
    }

    #[test]
    fn worker_capacity_floors_fractional_cores() {
        assert_eq!(worker_capacity(2.5), 2);
        assert_eq!(worker_capacity(4.0), 4);
    }

    #[test]
    fn worker_capacity_never_below_one() {
        assert_eq!(worker_capacity(0.5), 1);
        assert_eq!(worker_capacity(0.0), 1);
    }

    #[test]
    fn planned_capacity_uses_bounded_quota() {
        let dir = tempfile::tempdir().expect("tempdir");
        write(dir.path(), ".dockerenv", "");
        write(dir.path(), "sys/fs/cgroup/cpu.max", "250000 100000\n");
        let prober = Prober::with_root(dir.path());
        assert_eq!(planned_capacity(&prober), 2);
    }

    #[test]
    fn planned_capacity_falls_back_to_default_on_probe_error() {
        // Containerized, but no readable cgroup limit in either generation.
        let dir = tempfile::tempdir().expect("tempdir");
        write(dir.path(), ".dockerenv", "");
        let prober = Prober::with_root(dir.path());
        assert!(prober.effective_cpu().is_err());
        assert_eq!(planned_capacity(&prober), DEFAULT_EXECUTOR_CAPACITY);
    }

    #[test]
    fn memory_budget_applies_reserve() {
        assert_eq!(memory_budget(1000 * 100, 20), 80_000);
        assert_eq!(memory_budget(1000 * 100, 0), 100_000);
    }

    #[test]
    fn memory_budget_is_exact_for_small_ceilings() {
        // 99 * 80 / 100 floors to 79; truncating before the multiply
        // would report zero.
        assert_eq!(memory_budget(99, 20), 79);
    }

    #[test]
    fn memory_budget_does_not_overflow_at_the_top() {
        assert_eq!(memory_budget(u64::MAX, 0), u64::MAX);
    }
}
