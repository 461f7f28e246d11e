//! CPU bandwidth limit discovery.
//!
//! Cgroup v2 exposes `cpu.max` with two whitespace-separated fields
//! (`quota period`); v1 splits the same numbers across `cpu.cfs_quota_us`
//! and `cpu.cfs_period_us`. Either way the effective share is the quotient,
//! a dimensionless fractional core count.

use std::path::Path;

use hostbound_common::constants::{
    CPU_MAX_V2_PATH, CPU_PERIOD_V1_PATH, CPU_QUOTA_V1_PATH, UNLIMITED_SENTINEL,
};
use hostbound_common::types::CpuLimit;

use super::{read_i64, read_trimmed};

/// Discovers the CPU share granted to this cgroup, v2 first then v1.
///
/// Never fails: an undeterminable limit is [`CpuLimit::Unknown`], never a
/// panic or a zero.
#[must_use]
pub fn cpu_limit(root: &Path) -> CpuLimit {
    if let Some(raw) = read_trimmed(&root.join(CPU_MAX_V2_PATH)) {
        let fields: Vec<&str> = raw.split_whitespace().collect();
        if let [quota, period] = fields[..] {
            return parse_cpu_max(quota, period);
        }
        // Short read: structurally not a cpu.max, so v1 may still apply.
        tracing::debug!(raw, "short cpu.max read, trying cgroup v1");
    }
    cpu_limit_v1(root)
}

/// Parses a structurally valid two-field `cpu.max` read. This read is
/// authoritative: an unparsable value reports `Unknown` without consulting
/// the v1 files.
fn parse_cpu_max(quota: &str, period: &str) -> CpuLimit {
    if quota == UNLIMITED_SENTINEL || quota == "-1" {
        return CpuLimit::Unlimited;
    }
    match (quota.parse::<f64>(), period.parse::<f64>()) {
        (Ok(q), Ok(p)) if p > 0.0 => CpuLimit::Bounded(q / p),
        _ => {
            tracing::debug!(quota, period, "unparsable cpu.max fields");
            CpuLimit::Unknown
        }
    }
}

/// Reads the v1 CFS quota and period pair.
#[allow(clippy::cast_precision_loss)]
fn cpu_limit_v1(root: &Path) -> CpuLimit {
    let quota = read_i64(&root.join(CPU_QUOTA_V1_PATH));
    let period = read_i64(&root.join(CPU_PERIOD_V1_PATH));
    match (quota, period) {
        (Some(-1), Some(_)) => CpuLimit::Unlimited,
        (Some(q), Some(p)) if p > 0 => CpuLimit::Bounded(q as f64 / p as f64),
        _ => {
            tracing::debug!("cgroup v1 cpu files missing, unparsable, or zero period");
            CpuLimit::Unknown
        }
    }
}
