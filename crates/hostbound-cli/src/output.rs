//! Formatted output helpers for CLI commands.

use hostbound_common::types::{CpuLimit, MemoryLimit};

/// Formats a byte count into a human-readable string (e.g., "128.0 MiB").
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn format_bytes(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = KIB * 1024;
    const GIB: u64 = MIB * 1024;

    match bytes {
        b if b >= GIB => format!("{:.1} GiB", b as f64 / GIB as f64),
        b if b >= MIB => format!("{:.1} MiB", b as f64 / MIB as f64),
        b if b >= KIB => format!("{:.1} KiB", b as f64 / KIB as f64),
        b => format!("{b} B"),
    }
}

/// Formats a fractional core count.
#[must_use]
pub fn format_cores(cores: f64) -> String {
    format!("{cores:.2} cores")
}

/// Renders a CPU limit for human output.
#[must_use]
pub fn format_cpu_limit(limit: CpuLimit) -> String {
    match limit {
        CpuLimit::Unlimited => "unlimited".to_owned(),
        CpuLimit::Bounded(cores) => format_cores(cores),
        CpuLimit::Unknown => "unknown".to_owned(),
    }
}

/// Renders a memory limit for human output.
#[must_use]
pub fn format_memory_limit(limit: MemoryLimit) -> String {
    match limit {
        MemoryLimit::Unlimited => "unlimited".to_owned(),
        MemoryLimit::Bounded(bytes) => format_bytes(bytes),
        MemoryLimit::Unknown => "unknown".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_bytes_displays_bytes() {
        assert_eq!(format_bytes(512), "512 B");
    }

    #[test]
    fn format_bytes_displays_kib() {
        assert_eq!(format_bytes(2048), "2.0 KiB");
    }

    #[test]
    fn format_bytes_displays_mib() {
        assert_eq!(format_bytes(134_217_728), "128.0 MiB");
    }

    #[test]
    fn format_bytes_displays_gib() {
        assert_eq!(format_bytes(2_147_483_648), "2.0 GiB");
    }

    #[test]
    fn format_cpu_limit_variants() {
        assert_eq!(format_cpu_limit(CpuLimit::Unlimited), "unlimited");
        assert_eq!(format_cpu_limit(CpuLimit::Bounded(1.5)), "1.50 cores");
        assert_eq!(format_cpu_limit(CpuLimit::Unknown), "unknown");
    }

    #[test]
    fn format_memory_limit_variants() {
        assert_eq!(
            format_memory_limit(MemoryLimit::Bounded(536_870_912)),
            "512.0 MiB"
        );
        assert_eq!(format_memory_limit(MemoryLimit::Unknown), "unknown");
    }
}
