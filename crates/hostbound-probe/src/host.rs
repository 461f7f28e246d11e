//! Host-wide totals, used when the process is not confined by a container.

use std::path::Path;

use hostbound_common::constants::{MEMINFO_PATH, MEMINFO_TOTAL_FIELD};
use hostbound_common::error::{HostboundError, Result};

/// Number of logical cores visible to this process.
///
/// Falls back to `1.0` when the runtime cannot report parallelism.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn cpu_count() -> f64 {
    std::thread::available_parallelism().map_or(1.0, |n| n.get() as f64)
}

/// Total physical memory of the host in bytes, from the `MemTotal:` line
/// of `/proc/meminfo` (reported in kilobytes).
///
/// This is the one probe with no sane fallback, so it is the one probe
/// that returns a hard error.
///
/// # Errors
///
/// Returns [`HostboundError::Io`] when the meminfo pseudo-file cannot be
/// read, and [`HostboundError::HostInfoMissing`] when the `MemTotal:` line
/// is absent or malformed.
pub fn memory_total(root: &Path) -> Result<u64> {
    let path = root.join(MEMINFO_PATH);
    let data = std::fs::read_to_string(&path).map_err(|e| HostboundError::Io {
        path: path.clone(),
        source: e,
    })?;

    for line in data.lines() {
        let Some(rest) = line.strip_prefix(MEMINFO_TOTAL_FIELD) else {
            continue;
        };
        let Some(kilobytes) = rest.split_whitespace().next() else {
            break;
        };
        return match kilobytes.parse::<u64>() {
            Ok(kb) => Ok(kb * 1024),
            Err(_) => Err(HostboundError::HostInfoMissing {
                path,
                field: MEMINFO_TOTAL_FIELD,
            }),
        };
    }
    Err(HostboundError::HostInfoMissing {
        path,
        field: MEMINFO_TOTAL_FIELD,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::write_probe_file;

    #[test]
    fn cpu_count_is_at_least_one() {
        assert!(cpu_count() >= 1.0);
    }

    #[test]
    fn memory_total_converts_kilobytes() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_probe_file(
            dir.path(),
            "proc/meminfo",
            "MemTotal:       16384000 kB\nMemFree:         1234567 kB\n",
        );
        assert_eq!(
            memory_total(dir.path()).expect("memory total"),
            16_384_000 * 1024
        );
    }

    #[test]
    fn memory_total_skips_unrelated_lines() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_probe_file(
            dir.path(),
            "proc/meminfo",
            "MemFree:         1234567 kB\nMemTotal:        2048 kB\n",
        );
        assert_eq!(memory_total(dir.path()).expect("memory total"), 2048 * 1024);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = memory_total(dir.path()).expect_err("should fail");
        assert!(matches!(err, HostboundError::Io { .. }));
    }

    #[test]
    fn missing_total_line_is_host_info_missing() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_probe_file(dir.path(), "proc/meminfo", "MemFree: 1234567 kB\n");
        let err = memory_total(dir.path()).expect_err("should fail");
        assert!(matches!(err, HostboundError::HostInfoMissing { .. }));
    }

    #[test]
    fn malformed_total_line_is_host_info_missing() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_probe_file(dir.path(), "proc/meminfo", "MemTotal: plenty kB\n");
        let err = memory_total(dir.path()).expect_err("should fail");
        assert!(matches!(err, HostboundError::HostInfoMissing { .. }));
    }
}
