//! Memory ceiling discovery.
//!
//! A single-value file in both generations: `memory.max` under v2,
//! `memory/memory.limit_in_bytes` under v1. The `max` and `-1` sentinels
//! both mean "no ceiling".

use std::path::Path;

use hostbound_common::constants::{MEMORY_LIMIT_V1_PATH, MEMORY_MAX_V2_PATH, UNLIMITED_SENTINEL};
use hostbound_common::types::MemoryLimit;

use super::read_trimmed;

/// Discovers the memory ceiling of this cgroup, v2 first then v1.
#[must_use]
pub fn memory_limit(root: &Path) -> MemoryLimit {
    match read_trimmed(&root.join(MEMORY_MAX_V2_PATH)) {
        // A non-empty v2 read is authoritative, parsable or not.
        Some(raw) if !raw.is_empty() => parse_memory_field(&raw),
        _ => memory_limit_v1(root),
    }
}

fn memory_limit_v1(root: &Path) -> MemoryLimit {
    match read_trimmed(&root.join(MEMORY_LIMIT_V1_PATH)) {
        Some(raw) if !raw.is_empty() => parse_memory_field(&raw),
        _ => {
            tracing::debug!("no readable memory limit in either cgroup generation");
            MemoryLimit::Unknown
        }
    }
}

fn parse_memory_field(raw: &str) -> MemoryLimit {
    if raw == UNLIMITED_SENTINEL || raw == "-1" {
        return MemoryLimit::Unlimited;
    }
    match raw.parse::<u64>() {
        Ok(bytes) => MemoryLimit::Bounded(bytes),
        Err(_) => {
            tracing::debug!(raw, "unparsable memory limit field");
            MemoryLimit::Unknown
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::write_probe_file;

    #[test]
    fn v2_bounded_bytes() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_probe_file(dir.path(), "sys/fs/cgroup/memory.max", "536870912\n");
        assert_eq!(memory_limit(dir.path()), MemoryLimit::Bounded(536_870_912));
    }

    #[test]
    fn v2_max_sentinel_is_unlimited() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_probe_file(dir.path(), "sys/fs/cgroup/memory.max", "max\n");
        assert_eq!(memory_limit(dir.path()), MemoryLimit::Unlimited);
    }

    #[test]
    fn v2_garbage_does_not_fall_through_to_v1() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_probe_file(dir.path(), "sys/fs/cgroup/memory.max", "lots\n");
        write_probe_file(
            dir.path(),
            "sys/fs/cgroup/memory/memory.limit_in_bytes",
            "1048576\n",
        );
        assert_eq!(memory_limit(dir.path()), MemoryLimit::Unknown);
    }

    #[test]
    fn v2_empty_falls_through_to_v1() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_probe_file(dir.path(), "sys/fs/cgroup/memory.max", "\n");
        write_probe_file(
            dir.path(),
            "sys/fs/cgroup/memory/memory.limit_in_bytes",
            "1048576\n",
        );
        assert_eq!(memory_limit(dir.path()), MemoryLimit::Bounded(1_048_576));
    }

    #[test]
    fn v1_negative_sentinel_is_unlimited() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_probe_file(
            dir.path(),
            "sys/fs/cgroup/memory/memory.limit_in_bytes",
            "-1\n",
        );
        assert_eq!(memory_limit(dir.path()), MemoryLimit::Unlimited);
    }

    #[test]
    fn v1_max_sentinel_is_unlimited() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_probe_file(
            dir.path(),
            "sys/fs/cgroup/memory/memory.limit_in_bytes",
            "max\n",
        );
        assert_eq!(memory_limit(dir.path()), MemoryLimit::Unlimited);
    }

    #[test]
    fn both_generations_absent_is_unknown() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert_eq!(memory_limit(dir.path()), MemoryLimit::Unknown);
    }
}
