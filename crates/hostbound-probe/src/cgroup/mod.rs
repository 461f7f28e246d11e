//! Cgroup limit discovery across both API generations.
//!
//! The v2 unified hierarchy is always consulted first. A v2 file that yields
//! a structurally valid read is authoritative even when its value turns out
//! unparsable; only an absent or short v2 read falls through to the v1
//! layout. This avoids version-detection logic while staying correct on
//! mixed deployments where both hierarchies are mounted.

pub mod cpu;
pub mod memory;

use std::path::Path;

use hostbound_common::constants::UNLIMITED_SENTINEL;

pub use cpu::cpu_limit;
pub use memory::memory_limit;

/// Reads a pseudo-file to a trimmed string. `None` covers both a missing
/// file and an unreadable one; callers treat either as "not present".
pub(crate) fn read_trimmed(path: &Path) -> Option<String> {
    std::fs::read_to_string(path)
        .ok()
        .map(|raw| raw.trim().to_owned())
}

/// Reads a single-value cgroup file as a signed integer, mapping the `max`
/// sentinel to `-1` the way cgroup v1 spells "no limit".
pub(crate) fn read_i64(path: &Path) -> Option<i64> {
    let raw = read_trimmed(path)?;
    if raw == UNLIMITED_SENTINEL {
        return Some(-1);
    }
    raw.parse().ok()
}
