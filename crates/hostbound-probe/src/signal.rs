//! Container detection heuristics.
//!
//! Each heuristic is a side-effect-free read that answers yes or no; read
//! errors fold into "no". They are evaluated in a fixed order and the first
//! positive one wins.

use std::path::Path;

use hostbound_common::constants::{
    CGROUP_RUNTIME_MARKERS, CONTAINER_MARKER_FILES, PID1_CGROUP_PATH, PID1_SCHED_PATH,
    SELF_MOUNTINFO_PATH,
};
use hostbound_common::types::ContainerSignal;

/// Scheduler names PID 1 carries on a bare-metal host.
const HOST_SCHEDULERS: &[&str] = &["systemd", "init"];

/// Evaluates the heuristics in order and returns the first positive one.
#[must_use]
pub fn detect(root: &Path) -> Option<ContainerSignal> {
    if has_marker_file(root) {
        return Some(ContainerSignal::MarkerFile);
    }
    if cgroup_names_runtime(root) {
        return Some(ContainerSignal::CgroupMembership);
    }
    if pid1_scheduler_is_foreign(root) {
        return Some(ContainerSignal::PidOneScheduler);
    }
    if mount_table_has_overlay(root) {
        return Some(ContainerSignal::MountOverlay);
    }
    None
}

/// A runtime marker file such as `/.dockerenv` or `/run/.containerenv`.
fn has_marker_file(root: &Path) -> bool {
    CONTAINER_MARKER_FILES
        .iter()
        .any(|marker| root.join(marker).exists())
}

/// PID 1's cgroup membership lines name a container runtime.
fn cgroup_names_runtime(root: &Path) -> bool {
    let Ok(data) = std::fs::read_to_string(root.join(PID1_CGROUP_PATH)) else {
        return false;
    };
    data.lines()
        .any(|line| CGROUP_RUNTIME_MARKERS.iter().any(|m| line.contains(m)))
}

/// PID 1's scheduler entry names neither `systemd` nor `init`.
fn pid1_scheduler_is_foreign(root: &Path) -> bool {
    let Ok(data) = std::fs::read_to_string(root.join(PID1_SCHED_PATH)) else {
        return false;
    };
    let first_line = data.lines().next().unwrap_or_default();
    !HOST_SCHEDULERS.iter().any(|name| first_line.contains(name))
}

/// The mount table contains an overlay filesystem entry.
fn mount_table_has_overlay(root: &Path) -> bool {
    let Ok(data) = std::fs::read_to_string(root.join(SELF_MOUNTINFO_PATH)) else {
        return false;
    };
    data.lines().any(|line| line.contains("overlay"))
}
