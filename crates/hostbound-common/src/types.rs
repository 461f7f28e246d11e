//! Domain primitive types used across the hostbound workspace.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A discovered resource ceiling.
///
/// `T` is `f64` for CPU (fractional core count, quota divided by period) and
/// `u64` for memory (bytes). The kernel's `max` and `-1` sentinels both map
/// to [`Limit::Unlimited`] regardless of cgroup generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Limit<T> {
    /// The cgroup imposes no ceiling.
    Unlimited,
    /// The cgroup imposes this ceiling.
    Bounded(T),
    /// The limit files were present but unparsable, or absent in both
    /// cgroup generations.
    Unknown,
}

impl<T> Limit<T> {
    /// Returns `true` when the cgroup imposes no ceiling.
    #[must_use]
    pub const fn is_unlimited(&self) -> bool {
        matches!(self, Self::Unlimited)
    }

    /// Returns `true` when the limit could not be determined.
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// Returns the bounded value, if any.
    pub fn bounded(self) -> Option<T> {
        match self {
            Self::Bounded(value) => Some(value),
            Self::Unlimited | Self::Unknown => None,
        }
    }
}

/// Effective CPU share discovered from the cgroup, in fractional cores.
pub type CpuLimit = Limit<f64>;

/// Effective memory ceiling discovered from the cgroup, in bytes.
pub type MemoryLimit = Limit<u64>;

/// The heuristic that classified the process as containerized.
///
/// Heuristics are evaluated in declaration order; the first positive one
/// wins. No single heuristic is reliable across all runtimes (rootless
/// Podman, Kubernetes CRI, plain Docker, namespaced chroots), hence four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContainerSignal {
    /// A runtime marker file such as `/.dockerenv` exists.
    MarkerFile,
    /// PID 1's cgroup membership names a container runtime.
    CgroupMembership,
    /// PID 1's scheduler entry is neither `systemd` nor `init`.
    PidOneScheduler,
    /// The mount table contains an overlay filesystem.
    MountOverlay,
}

impl fmt::Display for ContainerSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::MarkerFile => "marker file",
            Self::CgroupMembership => "cgroup membership",
            Self::PidOneScheduler => "pid-1 scheduler",
            Self::MountOverlay => "mount overlay",
        };
        write!(f, "{name}")
    }
}
