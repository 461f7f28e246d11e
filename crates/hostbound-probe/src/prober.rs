//! The prober: one handle over signal detection, cgroup limits, and host
//! totals, resolved into effective budgets.

use std::path::{Path, PathBuf};

use serde::Serialize;

use hostbound_common::constants::DEFAULT_PROBE_ROOT;
use hostbound_common::error::{HostboundError, Result};
use hostbound_common::types::{ContainerSignal, CpuLimit, MemoryLimit};

use crate::{cgroup, host, signal};

/// Probes the operating environment for containerization and resource
/// ceilings.
///
/// All probes are read-only and idempotent; the prober holds no state
/// beyond the filesystem root it reads from, so it is cheap to construct
/// and safe to share.
#[derive(Debug, Clone)]
pub struct Prober {
    root: PathBuf,
}

impl Default for Prober {
    fn default() -> Self {
        Self::new()
    }
}

impl Prober {
    /// Creates a prober reading the real `/proc` and `/sys/fs/cgroup`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_PROBE_ROOT),
        }
    }

    /// Creates a prober reading pseudo-files under an alternate root.
    #[must_use]
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the filesystem root this prober reads from.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the first positive container-detection heuristic, if any.
    #[must_use]
    pub fn detect_signal(&self) -> Option<ContainerSignal> {
        signal::detect(&self.root)
    }

    /// Whether this process is confined by a container runtime.
    ///
    /// Never fails: a heuristic that cannot be evaluated counts as
    /// negative.
    #[must_use]
    pub fn is_containerized(&self) -> bool {
        self.detect_signal().is_some()
    }

    /// CPU share granted by the cgroup, in fractional cores.
    #[must_use]
    pub fn cpu_limit(&self) -> CpuLimit {
        cgroup::cpu_limit(&self.root)
    }

    /// Memory ceiling imposed by the cgroup, in bytes.
    #[must_use]
    pub fn memory_limit(&self) -> MemoryLimit {
        cgroup::memory_limit(&self.root)
    }

    /// Logical cores visible to the process, ignoring any cgroup.
    #[must_use]
    pub fn host_cpu_count(&self) -> f64 {
        host::cpu_count()
    }

    /// Total host memory in bytes.
    ///
    /// # Errors
    ///
    /// Returns an error when the meminfo pseudo-file is unreadable or
    /// lacks a well-formed `MemTotal:` line.
    pub fn host_memory_total(&self) -> Result<u64> {
        host::memory_total(&self.root)
    }

    /// The CPU budget this process should size its concurrency against.
    ///
    /// Containerized with a bounded quota: the quota. Containerized with
    /// an unlimited quota: the host core count, since an unlimited cgroup
    /// still cannot exceed the machine. Otherwise: the host core count.
    ///
    /// # Errors
    ///
    /// Returns [`HostboundError::LimitUnknown`] when containerized but
    /// neither cgroup generation yields a readable CPU limit. Callers must
    /// fall back to their own documented constant rather than guess.
    pub fn effective_cpu(&self) -> Result<f64> {
        if self.is_containerized() {
            return match self.cpu_limit() {
                CpuLimit::Bounded(cores) => Ok(cores),
                CpuLimit::Unlimited => Ok(self.host_cpu_count()),
                CpuLimit::Unknown => Err(HostboundError::LimitUnknown { resource: "cpu" }),
            };
        }
        Ok(self.host_cpu_count())
    }

    /// The memory budget this process should size itself against.
    ///
    /// An unlimited cgroup ceiling is an error, not a substitute for host
    /// memory: the process still competes with everything else on the host
    /// and must not assume infinity is a budget. Callers are expected to
    /// apply their own safety factor on top of whichever bounded value is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns [`HostboundError::UnboundedLimit`] for an unlimited ceiling
    /// under containerization, [`HostboundError::LimitUnknown`] when no
    /// limit is readable, and the [`host_memory_total`](Self::host_memory_total)
    /// errors when not containerized.
    pub fn effective_memory(&self) -> Result<u64> {
        if self.is_containerized() {
            return match self.memory_limit() {
                MemoryLimit::Bounded(bytes) => Ok(bytes),
                MemoryLimit::Unlimited => {
                    Err(HostboundError::UnboundedLimit { resource: "memory" })
                }
                MemoryLimit::Unknown => Err(HostboundError::LimitUnknown { resource: "memory" }),
            };
        }
        self.host_memory_total()
    }

    /// Collects every probe into one serializable snapshot.
    ///
    /// Effective values that error out are reported as `None`; the raw
    /// limits keep their sentinel-preserving form.
    #[must_use]
    pub fn report(&self) -> ProbeReport {
        let signal = self.detect_signal();
        let report = ProbeReport {
            containerized: signal.is_some(),
            signal,
            cpu_limit: self.cpu_limit(),
            memory_limit: self.memory_limit(),
            effective_cpu: self.effective_cpu().ok(),
            effective_memory_bytes: self.effective_memory().ok(),
        };
        tracing::debug!(?report, "environment probed");
        report
    }
}

/// Snapshot of everything the prober can observe.
#[derive(Debug, Clone, Serialize)]
pub struct ProbeReport {
    /// Whether any detection heuristic fired.
    pub containerized: bool,
    /// The heuristic that fired, if any.
    pub signal: Option<ContainerSignal>,
    /// Raw cgroup CPU limit.
    pub cpu_limit: CpuLimit,
    /// Raw cgroup memory limit.
    pub memory_limit: MemoryLimit,
    /// Resolved CPU budget; `None` when it could not be determined.
    pub effective_cpu: Option<f64>,
    /// Resolved memory budget in bytes; `None` when it could not be
    /// determined or the ceiling is unlimited.
    pub effective_memory_bytes: Option<u64>,
}
