//! Probe paths, detection markers, and workspace-wide defaults.
//!
//! All pseudo-file paths are stored relative to a probe root so that tests
//! can point the prober at a fabricated tree under a tempdir. The production
//! root is `/`.

/// Filesystem root used by the production prober.
pub const DEFAULT_PROBE_ROOT: &str = "/";

/// Marker files whose mere existence classifies the process as containerized.
pub const CONTAINER_MARKER_FILES: &[&str] = &[".dockerenv", "run/.containerenv"];

/// Cgroup membership file of PID 1, relative to the probe root.
pub const PID1_CGROUP_PATH: &str = "proc/1/cgroup";

/// Scheduler info of PID 1, relative to the probe root.
pub const PID1_SCHED_PATH: &str = "proc/1/sched";

/// Mount table of the current process, relative to the probe root.
pub const SELF_MOUNTINFO_PATH: &str = "proc/self/mountinfo";

/// Container runtime names that may appear in a cgroup membership line.
pub const CGROUP_RUNTIME_MARKERS: &[&str] = &["docker", "containerd", "podman", "kubepods"];

/// Cgroup v2 CPU bandwidth file (`quota period`), relative to the probe root.
pub const CPU_MAX_V2_PATH: &str = "sys/fs/cgroup/cpu.max";

/// Cgroup v1 CFS quota file, relative to the probe root.
pub const CPU_QUOTA_V1_PATH: &str = "sys/fs/cgroup/cpu/cpu.cfs_quota_us";

/// Cgroup v1 CFS period file, relative to the probe root.
pub const CPU_PERIOD_V1_PATH: &str = "sys/fs/cgroup/cpu/cpu.cfs_period_us";

/// Cgroup v2 memory ceiling file, relative to the probe root.
pub const MEMORY_MAX_V2_PATH: &str = "sys/fs/cgroup/memory.max";

/// Cgroup v1 memory ceiling file, relative to the probe root.
pub const MEMORY_LIMIT_V1_PATH: &str = "sys/fs/cgroup/memory/memory.limit_in_bytes";

/// Host memory info pseudo-file, relative to the probe root.
pub const MEMINFO_PATH: &str = "proc/meminfo";

/// Field scanned for in [`MEMINFO_PATH`]; value is in kilobytes.
pub const MEMINFO_TOTAL_FIELD: &str = "MemTotal:";

/// Sentinel written by the kernel for an unrestricted cgroup limit.
pub const UNLIMITED_SENTINEL: &str = "max";

/// Executor capacity substituted when a caller passes zero or negative.
pub const DEFAULT_EXECUTOR_CAPACITY: usize = 10;

/// Ordering weight assumed for lifecycle units that declare none.
/// Lower weights start earlier.
pub const DEFAULT_UNIT_WEIGHT: i64 = 100;

/// Application name used in CLI output.
pub const APP_NAME: &str = "hostbound";

/// Binary name for the CLI.
pub const BIN_NAME: &str = "hbd";
