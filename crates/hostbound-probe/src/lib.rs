//! # hostbound-probe
//!
//! Discovers how much CPU and memory this process may actually use.
//!
//! A process running under a container runtime is confined by cgroup limits
//! that can be far below what the host advertises; sizing a worker pool from
//! host totals inside such a process oversubscribes the machine. This crate
//! answers two questions:
//!
//! - **Am I containerized?** Four independent heuristics, because no single
//!   one holds across all runtimes ([`signal`]).
//! - **What may I use?** Cgroup v2 limit files with a v1 fallback, degrading
//!   to host-wide totals outside a container ([`Prober::effective_cpu`],
//!   [`Prober::effective_memory`]).
//!
//! All reads are plain pseudo-file reads with no side effects. A missing
//! file is a normal outcome, never an error; only a limit that cannot be
//! determined at all surfaces as one.

pub mod cgroup;
pub mod host;
pub mod signal;

mod prober;

pub use prober::{ProbeReport, Prober};
