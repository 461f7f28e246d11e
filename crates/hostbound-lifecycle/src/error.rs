//! Lifecycle failures, always carrying enough identity to log or alert.

use std::fmt;

use thiserror::Error;

use hostbound_common::error::HostboundError;

/// A unit's start or stop failed.
#[derive(Debug, Error)]
pub enum LifecycleError {
    /// Startup aborted at the named unit. Units started before it are
    /// left running; there is no automatic rollback.
    #[error("service '{service}': unit '{unit}' failed to start: {source}")]
    Start {
        /// Owning service name.
        service: String,
        /// Identity of the unit that failed.
        unit: String,
        /// Underlying failure.
        source: HostboundError,
    },

    /// One or more units failed to stop. Every unit's stop was still
    /// invoked; the failures are collected here.
    #[error("service '{service}': {} unit(s) failed to stop", failures.len())]
    Stop {
        /// Owning service name.
        service: String,
        /// Per-unit failures, in teardown order.
        failures: Vec<UnitFailure>,
    },
}

/// A single unit's failure inside a best-effort teardown.
#[derive(Debug)]
pub struct UnitFailure {
    /// Identity of the failed unit.
    pub unit: String,
    /// Underlying failure.
    pub error: HostboundError,
}

impl fmt::Display for UnitFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unit '{}': {}", self.unit, self.error)
    }
}
