//! The registry: per-service ordered unit sequences and their lifecycle
//! drive.

use std::collections::HashMap;

use hostbound_common::constants::DEFAULT_UNIT_WEIGHT;

use crate::error::{LifecycleError, UnitFailure};
use crate::unit::LifecycleUnit;

/// One registered unit together with its resolved ordering weight.
///
/// The weight is read from the unit exactly once, at registration, and
/// recorded here; ordering never re-queries the unit.
pub struct Registration {
    weight: i64,
    unit: Box<dyn LifecycleUnit>,
}

impl Registration {
    /// Identity of the registered unit.
    #[must_use]
    pub fn id(&self) -> &str {
        self.unit.id()
    }

    /// Resolved ordering weight (declared, or the default sentinel).
    #[must_use]
    pub const fn weight(&self) -> i64 {
        self.weight
    }
}

/// Ordered collections of lifecycle units, keyed by owning service name.
///
/// Registration is position-preserving ascending-weight insertion: a new
/// unit lands just before the first existing unit whose weight is strictly
/// greater, so equal weights keep their insertion order. Not safe for
/// concurrent mutation; populate during single-threaded bootstrap.
#[derive(Default)]
pub struct Registry {
    services: HashMap<String, Vec<Registration>>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `unit` into the ordered sequence for `service`, creating
    /// the sequence on first use.
    pub fn register(&mut self, service: impl Into<String>, unit: Box<dyn LifecycleUnit>) {
        let service = service.into();
        let weight = unit.weight().unwrap_or(DEFAULT_UNIT_WEIGHT);
        tracing::debug!(%service, unit = unit.id(), weight, "unit registered");

        let sequence = self.services.entry(service).or_default();
        let position = sequence
            .iter()
            .position(|existing| existing.weight > weight)
            .unwrap_or(sequence.len());
        sequence.insert(position, Registration { weight, unit });
    }

    /// Returns the current sequence for `service`; empty when the name is
    /// unknown. Never fails.
    #[must_use]
    pub fn units(&self, service: &str) -> &[Registration] {
        self.services.get(service).map_or(&[], Vec::as_slice)
    }

    /// Starts every unit of `service` in sequence order.
    ///
    /// Policy: abort on the first failure and report which unit failed.
    /// Units started before the failure are left running; rollback is the
    /// caller's decision (typically a [`stop_all`](Self::stop_all)).
    /// An unknown service is a no-op success.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::Start`] naming the first unit that failed.
    pub fn start_all(&mut self, service: &str) -> Result<(), LifecycleError> {
        let Some(sequence) = self.services.get_mut(service) else {
            return Ok(());
        };
        for registration in sequence.iter_mut() {
            tracing::info!(service, unit = registration.unit.id(), "starting unit");
            if let Err(source) = registration.unit.start() {
                return Err(LifecycleError::Start {
                    service: service.to_owned(),
                    unit: registration.unit.id().to_owned(),
                    source,
                });
            }
        }
        Ok(())
    }

    /// Stops every unit of `service` in reverse of start order.
    ///
    /// Best-effort: every unit's stop is invoked even when earlier ones
    /// fail, and all failures are collected into one error. An unknown
    /// service is a no-op success.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::Stop`] carrying every unit that failed.
    pub fn stop_all(&mut self, service: &str) -> Result<(), LifecycleError> {
        let Some(sequence) = self.services.get_mut(service) else {
            return Ok(());
        };
        let mut failures = Vec::new();
        for registration in sequence.iter_mut().rev() {
            tracing::info!(service, unit = registration.unit.id(), "stopping unit");
            if let Err(error) = registration.unit.stop() {
                failures.push(UnitFailure {
                    unit: registration.unit.id().to_owned(),
                    error,
                });
            }
        }
        if failures.is_empty() {
            Ok(())
        } else {
            Err(LifecycleError::Stop {
                service: service.to_owned(),
                failures,
            })
        }
    }
}
