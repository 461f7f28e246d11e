//! The lifecycle unit capability set.

use hostbound_common::error::Result;

/// A named component that can be started and stopped by the registry.
///
/// Units are created by their owners at registration time and live for the
/// process lifetime; there is no destroy beyond [`stop`](Self::stop).
pub trait LifecycleUnit {
    /// Stable identity of this unit, used in lifecycle failure reports.
    fn id(&self) -> &str;

    /// Brings the unit up.
    ///
    /// # Errors
    ///
    /// Returns an error when the unit cannot start; see
    /// [`Registry::start_all`](crate::Registry::start_all) for how a
    /// failure propagates.
    fn start(&mut self) -> Result<()>;

    /// Takes the unit down.
    ///
    /// # Errors
    ///
    /// Returns an error when teardown fails; shutdown is best-effort and
    /// the failure is collected, not fatal to other units.
    fn stop(&mut self) -> Result<()>;

    /// Declared ordering weight. Lower weights start earlier.
    ///
    /// Units declaring no weight take the fixed default sentinel
    /// ([`DEFAULT_UNIT_WEIGHT`](hostbound_common::constants::DEFAULT_UNIT_WEIGHT))
    /// and participate in the same ordered insertion as weighted units.
    /// Resolved exactly once, at registration.
    fn weight(&self) -> Option<i64> {
        None
    }
}
