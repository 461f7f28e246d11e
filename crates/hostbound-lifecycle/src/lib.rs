//! # hostbound-lifecycle
//!
//! An ordered collection of named, startable/stoppable units keyed by an
//! owning service name, with weight-aware registration order.
//!
//! The registry is a plain value with explicit construction — no implicit
//! process-wide singleton — and is meant to be populated during a
//! single-threaded bootstrap phase before anything starts. It is **not**
//! safe for concurrent registration; wrap it in your own synchronization
//! if your bootstrap is not single-threaded.
//!
//! ```
//! use hostbound_common::error::Result;
//! use hostbound_lifecycle::{LifecycleUnit, Registry};
//!
//! struct Cache;
//!
//! impl LifecycleUnit for Cache {
//!     fn id(&self) -> &str {
//!         "cache"
//!     }
//!     fn start(&mut self) -> Result<()> {
//!         Ok(())
//!     }
//!     fn stop(&mut self) -> Result<()> {
//!         Ok(())
//!     }
//!     fn weight(&self) -> Option<i64> {
//!         Some(10) // start before default-weight units
//!     }
//! }
//!
//! let mut registry = Registry::new();
//! registry.register("api", Box::new(Cache));
//! registry.start_all("api").expect("startup");
//! registry.stop_all("api").expect("shutdown");
//! ```

mod error;
mod registry;
mod unit;

pub use error::{LifecycleError, UnitFailure};
pub use registry::{Registration, Registry};
pub use unit::LifecycleUnit;
