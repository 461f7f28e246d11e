//! # hostbound-executor
//!
//! Admission control for background work: at most N work items in flight,
//! callers beyond that bound wait their turn.
//!
//! This is deliberately *not* a future/promise pipeline. A submitted work
//! item returns nothing, reports nothing, and cannot be cancelled once
//! admitted; the executor's only promise is that no more than its capacity
//! run concurrently and that a finished item — panicked or not — always
//! hands its slot back. Size the capacity from
//! [`hostbound-probe`](https://docs.rs/hostbound-probe)'s effective CPU
//! rather than host totals when running under a container runtime.

mod bounded;

pub use bounded::BoundedExecutor;
