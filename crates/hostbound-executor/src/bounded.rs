//! The bounded executor and its slot pool.

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use tokio::sync::Semaphore;

use hostbound_common::constants::DEFAULT_EXECUTOR_CAPACITY;

/// Runs fire-and-forget work items with at most `capacity` in flight.
///
/// Cloning is cheap and clones share the same slot pool. Submission order
/// is an eligibility order only: concurrently admitted items may complete
/// in any order.
#[derive(Debug, Clone)]
pub struct BoundedExecutor {
    slots: Arc<Semaphore>,
    capacity: usize,
}

impl BoundedExecutor {
    /// Creates an executor with the given capacity.
    ///
    /// A zero or negative capacity is corrected to the default of
    /// [`DEFAULT_EXECUTOR_CAPACITY`] rather than rejected; the executor
    /// must always be usable.
    #[must_use]
    pub fn new(capacity: i64) -> Self {
        let capacity = usize::try_from(capacity)
            .ok()
            .filter(|&c| c > 0)
            .unwrap_or(DEFAULT_EXECUTOR_CAPACITY);
        Self {
            slots: Arc::new(Semaphore::new(capacity)),
            capacity,
        }
    }

    /// Admits and dispatches one work item.
    ///
    /// Waits for a free slot — the only suspension point in this crate —
    /// then runs the item on a blocking task and returns without waiting
    /// for it to finish. The slot travels with the item and is released
    /// when the item's body finishes, on every exit path: a panicking item
    /// is caught, logged, and still hands its slot back.
    ///
    /// Callers needing a bounded wait must wrap this call in their own
    /// timeout; expiry then means "never admitted", not "cancelled".
    pub async fn submit<F>(&self, work: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let Ok(permit) = Arc::clone(&self.slots).acquire_owned().await else {
            // The pool is never closed, so acquisition cannot fail; fail
            // loudly in debug builds so a future close() cannot silently
            // lose work items.
            debug_assert!(false, "slot pool unexpectedly closed");
            tracing::error!("slot pool closed, dropping work item");
            return;
        };
        let handle = tokio::task::spawn_blocking(move || {
            let _slot = permit;
            if let Err(payload) = catch_unwind(AssertUnwindSafe(work)) {
                tracing::error!(panic = panic_message(&payload), "work item panicked");
            }
        });
        drop(handle);
    }

    /// Number of slots this executor was constructed with.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of slots currently free.
    #[must_use]
    pub fn available_slots(&self) -> usize {
        self.slots.available_permits()
    }
}

/// Best-effort extraction of a panic payload's message.
fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload.downcast_ref::<&str>().copied().map_or_else(
        || {
            payload
                .downcast_ref::<String>()
                .map_or("<non-string panic payload>", String::as_str)
        },
        |s| s,
    )
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use super::*;

    #[test]
    fn zero_capacity_corrected_to_default() {
        let executor = BoundedExecutor::new(0);
        assert_eq!(executor.capacity(), DEFAULT_EXECUTOR_CAPACITY);
        assert_eq!(executor.available_slots(), DEFAULT_EXECUTOR_CAPACITY);
    }

    #[test]
    fn negative_capacity_corrected_to_default() {
        let executor = BoundedExecutor::new(-5);
        assert_eq!(executor.capacity(), DEFAULT_EXECUTOR_CAPACITY);
    }

    #[test]
    fn positive_capacity_kept() {
        let executor = BoundedExecutor::new(3);
        assert_eq!(executor.capacity(), 3);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn admits_at_most_capacity_concurrently() {
        let executor = BoundedExecutor::new(3);
        let in_flight = Arc::new(AtomicUsize::new(0));
        let peak = Arc::new(AtomicUsize::new(0));
        let (done_tx, mut done_rx) = tokio::sync::mpsc::unbounded_channel();

        for _ in 0..10 {
            let in_flight = Arc::clone(&in_flight);
            let peak = Arc::clone(&peak);
            let done_tx = done_tx.clone();
            executor
                .submit(move || {
                    let now = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
                    let _ = peak.fetch_max(now, Ordering::SeqCst);
                    std::thread::sleep(Duration::from_millis(50));
                    let _ = in_flight.fetch_sub(1, Ordering::SeqCst);
                    let _ = done_tx.send(());
                })
                .await;
        }

        for _ in 0..10 {
            tokio::time::timeout(Duration::from_secs(5), done_rx.recv())
                .await
                .expect("work items should finish")
                .expect("channel open");
        }
        assert!(peak.load(Ordering::SeqCst) <= 3, "slot bound exceeded");
        assert_eq!(in_flight.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn submit_blocks_when_all_slots_taken() {
        let executor = BoundedExecutor::new(1);
        let (gate_tx, gate_rx) = std::sync::mpsc::channel::<()>();

        executor
            .submit(move || {
                let _ = gate_rx.recv();
            })
            .await;

        // The single slot is held; a second submission must not be admitted.
        let blocked = tokio::time::timeout(Duration::from_millis(100), executor.submit(|| ()));
        assert!(blocked.await.is_err(), "submit should block at capacity");

        drop(gate_tx);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn submit_returns_before_work_completes() {
        let executor = BoundedExecutor::new(2);
        let (gate_tx, gate_rx) = std::sync::mpsc::channel::<()>();

        executor
            .submit(move || {
                let _ = gate_rx.recv();
            })
            .await;

        // Dispatch has happened but the item is still running.
        assert_eq!(executor.available_slots(), 1);
        drop(gate_tx);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn panicking_work_item_releases_its_slot() {
        let executor = BoundedExecutor::new(1);
        let (done_tx, mut done_rx) = tokio::sync::mpsc::unbounded_channel();

        executor
            .submit(|| panic!("work item exploded"))
            .await;

        // The slot must come back, so this second item gets admitted and runs.
        executor
            .submit(move || {
                let _ = done_tx.send(());
            })
            .await;

        tokio::time::timeout(Duration::from_secs(5), done_rx.recv())
            .await
            .expect("slot should be released after panic")
            .expect("channel open");
    }
}
