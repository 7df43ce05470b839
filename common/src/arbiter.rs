//! Exclusive ownership of a shared resource with non-blocking acquisition.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::mutex::{Mutex, MutexGuard};

/// Mutual-exclusion wrapper that owns the resource it guards.
///
/// [`try_claim`](Arbiter::try_claim) never blocks: a producer that loses
/// the race skips its period and tries again on the next one. Dropping the
/// claim releases ownership, so releasing without a prior acquire cannot
/// be expressed. The underlying mutex has no priority inheritance; holders
/// are expected to keep claims short and CPU-bound.
pub struct Arbiter<M: RawMutex, T> {
    inner: Mutex<M, T>,
}

/// Exclusive access to the arbitrated resource; released on drop.
pub type Claim<'a, M, T> = MutexGuard<'a, M, T>;

impl<M: RawMutex, T> Arbiter<M, T> {
    pub const fn new(resource: T) -> Self {
        Self {
            inner: Mutex::new(resource),
        }
    }

    /// Take exclusive ownership if the resource is free right now.
    pub fn try_claim(&self) -> Option<Claim<'_, M, T>> {
        self.inner.try_lock().ok()
    }
}
