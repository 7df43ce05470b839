//! Multi-bit event notification shared by sampler and consumer tasks.

use portable_atomic::{AtomicU32, Ordering};

/// A set-and-clear event bitmask with overwrite semantics.
///
/// Producers OR bits in with [`set`](EventFlags::set); the single consumer
/// runs [`poll`](EventFlags::poll) once per period, which atomically clears
/// the masked bits and returns the ones that were live. There is no queue:
/// a bit set twice between polls is observed once, and bits raised by
/// different producers coalesce into one observation.
pub struct EventFlags(AtomicU32);

impl EventFlags {
    pub const fn new() -> Self {
        Self(AtomicU32::new(0))
    }

    /// OR `bits` into the current state.
    pub fn set(&self, bits: u32) {
        self.0.fetch_or(bits, Ordering::AcqRel);
    }

    /// Atomically clear every bit in `mask` and return those that were set.
    ///
    /// Never waits; an empty result means nothing happened since the last
    /// poll. Bits outside `mask` are left untouched.
    pub fn poll(&self, mask: u32) -> u32 {
        self.0.fetch_and(!mask, Ordering::AcqRel) & mask
    }

    /// Current state without consuming it.
    pub fn peek(&self) -> u32 {
        self.0.load(Ordering::Acquire)
    }
}
