//! Last-known levels of the report button pair, packed into one word.

use portable_atomic::{AtomicU8, Ordering};

use crate::types::{ButtonSlot, PinLevel};

const FIRST_BIT: u8 = 1 << 0;
const SECOND_BIT: u8 = 1 << 1;

/// Shared snapshot of both report-button levels.
///
/// Each sampler records only its own pin, but the update returns the full
/// pair as of that instant. A report computed from the returned pair can
/// therefore never mix a fresh level with one the other sampler has
/// already replaced, even when both samplers fire in the same scheduling
/// window.
pub struct PairSnapshot(AtomicU8);

impl PairSnapshot {
    /// Both buttons start released.
    pub const fn new() -> Self {
        Self(AtomicU8::new(0))
    }

    /// Record `level` for `slot` and return the combined `(first, second)`
    /// pair immediately after the update.
    pub fn record(&self, slot: ButtonSlot, level: PinLevel) -> (PinLevel, PinLevel) {
        let bit = match slot {
            ButtonSlot::First => FIRST_BIT,
            ButtonSlot::Second => SECOND_BIT,
        };
        let before = if level.is_high() {
            self.0.fetch_or(bit, Ordering::AcqRel)
        } else {
            self.0.fetch_and(!bit, Ordering::AcqRel)
        };
        let after = if level.is_high() {
            before | bit
        } else {
            before & !bit
        };
        Self::unpack(after)
    }

    /// Current pair without modifying it.
    pub fn levels(&self) -> (PinLevel, PinLevel) {
        Self::unpack(self.0.load(Ordering::Acquire))
    }

    fn unpack(bits: u8) -> (PinLevel, PinLevel) {
        (
            PinLevel::from(bits & FIRST_BIT != 0),
            PinLevel::from(bits & SECOND_BIT != 0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PinLevel::{High, Low};

    #[test]
    fn starts_with_both_released() {
        let snapshot = PairSnapshot::new();
        assert_eq!(snapshot.levels(), (Low, Low));
    }

    #[test]
    fn record_returns_the_pair_after_the_update() {
        let snapshot = PairSnapshot::new();
        assert_eq!(snapshot.record(ButtonSlot::First, High), (High, Low));
        assert_eq!(snapshot.record(ButtonSlot::Second, High), (High, High));
        assert_eq!(snapshot.record(ButtonSlot::First, Low), (Low, High));
        assert_eq!(snapshot.levels(), (Low, High));
    }

    #[test]
    fn recording_one_slot_never_disturbs_the_other() {
        let snapshot = PairSnapshot::new();
        snapshot.record(ButtonSlot::Second, High);
        for level in [High, Low, High] {
            snapshot.record(ButtonSlot::First, level);
            assert_eq!(snapshot.levels().1, High);
        }
    }

    #[test]
    fn recording_the_same_level_is_idempotent() {
        let snapshot = PairSnapshot::new();
        assert_eq!(snapshot.record(ButtonSlot::First, High), (High, Low));
        assert_eq!(snapshot.record(ButtonSlot::First, High), (High, Low));
    }
}
