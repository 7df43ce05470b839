//! Shared value types used across the pressline tasks.
//!
//! Everything that crosses a task boundary is either one of these
//! single-word values behind an atomic cell or one of the primitives in
//! [`crate::flags`], [`crate::snapshot`] and [`crate::arbiter`].

use portable_atomic::{AtomicU8, Ordering};

/// Level of a digital input or output pin, sampled fresh on every poll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinLevel {
    Low,
    High,
}

impl PinLevel {
    pub fn is_high(self) -> bool {
        matches!(self, PinLevel::High)
    }
}

impl From<bool> for PinLevel {
    fn from(high: bool) -> Self {
        if high {
            PinLevel::High
        } else {
            PinLevel::Low
        }
    }
}

/// Which of the two report buttons a sampler task watches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonSlot {
    First,
    Second,
}

/// Actuator mode selected by the hold classifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ToggleMode {
    Off = 0,
    Fast = 1,
    Slow = 2,
}

impl ToggleMode {
    fn from_u8(raw: u8) -> Self {
        match raw {
            1 => ToggleMode::Fast,
            2 => ToggleMode::Slow,
            _ => ToggleMode::Off,
        }
    }
}

/// Lock-free cell holding the current [`ToggleMode`].
///
/// Written by the classifier task, re-read by the actuator task once per
/// period. A single-word atomic with relaxed ordering: the value itself is
/// the whole message, and the actuator tolerates reading a mode one period
/// late.
pub struct ModeCell(AtomicU8);

impl ModeCell {
    pub const fn new(initial: ToggleMode) -> Self {
        Self(AtomicU8::new(initial as u8))
    }

    pub fn load(&self) -> ToggleMode {
        ToggleMode::from_u8(self.0.load(Ordering::Relaxed))
    }

    pub fn store(&self, mode: ToggleMode) {
        self.0.store(mode as u8, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pin_level_from_bool() {
        assert_eq!(PinLevel::from(true), PinLevel::High);
        assert_eq!(PinLevel::from(false), PinLevel::Low);
        assert!(PinLevel::High.is_high());
        assert!(!PinLevel::Low.is_high());
    }

    #[test]
    fn mode_cell_round_trips_every_mode() {
        let cell = ModeCell::new(ToggleMode::Off);
        assert_eq!(cell.load(), ToggleMode::Off);

        for mode in [ToggleMode::Fast, ToggleMode::Slow, ToggleMode::Off] {
            cell.store(mode);
            assert_eq!(cell.load(), mode);
        }
    }
}
