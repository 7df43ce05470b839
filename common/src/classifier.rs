//! Press-duration classification for the hold button.

use crate::types::{PinLevel, ToggleMode};

/// A hold shorter than this selects [`ToggleMode::Off`].
pub const SLOW_HOLD_MS: u32 = 2_000;
/// A hold at least this long selects [`ToggleMode::Fast`].
pub const FAST_HOLD_MS: u32 = 4_000;

/// Accumulates how long the hold button has been high and classifies the
/// total on the release edge.
///
/// Time is counted in samples so the driving task owns all delays; the
/// classifier only needs to know the period it is sampled at. Levels are
/// trusted verbatim, one per period, with no debouncing.
pub struct HoldClassifier {
    sample_period_ms: u32,
    samples_high: u32,
}

impl HoldClassifier {
    pub const fn new(sample_period_ms: u32) -> Self {
        Self {
            sample_period_ms,
            samples_high: 0,
        }
    }

    /// Feed one sample. Returns the selected mode on a release edge,
    /// `None` while the button is held or resting.
    pub fn on_sample(&mut self, level: PinLevel) -> Option<ToggleMode> {
        match level {
            PinLevel::High => {
                self.samples_high += 1;
                None
            }
            PinLevel::Low if self.samples_high > 0 => {
                let held_ms = self.samples_high * self.sample_period_ms;
                self.samples_high = 0;
                Some(Self::classify(held_ms))
            }
            PinLevel::Low => None,
        }
    }

    /// Map a hold duration to a mode. Boundaries belong to the longer
    /// hold: exactly `SLOW_HOLD_MS` is Slow, exactly `FAST_HOLD_MS` is
    /// Fast.
    pub fn classify(held_ms: u32) -> ToggleMode {
        if held_ms >= FAST_HOLD_MS {
            ToggleMode::Fast
        } else if held_ms >= SLOW_HOLD_MS {
            ToggleMode::Slow
        } else {
            ToggleMode::Off
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PinLevel::{High, Low};

    #[test]
    fn classification_is_boundary_exact() {
        assert_eq!(HoldClassifier::classify(1_999), ToggleMode::Off);
        assert_eq!(HoldClassifier::classify(2_000), ToggleMode::Slow);
        assert_eq!(HoldClassifier::classify(3_999), ToggleMode::Slow);
        assert_eq!(HoldClassifier::classify(4_000), ToggleMode::Fast);
    }

    #[test]
    fn nothing_is_reported_while_held_or_resting() {
        let mut classifier = HoldClassifier::new(50);
        assert_eq!(classifier.on_sample(Low), None);
        for _ in 0..100 {
            assert_eq!(classifier.on_sample(High), None);
        }
    }

    #[test]
    fn release_reports_once_and_resets() {
        let mut classifier = HoldClassifier::new(50);
        for _ in 0..100 {
            classifier.on_sample(High);
        }
        assert_eq!(classifier.on_sample(Low), Some(ToggleMode::Fast));
        assert_eq!(classifier.on_sample(Low), None);
    }

    #[test]
    fn a_short_tap_selects_off() {
        let mut classifier = HoldClassifier::new(50);
        for _ in 0..10 {
            classifier.on_sample(High);
        }
        assert_eq!(classifier.on_sample(Low), Some(ToggleMode::Off));
    }

    #[test]
    fn consecutive_presses_classify_independently() {
        let mut classifier = HoldClassifier::new(50);
        for _ in 0..80 {
            classifier.on_sample(High);
        }
        assert_eq!(classifier.on_sample(Low), Some(ToggleMode::Fast));

        for _ in 0..41 {
            classifier.on_sample(High);
        }
        assert_eq!(classifier.on_sample(Low), Some(ToggleMode::Slow));
    }
}
