//! Shared coordination primitives between tasks.
//!
//! This module defines the statics the pressline tasks coordinate
//! through. Everything here is safe to touch from both executors, so the
//! raw mutex flavour is critical-section based.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::semaphore::FairSemaphore;

use pressline_common::arbiter::Arbiter;
use pressline_common::flags::EventFlags;
use pressline_common::snapshot::PairSnapshot;
use pressline_common::types::{ModeCell, ToggleMode};

use crate::serial::SerialPort;

/// The serial console behind its exclusive arbiter.
pub type Console = Arbiter<CriticalSectionRawMutex, SerialPort>;

/// Report codes raised by the pair samplers, consumed by the notifier.
pub static PAIR_EVENTS: EventFlags = EventFlags::new();

/// Last-known levels of both report buttons.
pub static PAIR_LEVELS: PairSnapshot = PairSnapshot::new();

/// Mode selected by the hold classifier, read by the actuator.
pub static TOGGLE_MODE: ModeCell = ModeCell::new(ToggleMode::Off);

/// One-permit gate for the gated-blink task set: held while the button is
/// pressed, freezing the blinker. Two waiter slots cover the two tasks
/// that ever touch it.
pub type BlinkPermit = FairSemaphore<CriticalSectionRawMutex, 2>;
pub static BLINK_PERMIT: BlinkPermit = FairSemaphore::new(1);
