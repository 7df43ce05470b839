//! Button sampling tasks.
//!
//! Three flavours of the same periodic shape: poll a pin, interpret the
//! level, publish through a shared primitive. The pair samplers feed the
//! event flags, the hold sampler feeds the mode cell, and the gate
//! sampler holds the blink permit while its button is pressed.

use defmt::{debug, info};
use embassy_rp::gpio::Input;
use embassy_sync::semaphore::Semaphore;
use embassy_time::{Duration, Timer};

use pressline_common::classifier::HoldClassifier;
use pressline_common::edge::EdgeDetector;
use pressline_common::report::PairReport;
use pressline_common::types::{ButtonSlot, PinLevel};

use crate::ipc::{BLINK_PERMIT, PAIR_EVENTS, PAIR_LEVELS, TOGGLE_MODE};

fn read_level(pin: &Input<'static>) -> PinLevel {
    PinLevel::from(pin.is_high())
}

/// Samples one of the two report buttons. On a level change it records
/// the new level in the shared snapshot and raises the report code for
/// the combined pair returned by that update.
#[embassy_executor::task(pool_size = 2)]
pub async fn pair_sampler_task(pin: Input<'static>, slot: ButtonSlot, period: Duration) {
    info!("pair sampler started: {}", slot);

    let mut edges = EdgeDetector::new(PinLevel::Low);
    loop {
        let level = read_level(&pin);
        if edges.update(level) {
            let (first, second) = PAIR_LEVELS.record(slot, level);
            let report = PairReport::from_levels(first, second);
            PAIR_EVENTS.set(report.bit());
            debug!("{}: {} -> {}", slot, level, report);
        }
        Timer::after(period).await;
    }
}

/// Samples the hold button and publishes a new toggle mode on release.
#[embassy_executor::task]
pub async fn hold_sampler_task(pin: Input<'static>, period: Duration) {
    info!("hold sampler started");

    let mut classifier = HoldClassifier::new(period.as_millis() as u32);
    loop {
        Timer::after(period).await;
        if let Some(mode) = classifier.on_sample(read_level(&pin)) {
            TOGGLE_MODE.store(mode);
            info!("hold released, mode -> {}", mode);
        }
    }
}

/// Holds the blink permit while the gate button is pressed.
///
/// The permit is taken at most once per press; the local flag keeps a
/// long hold from acquiring again while already owning it.
#[embassy_executor::task]
pub async fn gate_sampler_task(pin: Input<'static>, period: Duration) {
    info!("gate sampler started");

    let mut holding = false;
    loop {
        match read_level(&pin) {
            PinLevel::High if !holding => {
                if let Some(permit) = BLINK_PERMIT.try_acquire(1) {
                    permit.disarm();
                    holding = true;
                    debug!("gate: permit taken");
                }
            }
            PinLevel::Low if holding => {
                BLINK_PERMIT.release(1);
                holding = false;
                debug!("gate: permit returned");
            }
            _ => {}
        }
        Timer::after(period).await;
    }
}
