//! LED actuator tasks.

use defmt::info;
use embassy_rp::gpio::Output;
use embassy_sync::semaphore::Semaphore;
use embassy_time::{Duration, Timer};

use pressline_common::types::ToggleMode;

use crate::config::{MODE_FAST_TOGGLE_MS, MODE_SLOW_TOGGLE_MS};
use crate::ipc::{BLINK_PERMIT, TOGGLE_MODE};

/// Drives the mode LED from the shared toggle mode.
///
/// Purely reactive: the mode is re-read every period and only the delay
/// and the pin action depend on it. Off keeps polling at the fast rate so
/// a new mode takes effect promptly.
#[embassy_executor::task]
pub async fn mode_led_task(mut led: Output<'static>) {
    info!("mode LED task started");

    loop {
        match TOGGLE_MODE.load() {
            ToggleMode::Fast => {
                led.toggle();
                Timer::after(Duration::from_millis(MODE_FAST_TOGGLE_MS)).await;
            }
            ToggleMode::Off => {
                led.set_low();
                Timer::after(Duration::from_millis(MODE_FAST_TOGGLE_MS)).await;
            }
            ToggleMode::Slow => {
                led.toggle();
                Timer::after(Duration::from_millis(MODE_SLOW_TOGGLE_MS)).await;
            }
        }
    }
}

/// Toggles the blink LED whenever the permit is free.
///
/// While the gate task owns the permit the claim here fails and the LED
/// freezes in whatever state it last had.
#[embassy_executor::task]
pub async fn gated_blink_task(mut led: Output<'static>, period: Duration) {
    info!("gated blinker started");

    loop {
        if let Some(permit) = BLINK_PERMIT.try_acquire(1) {
            led.toggle();
            drop(permit);
        }
        Timer::after(period).await;
    }
}
