//! Console writer tasks.

use cortex_m::asm;
use defmt::{debug, info};
use embassy_time::{Duration, Timer};

use crate::ipc::Console;

/// Periodically claims the console and emits a burst of lines.
///
/// A failed claim skips the whole burst until the next period; there is
/// no queueing between writers.
#[embassy_executor::task]
pub async fn burst_writer_task(
    console: &'static Console,
    text: &'static str,
    period: Duration,
    burst_len: usize,
) {
    info!("burst writer started: \"{}\"", text);

    loop {
        Timer::after(period).await;
        match console.try_claim() {
            Some(mut port) => {
                for _ in 0..burst_len {
                    port.send(text).await;
                }
            }
            None => debug!("burst writer: console busy, skipping period"),
        }
    }
}

/// Burst writer that burns CPU before each line while holding the claim.
///
/// Its hold time is deliberately long; under contention the other writer
/// simply skips periods, which is the accepted cost of non-blocking
/// claims.
#[embassy_executor::task]
pub async fn loaded_writer_task(
    console: &'static Console,
    text: &'static str,
    period: Duration,
    burst_len: usize,
    load_spin: u32,
) {
    info!("loaded writer started: \"{}\"", text);

    loop {
        Timer::after(period).await;
        match console.try_claim() {
            Some(mut port) => {
                for _ in 0..burst_len {
                    for _ in 0..load_spin {
                        asm::nop();
                    }
                    port.send(text).await;
                }
            }
            None => debug!("loaded writer: console busy, skipping period"),
        }
    }
}
