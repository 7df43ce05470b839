//! Button report consumer.

use defmt::{debug, info};
use embassy_time::{Duration, Timer};

use pressline_common::report::PairReport;

use crate::ipc::{Console, PAIR_EVENTS};

/// Consumes pair report codes and prints them on the console.
///
/// The flags are cleared on observation whether or not the console is
/// free: a report that cannot be printed this period is dropped, matching
/// the no-buffering contract of the notification path.
#[embassy_executor::task]
pub async fn pair_notify_task(console: &'static Console, period: Duration) {
    info!("pair notifier started");

    loop {
        Timer::after(period).await;

        let observed = PAIR_EVENTS.poll(PairReport::MASK);
        let Some(report) = PairReport::from_flags(observed) else {
            if observed != 0 {
                debug!("notifier: coalesced report bits {:#x}, skipping", observed);
            }
            continue;
        };

        match console.try_claim() {
            Some(mut port) => port.send(report.message()).await,
            None => debug!("notifier: console busy, {} dropped", report),
        }
    }
}
