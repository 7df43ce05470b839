//! Application supervision and status reporting.
//!
//! Startup banner, a slow uptime log and the heartbeat LED every task set
//! runs regardless of scenario.

use defmt::info;
use embassy_rp::gpio::Output;
use embassy_time::{Duration, Timer};

use crate::config;
use crate::scenario::Scenario;

/// Application supervisor responsible for startup reporting and the
/// periodic status log.
pub struct Supervisor {
    scenario: Scenario,
    uptime_seconds: u32,
    last_heartbeat: u32,
}

impl Supervisor {
    pub fn new(scenario: Scenario) -> Self {
        Self {
            scenario,
            uptime_seconds: 0,
            last_heartbeat: 0,
        }
    }

    /// Print the startup banner with the scenario and its plan.
    pub fn print_startup_banner(&self) {
        let plan = self.scenario.plan();

        info!("========================================");
        info!("pressline v0.1.0");
        info!("Hardware: RP2040 (Raspberry Pi Pico)");
        info!("Scenario: {}", self.scenario.name());
        info!(
            "Sampling every {} ms, consuming every {} ms",
            plan.sample_period.as_millis(),
            plan.consume_period.as_millis()
        );
        info!(
            "Console: {} baud, {} lines per claim",
            config::CONSOLE_BAUD_RATE,
            plan.burst_len
        );
        info!("========================================");
    }

    /// Run the supervisor loop forever.
    pub async fn run(&mut self) {
        info!("scenario {} running", self.scenario.name());

        loop {
            Timer::after(Duration::from_secs(10)).await;
            self.uptime_seconds += 10;

            // Status line every 60 seconds
            if self.uptime_seconds - self.last_heartbeat >= 60 {
                self.print_status();
                self.last_heartbeat = self.uptime_seconds;
            }
        }
    }

    fn print_status(&self) {
        let minutes = self.uptime_seconds / 60;
        let hours = minutes / 60;
        let remaining_minutes = minutes % 60;

        if hours > 0 {
            info!("Status: Uptime {}h{}m", hours, remaining_minutes);
        } else {
            info!("Status: Uptime {}m", minutes);
        }
    }
}

#[embassy_executor::task]
pub async fn supervisor_task(mut supervisor: Supervisor) {
    supervisor.run().await;
}

/// Status LED heartbeat, spawned in every scenario.
#[embassy_executor::task]
pub async fn heartbeat_task(mut status_led: Output<'static>) {
    info!("heartbeat task started");

    loop {
        status_led.set_high();
        Timer::after(Duration::from_millis(config::HEARTBEAT_ON_MS)).await;
        status_led.set_low();
        Timer::after(Duration::from_millis(config::HEARTBEAT_OFF_MS)).await;
    }
}
