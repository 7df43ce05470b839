//! Scenario descriptors for the four task-set variants.
//!
//! Each binary instantiates exactly one [`Scenario`] at startup and reads
//! its [`ScenarioPlan`]; the plan is plain data, so nothing about the task
//! sets is selected through conditional compilation.

use embassy_time::Duration;

use crate::config;

/// Task-set variant a binary runs.
#[derive(Debug, Clone, Copy, PartialEq, defmt::Format)]
pub enum Scenario {
    /// Hold classifier driving the mode LED.
    HoldToggle,
    /// Plain and CPU-loaded writers contending for the console.
    DualWriters,
    /// Button-pair samplers, report notifier and a background writer.
    ButtonReport,
    /// Button-held permit freezing a blinking LED.
    GatedBlink,
}

/// Timing and workload of one scenario's task set, read once at startup.
#[derive(Clone, Copy)]
pub struct ScenarioPlan {
    /// Period of the input sampler tasks.
    pub sample_period: Duration,
    /// Period of the consumer side (notifier, actuator base rate or
    /// blinker).
    pub consume_period: Duration,
    /// Period of the plain or background writer.
    pub writer_period: Duration,
    /// Period of the CPU-loaded writer.
    pub loaded_period: Duration,
    /// Console lines per successful claim.
    pub burst_len: usize,
    /// Busy-loop iterations before each loaded line.
    pub load_spin: u32,
}

impl Scenario {
    pub fn name(&self) -> &'static str {
        match self {
            Scenario::HoldToggle => "hold-toggle",
            Scenario::DualWriters => "dual-writers",
            Scenario::ButtonReport => "button-report",
            Scenario::GatedBlink => "gated-blink",
        }
    }

    pub fn plan(&self) -> ScenarioPlan {
        match self {
            Scenario::HoldToggle => ScenarioPlan {
                sample_period: Duration::from_millis(config::HOLD_SAMPLE_MS),
                consume_period: Duration::from_millis(config::MODE_FAST_TOGGLE_MS),
                writer_period: Duration::from_millis(config::PLAIN_WRITER_PERIOD_MS),
                loaded_period: Duration::from_millis(config::LOADED_WRITER_PERIOD_MS),
                burst_len: 0,
                load_spin: 0,
            },
            Scenario::DualWriters => ScenarioPlan {
                sample_period: Duration::from_millis(config::BUTTON_SAMPLE_MS),
                consume_period: Duration::from_millis(config::NOTIFY_PERIOD_MS),
                writer_period: Duration::from_millis(config::PLAIN_WRITER_PERIOD_MS),
                loaded_period: Duration::from_millis(config::LOADED_WRITER_PERIOD_MS),
                burst_len: config::WRITER_BURST_LEN,
                load_spin: config::LOAD_SPIN_ITERS,
            },
            Scenario::ButtonReport => ScenarioPlan {
                sample_period: Duration::from_millis(config::BUTTON_SAMPLE_MS),
                consume_period: Duration::from_millis(config::NOTIFY_PERIOD_MS),
                writer_period: Duration::from_millis(config::BACKGROUND_WRITER_PERIOD_MS),
                loaded_period: Duration::from_millis(config::LOADED_WRITER_PERIOD_MS),
                burst_len: 1,
                load_spin: 0,
            },
            Scenario::GatedBlink => ScenarioPlan {
                sample_period: Duration::from_millis(config::BUTTON_SAMPLE_MS),
                consume_period: Duration::from_millis(config::BLINK_PERIOD_MS),
                writer_period: Duration::from_millis(config::PLAIN_WRITER_PERIOD_MS),
                loaded_period: Duration::from_millis(config::LOADED_WRITER_PERIOD_MS),
                burst_len: 0,
                load_spin: 0,
            },
        }
    }
}
