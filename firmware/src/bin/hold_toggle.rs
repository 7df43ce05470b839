//! pressline - hold-toggle task set
//!
//! Hold the button and release to pick the LED mode:
//! - under 2 s: LED off
//! - 2 to 4 s: slow toggle
//! - 4 s and over: fast toggle

#![no_std]
#![no_main]

use defmt::unwrap;
use defmt_rtt as _;
use embassy_executor::Executor;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use panic_halt as _;
use static_cell::StaticCell;

use pressline_firmware::scenario::Scenario;
use pressline_firmware::{actuator, buttons, supervisor, EXECUTOR_HIGH};

const SCENARIO: Scenario = Scenario::HoldToggle;

static EXECUTOR_LOW: StaticCell<Executor> = StaticCell::new();

#[cortex_m_rt::entry]
fn main() -> ! {
    let p = embassy_rp::init(Default::default());

    let sup = supervisor::Supervisor::new(SCENARIO);
    sup.print_startup_banner();

    let plan = SCENARIO.plan();

    // High-priority band: input sampling.
    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let high = EXECUTOR_HIGH.start(interrupt::SWI_IRQ_1);
    unwrap!(high.spawn(buttons::hold_sampler_task(
        Input::new(p.PIN_14, Pull::Down),
        plan.sample_period,
    )));

    // Thread-mode band: actuation and supervision.
    let low = EXECUTOR_LOW.init(Executor::new());
    low.run(|spawner| {
        unwrap!(spawner.spawn(actuator::mode_led_task(Output::new(p.PIN_16, Level::Low))));
        unwrap!(spawner.spawn(supervisor::heartbeat_task(Output::new(p.PIN_25, Level::Low))));
        unwrap!(spawner.spawn(supervisor::supervisor_task(sup)));
    })
}
