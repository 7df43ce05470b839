//! pressline - gated-blink task set
//!
//! The blinker toggles its LED whenever it can take and return the blink
//! permit. The gate task owns the permit for as long as the button is
//! held, so a held button freezes the LED.

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

const SCENARIO: Scenario = Scenario::GatedBlink;

static EXECUTOR_LOW: StaticCell<Executor> = StaticCell::new();

#[cortex_m_rt::entry]
fn main() -> ! {
    let p = embassy_rp::init(Default::default());

    let sup = supervisor::Supervisor::new(SCENARIO);
    sup.print_startup_banner();

    let plan = SCENARIO.plan();

    // High-priority band: the blinker.
    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let high = EXECUTOR_HIGH.start(interrupt::SWI_IRQ_1);
    unwrap!(high.spawn(actuator::gated_blink_task(
        Output::new(p.PIN_16, Level::Low),
        plan.consume_period,
    )));

    // Thread-mode band: the gate button and supervision.
    let low = EXECUTOR_LOW.init(Executor::new());
    low.run(|spawner| {
        unwrap!(spawner.spawn(buttons::gate_sampler_task(
            Input::new(p.PIN_14, Pull::Down),
            plan.sample_period,
        )));
        unwrap!(spawner.spawn(supervisor::heartbeat_task(Output::new(p.PIN_25, Level::Low))));
        unwrap!(spawner.spawn(supervisor::supervisor_task(sup)));
    })
}
