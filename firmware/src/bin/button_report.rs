//! pressline - button-report task set
//!
//! Two samplers watch one button each; every level change records the new
//! pair of levels and raises the matching report code. The notifier polls
//! the codes and prints the report while holding the console arbiter. A
//! background writer contends for the same console from the low-priority
//! band.

#![no_std]
#![no_main]

use defmt::unwrap;
use defmt_rtt as _;
use embassy_executor::Executor;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use embassy_rp::uart::Uart;
use panic_halt as _;
use static_cell::StaticCell;

use pressline_common::arbiter::Arbiter;
use pressline_common::types::ButtonSlot;
use pressline_firmware::ipc::Console;
use pressline_firmware::scenario::Scenario;
use pressline_firmware::serial::{console_config, SerialPort};
use pressline_firmware::{buttons, config, notifier, producers, supervisor, EXECUTOR_HIGH};

const SCENARIO: Scenario = Scenario::ButtonReport;

static EXECUTOR_LOW: StaticCell<Executor> = StaticCell::new();
static CONSOLE: StaticCell<Console> = StaticCell::new();

#[cortex_m_rt::entry]
fn main() -> ! {
    let p = embassy_rp::init(Default::default());

    let sup = supervisor::Supervisor::new(SCENARIO);
    sup.print_startup_banner();

    let plan = SCENARIO.plan();

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, console_config());
    let console: &'static Console = CONSOLE.init(Arbiter::new(SerialPort::new(uart)));

    // High-priority band: both samplers and the notifier.
    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let high = EXECUTOR_HIGH.start(interrupt::SWI_IRQ_1);
    unwrap!(high.spawn(buttons::pair_sampler_task(
        Input::new(p.PIN_14, Pull::Down),
        ButtonSlot::First,
        plan.sample_period,
    )));
    unwrap!(high.spawn(buttons::pair_sampler_task(
        Input::new(p.PIN_15, Pull::Down),
        ButtonSlot::Second,
        plan.sample_period,
    )));
    unwrap!(high.spawn(notifier::pair_notify_task(console, plan.consume_period)));

    // Thread-mode band: the background writer and supervision.
    let low = EXECUTOR_LOW.init(Executor::new());
    low.run(|spawner| {
        unwrap!(spawner.spawn(producers::burst_writer_task(
            console,
            config::BACKGROUND_WRITER_TEXT,
            plan.writer_period,
            plan.burst_len,
        )));
        unwrap!(spawner.spawn(supervisor::heartbeat_task(Output::new(p.PIN_25, Level::Low))));
        unwrap!(spawner.spawn(supervisor::supervisor_task(sup)));
    })
}
