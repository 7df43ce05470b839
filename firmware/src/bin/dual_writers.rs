//! pressline - dual-writers task set
//!
//! Two writers share the console through the arbiter: a plain one that
//! bursts ten lines every 100 ms, and a loaded one that bursts ten lines
//! every 500 ms with heavy busy work before each line. The plain writer
//! runs in the high-priority band and simply skips any period in which
//! the loaded writer still holds the console.

#![no_std]
#![no_main]

use defmt::unwrap;
use defmt_rtt as _;
use embassy_executor::Executor;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use embassy_rp::uart::Uart;
use panic_halt as _;
use static_cell::StaticCell;

use pressline_common::arbiter::Arbiter;
use pressline_firmware::ipc::Console;
use pressline_firmware::scenario::Scenario;
use pressline_firmware::serial::{console_config, SerialPort};
use pressline_firmware::{config, producers, supervisor, EXECUTOR_HIGH};

const SCENARIO: Scenario = Scenario::DualWriters;

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

    // High-priority band: the plain writer.
    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let high = EXECUTOR_HIGH.start(interrupt::SWI_IRQ_1);
    unwrap!(high.spawn(producers::burst_writer_task(
        console,
        config::PLAIN_WRITER_TEXT,
        plan.writer_period,
        plan.burst_len,
    )));

    // Thread-mode band: the loaded writer and supervision.
    let low = EXECUTOR_LOW.init(Executor::new());
    low.run(|spawner| {
        unwrap!(spawner.spawn(producers::loaded_writer_task(
            console,
            config::LOADED_WRITER_TEXT,
            plan.loaded_period,
            plan.burst_len,
            plan.load_spin,
        )));
        unwrap!(spawner.spawn(supervisor::heartbeat_task(Output::new(p.PIN_25, Level::Low))));
        unwrap!(spawner.spawn(supervisor::supervisor_task(sup)));
    })
}
