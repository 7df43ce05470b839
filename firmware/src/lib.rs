//! pressline - periodic-task coordination firmware for RP2040
//!
//! A fixed set of periodic tasks shares a UART console and a couple of
//! buttons through three primitives: an exclusive console arbiter, a
//! lock-free event-flags word carrying button-pair reports, and an atomic
//! toggle-mode cell written by a hold-duration classifier.
//!
//! ## Task sets
//! - hold-toggle: hold a button to pick the LED blink mode
//! - dual-writers: two console writers contending for the arbiter
//! - button-report: two button samplers, a report notifier and a
//!   background writer sharing the console
//! - gated-blink: a held button freezes a blinking LED via a permit
//!
//! ## Architecture
//! - **Two priority bands**: samplers and the notifier run on an
//!   interrupt-mode executor that preempts the thread-mode executor
//!   running writers, actuators and supervision
//! - **Async**: Embassy framework with async/await; every task is a loop
//!   around a periodic timer
//! - **Scenario descriptors**: each binary instantiates one `Scenario`
//!   and reads its plan at startup

#![no_std]

use embassy_executor::InterruptExecutor;
use embassy_rp::interrupt;

// Export all modules for use by scenario-specific binaries
pub mod actuator;
pub mod buttons;
pub mod config;
pub mod ipc;
pub mod notifier;
pub mod producers;
pub mod scenario;
pub mod serial;
pub mod supervisor;

/// High-priority executor shared by all binaries; tasks spawned here
/// preempt the thread-mode executor.
pub static EXECUTOR_HIGH: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EXECUTOR_HIGH.on_interrupt()
}
