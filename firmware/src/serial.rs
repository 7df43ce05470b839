//! Serial console output path.
//!
//! Wraps the blocking UART so one `emit` is one write of a complete line;
//! bursts from different claim holders can therefore never interleave
//! mid-line. Failed writes are retried a bounded number of times with a
//! fixed backoff, then the line is dropped with a warning - the console
//! never blocks a producer forever.

use defmt::warn;
use embassy_rp::uart::{self, Blocking, Uart};
use embassy_time::{Duration, Timer};
use heapless::Vec;

use crate::config::{CONSOLE_BAUD_RATE, EMIT_MAX_LEN, EMIT_RETRY_DELAY_MS, EMIT_RETRY_LIMIT};

/// What a single emit attempt can fail with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum ConsoleError {
    /// The UART rejected the write.
    UartWriteError,
    /// The line plus terminator does not fit the emit buffer.
    LineTooLong,
}

/// UART configuration for the console.
pub fn console_config() -> uart::Config {
    let mut config = uart::Config::default();
    config.baudrate = CONSOLE_BAUD_RATE;
    config
}

pub struct SerialPort {
    uart: Uart<'static, Blocking>,
}

impl SerialPort {
    pub fn new(uart: Uart<'static, Blocking>) -> Self {
        Self { uart }
    }

    /// Write `text` plus a line terminator as one UART write.
    pub fn emit(&mut self, text: &str) -> Result<(), ConsoleError> {
        let mut line: Vec<u8, EMIT_MAX_LEN> = Vec::new();
        line.extend_from_slice(text.as_bytes())
            .map_err(|_| ConsoleError::LineTooLong)?;
        line.extend_from_slice(b"\r\n")
            .map_err(|_| ConsoleError::LineTooLong)?;

        self.uart
            .blocking_write(&line)
            .map_err(|_| ConsoleError::UartWriteError)?;
        self.uart
            .blocking_flush()
            .map_err(|_| ConsoleError::UartWriteError)
    }

    /// Emit with bounded retry. The claim stays held across the backoff,
    /// which is accepted: the backoff is short and bounded, and dropping
    /// the claim mid-line would let another producer interleave.
    pub async fn send(&mut self, text: &str) {
        let mut attempts = 0;
        loop {
            match self.emit(text) {
                Ok(()) => return,
                Err(ConsoleError::LineTooLong) => {
                    warn!("console: line too long, dropped");
                    return;
                }
                Err(ConsoleError::UartWriteError) => {
                    attempts += 1;
                    if attempts >= EMIT_RETRY_LIMIT {
                        warn!("console: write failed {} times, line dropped", attempts);
                        return;
                    }
                    Timer::after(Duration::from_millis(EMIT_RETRY_DELAY_MS)).await;
                }
            }
        }
    }
}
