//! Hardware configuration for pressline
//! RP2040 (Raspberry Pi Pico) pin map, console settings and task timing

// ===================================================================
// Serial Console (UART0)
// ===================================================================

pub const CONSOLE_BAUD_RATE: u32 = 115_200;
pub const CONSOLE_TX_PIN: u8 = 0; // GPIO 0 = UART0 TX
pub const CONSOLE_RX_PIN: u8 = 1; // GPIO 1 = UART0 RX

/// Longest line `emit` accepts, terminator included.
pub const EMIT_MAX_LEN: usize = 96;

/// Write attempts per line before it is dropped.
pub const EMIT_RETRY_LIMIT: u32 = 8;
pub const EMIT_RETRY_DELAY_MS: u64 = 1;

// ===================================================================
// GPIO Pin Assignments - Raspberry Pi Pico
// ===================================================================

// Buttons (active high, pulled down)
pub const BTN_FIRST_PIN: u8 = 14; // GPIO 14, also the hold/gate button
pub const BTN_SECOND_PIN: u8 = 15; // GPIO 15

// LEDs
pub const MODE_LED_PIN: u8 = 16; // GPIO 16, mode-driven / gated blinker
pub const STATUS_LED_PIN: u8 = 25; // Built-in LED on Pico, heartbeat

// ===================================================================
// Task Timing
// ===================================================================

pub const BUTTON_SAMPLE_MS: u64 = 20; // report-pair and gate sampling
pub const HOLD_SAMPLE_MS: u64 = 50; // hold-classifier sampling
pub const NOTIFY_PERIOD_MS: u64 = 100; // report consumer
pub const PLAIN_WRITER_PERIOD_MS: u64 = 100;
pub const LOADED_WRITER_PERIOD_MS: u64 = 500;
pub const BACKGROUND_WRITER_PERIOD_MS: u64 = 100;
pub const BLINK_PERIOD_MS: u64 = 20; // gated blinker

// Mode-driven actuator delays
pub const MODE_FAST_TOGGLE_MS: u64 = 100;
pub const MODE_SLOW_TOGGLE_MS: u64 = 400;

// Heartbeat pattern
pub const HEARTBEAT_ON_MS: u64 = 100;
pub const HEARTBEAT_OFF_MS: u64 = 900;

// ===================================================================
// Writer Workloads
// ===================================================================

/// Lines written per successful console claim.
pub const WRITER_BURST_LEN: usize = 10;

/// Busy-loop iterations the loaded writer burns before each line.
pub const LOAD_SPIN_ITERS: u32 = 100_000;

pub const PLAIN_WRITER_TEXT: &str = "FIRST TASK IS SENDING A STRING";
pub const LOADED_WRITER_TEXT: &str = "SECOND TASK IS SENDING A STRING";
pub const BACKGROUND_WRITER_TEXT: &str = "A TASK IS SENDING A STRING";
