//! Host simulations of the three coordination paths: button-pair
//! reporting, hold classification and console arbitration.
//!
//! The firmware tasks are periodic loops around the logic exercised here;
//! these tests drive the same logic one period at a time with a recording
//! console port in place of the UART.

use embassy_sync::blocking_mutex::raw::NoopRawMutex;

use pressline_common::arbiter::{Arbiter, Claim};
use pressline_common::classifier::HoldClassifier;
use pressline_common::edge::EdgeDetector;
use pressline_common::flags::EventFlags;
use pressline_common::report::PairReport;
use pressline_common::snapshot::PairSnapshot;
use pressline_common::types::{ButtonSlot, ModeCell, PinLevel, ToggleMode};

// --- Recording console port ---

struct RecordingPort {
    lines: Vec<String>,
    fail_budget: usize,
}

impl RecordingPort {
    fn new() -> Self {
        Self {
            lines: Vec::new(),
            fail_budget: 0,
        }
    }

    /// A port whose next `times` writes report a busy channel.
    fn failing(times: usize) -> Self {
        Self {
            lines: Vec::new(),
            fail_budget: times,
        }
    }

    fn emit(&mut self, text: &str) -> bool {
        if self.fail_budget > 0 {
            self.fail_budget -= 1;
            return false;
        }
        self.lines.push(text.to_string());
        true
    }
}

type Console = Arbiter<NoopRawMutex, RecordingPort>;

const EMIT_RETRY_LIMIT: usize = 8;

/// The producer-side send loop: bounded retry while holding the claim.
fn send_with_retry(port: &mut RecordingPort, text: &str) -> bool {
    for _ in 0..EMIT_RETRY_LIMIT {
        if port.emit(text) {
            return true;
        }
    }
    false
}

// --- One sampler task, one period at a time ---

struct Sampler {
    slot: ButtonSlot,
    edges: EdgeDetector,
}

impl Sampler {
    fn new(slot: ButtonSlot) -> Self {
        Self {
            slot,
            edges: EdgeDetector::new(PinLevel::Low),
        }
    }

    fn sample(&mut self, level: PinLevel, levels: &PairSnapshot, events: &EventFlags) {
        if self.edges.update(level) {
            let (first, second) = levels.record(self.slot, level);
            events.set(PairReport::from_levels(first, second).bit());
        }
    }
}

/// One notifier period: poll the flags, then claim the console and print.
fn notify_once(console: &Console, events: &EventFlags) {
    let observed = events.poll(PairReport::MASK);
    let Some(report) = PairReport::from_flags(observed) else {
        return;
    };
    if let Some(mut port) = console.try_claim() {
        send_with_retry(&mut port, report.message());
    }
}

// --- Button-pair reporting ---

#[test]
fn pressing_the_first_button_prints_exactly_one_report() {
    let console: Console = Arbiter::new(RecordingPort::new());
    let events = EventFlags::new();
    let levels = PairSnapshot::new();
    let mut first = Sampler::new(ButtonSlot::First);
    let mut second = Sampler::new(ButtonSlot::Second);

    // A goes low -> high while B stays low.
    first.sample(PinLevel::High, &levels, &events);
    second.sample(PinLevel::Low, &levels, &events);

    notify_once(&console, &events);
    notify_once(&console, &events);

    let port = console.try_claim().unwrap();
    assert_eq!(
        port.lines,
        vec!["Button 1 is Pressed\nButton 2 is Released".to_string()]
    );
}

#[test]
fn steady_levels_produce_no_reports() {
    let console: Console = Arbiter::new(RecordingPort::new());
    let events = EventFlags::new();
    let levels = PairSnapshot::new();
    let mut first = Sampler::new(ButtonSlot::First);

    for _ in 0..20 {
        first.sample(PinLevel::Low, &levels, &events);
        notify_once(&console, &events);
    }

    assert!(console.try_claim().unwrap().lines.is_empty());
}

#[test]
fn a_press_and_release_cycle_prints_both_transitions() {
    let console: Console = Arbiter::new(RecordingPort::new());
    let events = EventFlags::new();
    let levels = PairSnapshot::new();
    let mut second = Sampler::new(ButtonSlot::Second);

    second.sample(PinLevel::High, &levels, &events);
    notify_once(&console, &events);
    second.sample(PinLevel::Low, &levels, &events);
    notify_once(&console, &events);

    let port = console.try_claim().unwrap();
    assert_eq!(
        port.lines,
        vec![
            "Button 1 is Released\nButton 2 is Pressed".to_string(),
            "Button 1 is Released\nButton 2 is Released".to_string(),
        ]
    );
}

#[test]
fn a_report_that_finds_the_console_busy_is_dropped() {
    let console: Console = Arbiter::new(RecordingPort::new());
    let events = EventFlags::new();
    let levels = PairSnapshot::new();
    let mut first = Sampler::new(ButtonSlot::First);

    first.sample(PinLevel::High, &levels, &events);

    // Another producer holds the console across the notifier's period.
    let holder = console.try_claim().unwrap();
    notify_once(&console, &events);
    drop(holder);

    // The flags were cleared on observation, so nothing is retried later.
    notify_once(&console, &events);
    assert!(console.try_claim().unwrap().lines.is_empty());
}

#[test]
fn simultaneous_transitions_coalesce_into_a_silent_period() {
    let console: Console = Arbiter::new(RecordingPort::new());
    let events = EventFlags::new();
    let levels = PairSnapshot::new();
    let mut first = Sampler::new(ButtonSlot::First);
    let mut second = Sampler::new(ButtonSlot::Second);

    // Both buttons change before the notifier runs: two distinct codes
    // are raised and the combined bits match no single report.
    first.sample(PinLevel::High, &levels, &events);
    second.sample(PinLevel::High, &levels, &events);
    notify_once(&console, &events);

    assert!(console.try_claim().unwrap().lines.is_empty());

    // The next transition reports normally again.
    second.sample(PinLevel::Low, &levels, &events);
    notify_once(&console, &events);
    assert_eq!(
        console.try_claim().unwrap().lines,
        vec!["Button 1 is Pressed\nButton 2 is Released".to_string()]
    );
}

// --- Hold classification ---

#[test]
fn a_2050_ms_hold_lands_in_slow_mode() {
    let mode = ModeCell::new(ToggleMode::Off);
    let mut classifier = HoldClassifier::new(50);

    // 41 samples of 50 ms each, then release.
    for _ in 0..41 {
        assert_eq!(classifier.on_sample(PinLevel::High), None);
    }
    if let Some(selected) = classifier.on_sample(PinLevel::Low) {
        mode.store(selected);
    }

    assert_eq!(mode.load(), ToggleMode::Slow);
}

#[test]
fn hold_durations_walk_through_all_three_modes() {
    let mut classifier = HoldClassifier::new(50);
    let cases = [
        (10, ToggleMode::Off),  // 500 ms
        (40, ToggleMode::Slow), // exactly 2000 ms
        (79, ToggleMode::Slow), // 3950 ms
        (80, ToggleMode::Fast), // exactly 4000 ms
        (200, ToggleMode::Fast),
    ];

    for (samples, expected) in cases {
        for _ in 0..samples {
            classifier.on_sample(PinLevel::High);
        }
        assert_eq!(classifier.on_sample(PinLevel::Low), Some(expected));
    }
}

// --- Console arbitration ---

#[test]
fn retry_rides_out_a_transiently_busy_channel() {
    let console: Console = Arbiter::new(RecordingPort::failing(3));

    let mut port = console.try_claim().unwrap();
    assert!(send_with_retry(&mut port, "line"));
    assert_eq!(port.lines, vec!["line".to_string()]);
}

#[test]
fn retry_gives_up_once_the_budget_is_spent() {
    let console: Console = Arbiter::new(RecordingPort::failing(EMIT_RETRY_LIMIT));

    let mut port = console.try_claim().unwrap();
    assert!(!send_with_retry(&mut port, "line"));
    assert!(port.lines.is_empty());
}

#[test]
fn lower_priority_writer_never_outpaces_the_higher_one() {
    let console: Console = Arbiter::new(RecordingPort::new());

    let mut high_wins = 0u32;
    let mut low_wins = 0u32;
    let mut low_claim: Option<Claim<'_, NoopRawMutex, RecordingPort>> = None;
    let mut hold_left = 0u32;

    for round in 0..100u32 {
        // The high-priority writer polls first in every round.
        if let Some(mut port) = console.try_claim() {
            assert!(send_with_retry(&mut port, "burst"));
            high_wins += 1;
        }

        // While the loaded writer is mid-burst nobody else can claim.
        if low_claim.is_some() {
            assert!(console.try_claim().is_none());
        }

        // The low-priority writer wakes every 5th round and then burns
        // three rounds of CPU before finishing its burst.
        if hold_left > 0 {
            hold_left -= 1;
            if hold_left == 0 {
                let mut port = low_claim.take().unwrap();
                assert!(send_with_retry(&mut port, "loaded burst"));
                low_wins += 1;
            }
        } else if round % 5 == 0 {
            if let Some(port) = console.try_claim() {
                low_claim = Some(port);
                hold_left = 3;
            }
        }
    }

    assert!(high_wins > 0);
    assert!(low_wins > 0);
    assert!(low_wins <= high_wins);
}
