//! Shared helpers for integration tests.

use std::sync::Arc;

use stamplog::logger::{ManualClock, MemorySink};
use stamplog::Logger;

/// Unix time used as "now" by capturing loggers.
pub const T0: f64 = 1_700_000_000.0;

/// A logger on a manual clock that records its output in memory.
pub struct Captured {
    pub logger: Arc<Logger>,
    pub clock: Arc<ManualClock>,
    pub sink: Arc<MemorySink>,
}

#[allow(dead_code)]
pub fn captured_logger() -> Captured {
    let clock = Arc::new(ManualClock::new(T0));
    let sink = Arc::new(MemorySink::new());
    let logger = Arc::new(Logger::new(clock.clone(), sink.clone()));
    Captured { logger, clock, sink }
}

/// Split a leveled line into (label, elapsed, rest) or panic.
#[allow(dead_code)]
pub fn split_line(line: &str) -> (&str, f64, &str) {
    let rest = line.strip_prefix("[ ").expect("line starts with `[ `");
    let (label, rest) = rest.split_at(7);
    let rest = rest.strip_prefix(" ] [ ").expect("label is 7 wide");
    let (elapsed, rest) = rest.split_once(" ] ").expect("elapsed field");
    let decimals = elapsed.split_once('.').map(|(_, d)| d.len());
    assert_eq!(decimals, Some(5), "elapsed `{elapsed}` has 5 decimals");
    (label, elapsed.parse().expect("elapsed is a float"), rest)
}
