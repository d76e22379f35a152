//! The logger: reset point, clock and sink.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::clock::{Clock, Resolution, SystemClock};
use super::format::{format_line, format_timestamp};
use super::level::{Level, Stream};
use super::sink::{Sink, StdSink};
use crate::config::LoggerConfig;

/// Emits leveled, timestamped lines and tracks time since a reset point.
///
/// The reset point starts at the Unix epoch, so elapsed times logged before
/// the first [`Logger::reset_timer`] are seconds since 1970. All methods take
/// `&self`; the reset point is atomic and every line is written whole, so a
/// `Logger` can be shared freely between threads.
pub struct Logger {
    clock: Arc<dyn Clock>,
    sink: Arc<dyn Sink>,
    /// Reset point in epoch seconds, stored as `f64` bits.
    reset_at: AtomicU64,
}

impl Logger {
    /// Create a logger from explicit parts.
    pub fn new(clock: Arc<dyn Clock>, sink: Arc<dyn Sink>) -> Self {
        Self {
            clock,
            sink,
            reset_at: AtomicU64::new(0f64.to_bits()),
        }
    }

    /// Logger writing to the real stdout/stderr.
    pub fn stdio(resolution: Resolution) -> Self {
        Self::new(Arc::new(SystemClock::new(resolution)), Arc::new(StdSink))
    }

    /// Logger writing to the real stdout/stderr, set up from configuration.
    pub fn from_config(config: &LoggerConfig) -> Self {
        Self::stdio(config.clock.resolution)
    }

    /// Make the current time the new reference point.
    pub fn reset_timer(&self) {
        self.reset_timer_at(self.clock.now());
    }

    /// Make `epoch_secs` the new reference point.
    pub fn reset_timer_at(&self, epoch_secs: f64) {
        self.reset_at.store(epoch_secs.to_bits(), Ordering::SeqCst);
    }

    /// Current reference point in epoch seconds.
    pub fn reset_time(&self) -> f64 {
        f64::from_bits(self.reset_at.load(Ordering::SeqCst))
    }

    /// Seconds since the reference point. Negative if the clock went back.
    pub fn elapsed(&self) -> f64 {
        self.clock.now() - self.reset_time()
    }

    /// Write one leveled line tagged with its source location.
    ///
    /// Usually called through [`log_to!`](crate::log_to) or
    /// [`log_message!`](crate::log_message), which fill in `file` and `line`.
    pub fn log_message(&self, file: &str, line: u32, level: Level, message: fmt::Arguments<'_>) {
        let text = format_line(level, self.elapsed(), message, file, line);
        self.sink.write_line(level.stream(), &text);
    }

    /// Write only the elapsed time to stdout.
    pub fn print_timestamp(&self) {
        self.sink
            .write_line(Stream::Stdout, &format_timestamp(self.elapsed()));
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::stdio(Resolution::default())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("reset_at", &self.reset_time())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::clock::ManualClock;
    use crate::logger::sink::MemorySink;

    fn manual_logger(start: f64) -> (Logger, Arc<ManualClock>, Arc<MemorySink>) {
        let clock = Arc::new(ManualClock::new(start));
        let sink = Arc::new(MemorySink::new());
        let logger = Logger::new(clock.clone(), sink.clone());
        (logger, clock, sink)
    }

    #[test]
    fn test_reset_then_log_reads_zero() {
        let (logger, _clock, sink) = manual_logger(1_700_000_000.0);
        logger.reset_timer();
        logger.log_message("x.c", 1, Level::Debug, format_args!("start"));
        logger.print_timestamp();

        assert_eq!(
            sink.stdout(),
            "[  DEBUG  ] [ 0.00000 ] start (at x.c:1)\n0.00000\n"
        );
    }

    #[test]
    fn test_warning_after_two_seconds() {
        let (logger, clock, sink) = manual_logger(1_700_000_000.0);
        logger.reset_timer();
        clock.advance(2.0);
        logger.log_message("a.c", 10, Level::Warning, format_args!("hello {}", "world"));

        assert_eq!(sink.stdout(), "[ WARNING ] [ 2.00000 ] hello world (at a.c:10)\n");
        assert!(sink.stderr().is_empty());
    }

    #[test]
    fn test_error_without_reset_measures_from_epoch() {
        let (logger, _clock, sink) = manual_logger(42.0);
        logger.log_message("b.c", 5, Level::Error, format_args!("fail code={}", 7));

        assert!(sink.stdout().is_empty());
        assert_eq!(sink.stderr(), "[  ERROR  ] [ 42.00000 ] fail code=7 (at b.c:5)\n");
    }

    #[test]
    fn test_last_reset_wins() {
        let (logger, clock, sink) = manual_logger(100.0);
        logger.reset_timer();
        clock.advance(5.0);
        logger.reset_timer();
        clock.advance(1.5);
        logger.print_timestamp();

        assert_eq!(logger.reset_time(), 105.0);
        assert_eq!(sink.stdout(), "1.50000\n");
    }

    #[test]
    fn test_clock_going_backwards() {
        let (logger, clock, sink) = manual_logger(50.0);
        logger.reset_timer();
        clock.advance(-3.0);
        logger.print_timestamp();

        assert_eq!(logger.elapsed(), -3.0);
        assert_eq!(sink.stdout(), "-3.00000\n");
    }

    #[test]
    fn test_reset_timer_at() {
        let (logger, _clock, _sink) = manual_logger(30.0);
        logger.reset_timer_at(10.0);
        assert_eq!(logger.elapsed(), 20.0);
    }

    #[test]
    fn test_from_config_uses_resolution() {
        let mut config = LoggerConfig::default();
        config.clock.resolution = Resolution::SubSecond;
        let logger = Logger::from_config(&config);
        logger.reset_timer();
        assert!(logger.elapsed() < 1.0);
        assert!(logger.elapsed() >= 0.0);
    }
}
