//! Process-wide default logger.
//!
//! Programs that thread a [`Logger`] through their call sites do not need
//! this. The global instance is created on first use and is safe to use from
//! any thread.

use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;

use super::emitter::Logger;
use super::level::Level;

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// Returned by [`install`] when the global logger is already in place.
#[derive(Debug, Error)]
#[error("global logger already initialized")]
pub struct AlreadyInstalled(pub Logger);

/// The process-wide logger, created with defaults on first access.
pub fn global() -> &'static Logger {
    GLOBAL.get_or_init(Logger::default)
}

/// Replace the default global logger. Must run before first use.
pub fn install(logger: Logger) -> Result<(), AlreadyInstalled> {
    GLOBAL.set(logger).map_err(AlreadyInstalled)
}

pub fn reset_timer() {
    global().reset_timer();
}

pub fn log_message(file: &str, line: u32, level: Level, message: fmt::Arguments<'_>) {
    global().log_message(file, line, level, message);
}

pub fn print_timestamp() {
    global().print_timestamp();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_after_first_use_fails() {
        let _ = global();
        let err = install(Logger::default()).unwrap_err();
        assert_eq!(err.to_string(), "global logger already initialized");
    }

    #[test]
    fn test_reset_is_visible_through_global() {
        reset_timer();
        assert!(global().reset_time() > 0.0);
        assert!(global().elapsed() >= 0.0);
    }
}
