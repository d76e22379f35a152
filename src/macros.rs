//! Logging macros that capture the caller's source location.

/// Log through the global logger.
///
/// ```no_run
/// use stamplog::{log_message, Level};
///
/// stamplog::reset_timer();
/// log_message!(Level::Status, "loaded {} items", 3);
/// ```
#[macro_export]
macro_rules! log_message {
    ($level:expr, $($arg:tt)+) => {
        $crate::logger::global::log_message(
            ::core::file!(),
            ::core::line!(),
            $level,
            ::core::format_args!($($arg)+),
        )
    };
}

/// Log through an explicit [`Logger`](crate::Logger).
///
/// ```
/// use stamplog::{log_to, Level, Logger, Resolution};
///
/// let logger = Logger::stdio(Resolution::Seconds);
/// logger.reset_timer();
/// log_to!(logger, Level::Debug, "x = {}", 1);
/// ```
#[macro_export]
macro_rules! log_to {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_message(
            ::core::file!(),
            ::core::line!(),
            $level,
            ::core::format_args!($($arg)+),
        )
    };
}
