//! Severity levels and their output routing.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Output stream a line is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Severity of a log message.
///
/// Ordered from least to most urgent. `Final` marks the end of the valid
/// range and renders as a blank label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i32)]
pub enum Level {
    Debug = 1,
    Status = 2,
    Warning = 3,
    Error = 4,
    Final = 5,
}

/// Label printed for levels outside the named range.
const BLANK_LABEL: &str = "       ";

impl Level {
    /// Fixed seven character label used in the line prefix.
    pub const fn label(self) -> &'static str {
        match self {
            Level::Debug => " DEBUG ",
            Level::Status => "STATUS ",
            Level::Warning => "WARNING",
            Level::Error => " ERROR ",
            Level::Final => BLANK_LABEL,
        }
    }

    /// Warnings and below go to stdout, anything more severe to stderr.
    pub fn stream(self) -> Stream {
        if self <= Level::Warning {
            Stream::Stdout
        } else {
            Stream::Stderr
        }
    }

    /// Lowercase name as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Status => "status",
            Level::Warning => "warning",
            Level::Error => "error",
            Level::Final => "final",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors produced when turning user input into a [`Level`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseLevelError {
    #[error("unknown log level `{0}` (expected debug, status, warning or error)")]
    UnknownName(String),

    #[error("log level {0} is out of range (expected 1..=5)")]
    OutOfRange(i32),
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Level::Debug),
            "status" => Ok(Level::Status),
            "warning" | "warn" => Ok(Level::Warning),
            "error" => Ok(Level::Error),
            _ => Err(ParseLevelError::UnknownName(s.to_string())),
        }
    }
}

impl TryFrom<i32> for Level {
    type Error = ParseLevelError;

    fn try_from(raw: i32) -> Result<Self, ParseLevelError> {
        match raw {
            1 => Ok(Level::Debug),
            2 => Ok(Level::Status),
            3 => Ok(Level::Warning),
            4 => Ok(Level::Error),
            5 => Ok(Level::Final),
            other => Err(ParseLevelError::OutOfRange(other)),
        }
    }
}

impl From<Level> for i32 {
    fn from(level: Level) -> Self {
        level as i32
    }
}

impl From<&tracing::Level> for Level {
    fn from(level: &tracing::Level) -> Self {
        match *level {
            tracing::Level::TRACE | tracing::Level::DEBUG => Level::Debug,
            tracing::Level::INFO => Level::Status,
            tracing::Level::WARN => Level::Warning,
            tracing::Level::ERROR => Level::Error,
        }
    }
}
