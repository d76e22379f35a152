//! Minimal leveled logging with elapsed-time stamps.
//!
//! Every line has the shape
//!
//! ```text
//! [ WARNING ] [ 2.00000 ] hello world (at src/main.rs:10)
//! ```
//!
//! where the second field is the number of seconds since the last
//! [`reset_timer`] call.

pub mod config;
pub mod logger;
mod macros;
pub mod observability;

pub use config::LoggerConfig;
pub use logger::global::{global, install, log_message, print_timestamp, reset_timer};
pub use logger::{Level, Logger, Resolution, Stream};
pub use observability::StampLayer;
