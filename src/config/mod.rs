//! Configuration for constructing a logger.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (read & deserialize)
//!     → LoggerConfig
//!     → Logger::from_config
//! ```
//!
//! The library never reads configuration on its own; only the `stamplog`
//! binary loads a file, and only when `--config` is given.

pub mod loader;
pub mod schema;

pub use loader::{load_config, ConfigError};
pub use schema::{ClockConfig, LoggerConfig};
