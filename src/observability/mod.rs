//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Library callers using `tracing`:
//!     → layer.rs (StampLayer)
//!     → Logger::log_message (fixed line shape)
//!
//! The stamplog binary's own diagnostics:
//!     → logging.rs (fmt layer on stderr, EnvFilter)
//! ```

pub mod layer;
pub mod logging;

pub use layer::StampLayer;
