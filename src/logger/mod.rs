//! Leveled, timestamped logging.
//!
//! # Data Flow
//! ```text
//! log_message!(level, fmt, args..)       (file!/line! captured at call site)
//!     → Logger::log_message
//!         elapsed = clock.now() - reset point
//!     → format.rs   "[ LEVEL ] [ ELAPSED ] message (at file:line)\n"
//!     → sink.rs     stdout for level <= Warning, stderr above
//! ```
//!
//! # Design Decisions
//! - The reset point lives inside each `Logger`; `global.rs` only adds a
//!   lazily created shared instance on top
//! - Lines are formatted into one buffer and written in a single call
//! - Write failures are ignored; logging never interrupts the caller

pub mod clock;
pub mod emitter;
pub mod format;
pub mod global;
pub mod level;
pub mod sink;

pub use clock::{Clock, ManualClock, Resolution, SystemClock};
pub use emitter::Logger;
pub use level::{Level, ParseLevelError, Stream};
pub use sink::{MemorySink, Sink, StdSink};
