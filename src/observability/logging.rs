//! Diagnostics for the `stamplog` binary itself.
//!
//! These go to stderr through `tracing-subscriber`'s fmt layer and are quiet
//! by default, so they never mix with the lines the tool is asked to emit.
//! Set `RUST_LOG=stamplog=debug` to see them.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "stamplog=warn";

/// Install the global diagnostics subscriber.
///
/// A second call is a no-op.
pub fn init() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
