//! `tracing` integration.
//!
//! Renders every `tracing` event through a [`Logger`], so code that already
//! uses `tracing::info!` and friends produces the same fixed line shape as
//! direct `log_message!` calls.

use std::fmt::{self, Write};
use std::sync::Arc;

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

use crate::logger::{Level, Logger};

/// Source file reported when an event carries no location.
const UNKNOWN_FILE: &str = "<unknown>";

/// A [`Layer`] that writes events as logger lines.
pub struct StampLayer {
    logger: Arc<Logger>,
}

impl StampLayer {
    pub fn new(logger: Arc<Logger>) -> Self {
        Self { logger }
    }
}

impl<S> Layer<S> for StampLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        self.logger.log_message(
            metadata.file().unwrap_or(UNKNOWN_FILE),
            metadata.line().unwrap_or(0),
            Level::from(metadata.level()),
            format_args!("{}", visitor),
        );
    }
}

/// Collects the `message` field and renders the rest as ` key=value`.
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

impl fmt::Display for MessageVisitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        f.write_str(&self.fields)
    }
}
