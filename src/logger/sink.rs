//! Output destinations for formatted lines.

use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::level::Stream;

/// Destination for complete, newline-terminated lines.
///
/// Implementations must not fail: logging is best-effort.
pub trait Sink: Send + Sync {
    fn write_line(&self, stream: Stream, line: &str);
}

/// Writes to the process stdout and stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdSink;

impl StdSink {
    fn write_locked<W: Write>(mut handle: W, line: &str) -> io::Result<()> {
        handle.write_all(line.as_bytes())?;
        handle.flush()
    }
}

impl Sink for StdSink {
    fn write_line(&self, stream: Stream, line: &str) {
        // Each line is a single write under the stream lock, so concurrent
        // callers never interleave within a line.
        let _ = match stream {
            Stream::Stdout => Self::write_locked(io::stdout().lock(), line),
            Stream::Stderr => Self::write_locked(io::stderr().lock(), line),
        };
    }
}

/// Keeps every written line in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<(Stream, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> MutexGuard<'_, Vec<(Stream, String)>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// All lines in write order, tagged with their stream.
    pub fn lines(&self) -> Vec<(Stream, String)> {
        self.guard().clone()
    }

    /// Concatenated stdout contents.
    pub fn stdout(&self) -> String {
        self.collect(Stream::Stdout)
    }

    /// Concatenated stderr contents.
    pub fn stderr(&self) -> String {
        self.collect(Stream::Stderr)
    }

    fn collect(&self, wanted: Stream) -> String {
        self.guard()
            .iter()
            .filter(|(stream, _)| *stream == wanted)
            .map(|(_, line)| line.as_str())
            .collect()
    }
}

impl Sink for MemorySink {
    fn write_line(&self, stream: Stream, line: &str) {
        self.guard().push((stream, line.to_string()));
    }
}
