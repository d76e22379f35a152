//! Line formatting.
//!
//! Both shapes are consumed by existing log scrapers and must stay
//! byte-for-byte stable:
//!
//! ```text
//! [ WARNING ] [ 2.00000 ] hello world (at a.c:10)
//! 2.00000
//! ```

use std::fmt::{self, Write};

use super::level::Level;

/// Build a leveled line, including the trailing newline.
pub fn format_line(
    level: Level,
    elapsed: f64,
    message: fmt::Arguments<'_>,
    file: &str,
    line: u32,
) -> String {
    let mut buf = String::with_capacity(64);
    let _ = writeln!(
        buf,
        "[ {} ] [ {:.5} ] {} (at {}:{})",
        level.label(),
        elapsed,
        message,
        file,
        line
    );
    buf
}

/// Build a bare elapsed-time line, including the trailing newline.
pub fn format_timestamp(elapsed: f64) -> String {
    format!("{:.5}\n", elapsed)
}
